use std::rc::Rc;

use crate::geometry::{Bounds, Point};

/// One hit-testable region and the data shown when it is hovered.
#[derive(Debug)]
pub struct Element<D> {
    pub bounds: Bounds,
    pub data: Rc<D>,
    pub key: usize,
}

impl<D> Clone for Element<D> {
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds,
            data: Rc::clone(&self.data),
            key: self.key,
        }
    }
}

/// Elements in drawing order. Later elements sit on top of earlier ones.
#[derive(Debug)]
pub struct Selection<D> {
    elements: Vec<Element<D>>,
}

impl<D> Selection<D> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Adds an element keyed by its position in the selection.
    pub fn push(&mut self, bounds: Bounds, data: Rc<D>) -> usize {
        let key = self.elements.len();
        self.push_keyed(bounds, data, key);
        key
    }

    pub fn push_keyed(&mut self, bounds: Bounds, data: Rc<D>, key: usize) {
        self.elements.push(Element { bounds, data, key });
    }

    pub fn elements(&self) -> &[Element<D>] {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Element<D>> {
        self.elements.get(index)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Index of the topmost element containing `point`.
    pub fn hit(&self, point: Point) -> Option<usize> {
        self.elements
            .iter()
            .rposition(|element| element.bounds.contains(point))
    }
}

impl<D> Default for Selection<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for Selection<D> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
        }
    }
}

impl<D> FromIterator<(Bounds, Rc<D>)> for Selection<D> {
    fn from_iter<I: IntoIterator<Item = (Bounds, Rc<D>)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (bounds, data) in iter {
            selection.push(bounds, data);
        }
        selection
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
