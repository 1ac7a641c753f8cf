use std::rc::Rc;

use super::FormatFn;

/// Data and formatter last used to build content. Both are compared by
/// reference, never by value.
pub(crate) struct ShowMemo<D> {
    data: Option<Rc<D>>,
    format: Option<FormatFn<D>>,
}

impl<D> ShowMemo<D> {
    pub(crate) fn new() -> Self {
        Self {
            data: None,
            format: None,
        }
    }

    pub(crate) fn matches(&self, data: Option<&Rc<D>>, format: &FormatFn<D>) -> bool {
        let same_data = match (&self.data, data) {
            (Some(last), Some(current)) => Rc::ptr_eq(last, current),
            (None, None) => true,
            _ => false,
        };
        let same_format = self
            .format
            .as_ref()
            .is_some_and(|last| Rc::ptr_eq(last, format));

        same_data && same_format
    }

    pub(crate) fn record(&mut self, data: Option<Rc<D>>, format: &FormatFn<D>) {
        self.data = data;
        self.format = Some(Rc::clone(format));
    }

    pub(crate) fn clear(&mut self) {
        self.data = None;
        self.format = None;
    }
}
