//! Display payloads
//!
//! A payload is what the tooltip actually shows: an optional title and an
//! ordered list of title/value rows. It may also carry option overrides that
//! apply when the payload is built.

use serde_json::Value;

use crate::options::TooltipOptions;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayPayload {
    pub title: Option<String>,
    pub items: Vec<Item>,
    pub options: TooltipOptions,
}

impl DisplayPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn item(mut self, title: impl Into<String>, value: impl ToString) -> Self {
        self.items.push(Item {
            title: title.into(),
            value: value.to_string(),
        });
        self
    }

    pub fn options(mut self, options: TooltipOptions) -> Self {
        self.options = options;
        self
    }

    pub fn is_blank(&self) -> bool {
        self.title.is_none() && self.items.is_empty()
    }

    /// Interprets JSON the way a formatter's raw output is read:
    ///
    /// - `null` and `false` mean "nothing to show"
    /// - a string or number becomes the title
    /// - an object supplies `title`, `items` (`[{title, value}]`) and any
    ///   option keys
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(text) => Some(Self::new().title(text.clone())),
            Value::Number(number) => Some(Self::new().title(number.to_string())),
            Value::Object(map) => {
                let title = map.get("title").and_then(json_text);
                let items = map
                    .get("items")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().filter_map(json_item).collect())
                    .unwrap_or_default();

                Some(Self {
                    title,
                    items,
                    options: TooltipOptions::from_json_map(map),
                })
            }
            Value::Bool(true) | Value::Array(_) => Some(Self::new()),
        }
    }
}

fn json_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn json_item(value: &Value) -> Option<Item> {
    let map = value.as_object()?;
    Some(Item {
        title: map.get("title").and_then(json_text).unwrap_or_default(),
        value: map.get("value").and_then(json_text).unwrap_or_default(),
    })
}

/// Data that can be shown without a custom formatter.
pub trait TooltipSource {
    fn to_payload(&self) -> Option<DisplayPayload>;
}

impl TooltipSource for DisplayPayload {
    fn to_payload(&self) -> Option<DisplayPayload> {
        Some(self.clone())
    }
}

impl TooltipSource for Value {
    fn to_payload(&self) -> Option<DisplayPayload> {
        DisplayPayload::from_json(self)
    }
}

impl<T: TooltipSource> TooltipSource for Option<T> {
    fn to_payload(&self) -> Option<DisplayPayload> {
        self.as_ref().and_then(TooltipSource::to_payload)
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod payload_tests;
