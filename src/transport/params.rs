use serde::Serialize;

use crate::domain::{OneOrMany, ValidationError};

/// A single form value before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Integer(u64),
    Json(serde_json::Value),
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn encode(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Integer(value) => value.to_string(),
            Self::Json(value) => value.to_string(),
        }
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<u8> for ParamValue {
    fn from(value: u8) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Integer(u64::from(value))
    }
}

/// Ordered request parameters. `None` entries are kept until [`Params::prune`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(&'static str, Option<ParamValue>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<ParamValue>) {
        self.entries.push((name, Some(value.into())));
    }

    pub fn push_opt<V: Into<ParamValue>>(&mut self, name: &'static str, value: Option<V>) {
        self.entries.push((name, value.map(Into::into)));
    }

    /// Drop every null-valued key and encode the rest, preserving order.
    pub fn prune(self) -> Vec<(String, String)> {
        self.entries
            .into_iter()
            .filter_map(|(name, value)| value.map(|value| (name.to_owned(), value.encode())))
            .collect()
    }
}

/// Spread a value over `count` receptors as a JSON array.
///
/// A single value is repeated `count` times. A list is passed through unchanged, but only if it
/// already has exactly `count` items.
pub fn pad<'a, T, U, F>(
    field: &'static str,
    count: usize,
    value: &'a OneOrMany<T>,
    map: F,
) -> Result<ParamValue, ValidationError>
where
    F: Fn(&'a T) -> U,
    U: Serialize,
{
    let items = match value {
        OneOrMany::Many(values) => {
            if values.len() != count {
                return Err(ValidationError::LengthMismatch {
                    field,
                    expected: count,
                    actual: values.len(),
                });
            }
            values.iter().map(|value| to_json(map(value))).collect()
        }
        OneOrMany::One(value) => vec![to_json(map(value)); count],
    };
    Ok(ParamValue::Json(serde_json::Value::Array(items)))
}

// Strings and integers always serialize.
fn to_json<U: Serialize>(value: U) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

/// Comma-join values for endpoints that take a list as a single form field.
pub fn join<'a>(values: impl IntoIterator<Item = &'a str>) -> ParamValue {
    ParamValue::Text(values.into_iter().collect::<Vec<_>>().join(","))
}
