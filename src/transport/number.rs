use serde::Deserialize;

/// Numeric field that Kavenegar may return either as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportNumber {
    Int(i64),
    Float(f64),
    String(String),
}

impl TransportNumber {
    pub fn into_i64(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            // Credits and costs are whole rials; drop any fractional part.
            Self::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Self::Float(_) => None,
            Self::String(value) => value.trim().parse::<i64>().ok(),
        }
    }

    pub fn into_u64(self) -> Option<u64> {
        self.into_i64().and_then(|value| u64::try_from(value).ok())
    }

    pub fn into_i32(self) -> Option<i32> {
        self.into_i64().and_then(|value| i32::try_from(value).ok())
    }
}
