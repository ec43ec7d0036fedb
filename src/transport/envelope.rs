use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use super::TransportError;
use super::number::TransportNumber;
use crate::domain::ApiStatusCode;

#[derive(Debug, Deserialize)]
struct ReturnJson {
    status: TransportNumber,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeJson {
    #[serde(rename = "return")]
    ret: ReturnJson,
    #[serde(default)]
    entries: Option<Box<RawValue>>,
}

/// Every Kavenegar response: `{"return": {"status", "message"}, "entries": ...}`.
#[derive(Debug)]
pub struct Envelope {
    pub status: ApiStatusCode,
    pub message: Option<String>,
    entries: Box<RawValue>,
}

impl Envelope {
    /// Raw `entries` payload. A missing field reads as `null`.
    pub fn entries(&self) -> &RawValue {
        &self.entries
    }
}

fn is_null(raw: &RawValue) -> bool {
    raw.get().trim() == "null"
}

pub fn decode_envelope(body: &str) -> Result<Envelope, TransportError> {
    let parsed: EnvelopeJson = serde_json::from_str(body)?;
    let status = parsed
        .ret
        .status
        .into_i32()
        .ok_or(TransportError::InvalidField { field: "status" })?;
    // `Option<Box<RawValue>>` reads both a missing field and `null` as `None`.
    let entries = match parsed.entries {
        Some(entries) => entries,
        None => RawValue::from_string("null".to_owned())?,
    };
    Ok(Envelope {
        status: ApiStatusCode::new(status),
        message: parsed.ret.message,
        entries,
    })
}

/// Decode entries that Kavenegar returns as a JSON array. `null` means nothing matched.
pub fn decode_list<T: DeserializeOwned>(raw: &RawValue) -> Result<Vec<T>, TransportError> {
    if is_null(raw) {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw.get())?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SingleOrList<T> {
    List(Vec<T>),
    Single(T),
}

/// Decode entries describing one record, sent either as an object or a one-item array.
pub fn decode_single<T: DeserializeOwned>(raw: &RawValue) -> Result<T, TransportError> {
    if is_null(raw) {
        return Err(TransportError::MissingEntries);
    }
    match serde_json::from_str::<SingleOrList<T>>(raw.get())? {
        SingleOrList::List(values) => values
            .into_iter()
            .next()
            .ok_or(TransportError::MissingEntries),
        SingleOrList::Single(value) => Ok(value),
    }
}
