use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::envelope::decode_list;
use super::number::TransportNumber;
use super::params::{Params, join};
use crate::domain::{
    DeliveryStatus, LocalId, LocalIds, LocalStatusEntry, MessageId, MessageIds, StatusEntry,
};

#[derive(Debug, Clone, Deserialize)]
struct StatusEntryJson {
    messageid: TransportNumber,
    status: TransportNumber,
    #[serde(default)]
    statustext: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LocalStatusEntryJson {
    #[serde(default)]
    messageid: Option<TransportNumber>,
    #[serde(default)]
    localid: Option<TransportNumber>,
    status: TransportNumber,
    #[serde(default)]
    statustext: Option<String>,
}

/// `messageid` parameter shared by `status`, `select` and `cancel`.
pub fn encode_message_ids_params(request: &MessageIds) -> Params {
    let ids = request
        .ids()
        .iter()
        .map(|id| id.value().to_string())
        .collect::<Vec<_>>();
    let mut params = Params::new();
    params.push(MessageId::FIELD, join(ids.iter().map(String::as_str)));
    params
}

pub fn encode_local_ids_params(request: &LocalIds) -> Params {
    let mut params = Params::new();
    params.push(
        LocalId::FIELD,
        join(request.ids().iter().map(LocalId::as_str)),
    );
    params
}

pub fn decode_status_entries(raw: &RawValue) -> Result<Vec<StatusEntry>, TransportError> {
    decode_list::<StatusEntryJson>(raw)?
        .into_iter()
        .map(|entry| -> Result<StatusEntry, TransportError> {
            Ok(StatusEntry {
                message_id: decode_message_id(entry.messageid)?,
                status: decode_status(entry.status)?,
                status_text: entry.statustext,
            })
        })
        .collect()
}

pub fn decode_local_status_entries(
    raw: &RawValue,
) -> Result<Vec<LocalStatusEntry>, TransportError> {
    decode_list::<LocalStatusEntryJson>(raw)?
        .into_iter()
        .map(|entry| -> Result<LocalStatusEntry, TransportError> {
            Ok(LocalStatusEntry {
                message_id: entry
                    .messageid
                    .and_then(TransportNumber::into_u64)
                    .map(MessageId::new),
                local_id: entry
                    .localid
                    .map(local_id_text)
                    .and_then(|text| LocalId::new(text).ok()),
                status: decode_status(entry.status)?,
                status_text: entry.statustext,
            })
        })
        .collect()
}

fn decode_message_id(value: TransportNumber) -> Result<MessageId, TransportError> {
    value
        .into_u64()
        .map(MessageId::new)
        .ok_or(TransportError::InvalidField {
            field: MessageId::FIELD,
        })
}

fn decode_status(value: TransportNumber) -> Result<DeliveryStatus, TransportError> {
    value
        .into_i32()
        .map(DeliveryStatus::new)
        .ok_or(TransportError::InvalidField { field: "status" })
}

// Local ids are echoed back as strings, or as numbers when they look numeric.
fn local_id_text(value: TransportNumber) -> String {
    match value {
        TransportNumber::String(text) => text,
        TransportNumber::Int(number) => number.to_string(),
        TransportNumber::Float(number) => number.to_string(),
    }
}
