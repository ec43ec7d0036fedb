use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::envelope::decode_list;
use super::number::TransportNumber;
use super::params::{ParamValue, Params, join, pad};
use crate::domain::{
    BulkSend, DeliveryStatus, LocalId, MessageEntry, MessageId, MessageText, MessageType,
    OneOrMany, Receptor, SendMessage, Sender, UnixTimestamp, ValidationError,
};

#[derive(Debug, Clone, Deserialize)]
struct MessageEntryJson {
    messageid: TransportNumber,
    #[serde(default)]
    message: Option<String>,
    status: TransportNumber,
    #[serde(default)]
    statustext: Option<String>,
    #[serde(default)]
    sender: Option<String>,
    #[serde(default)]
    receptor: Option<String>,
    #[serde(default)]
    date: Option<TransportNumber>,
    #[serde(default)]
    cost: Option<TransportNumber>,
}

pub fn encode_send_params(request: &SendMessage, default_sender: Option<&Sender>) -> Params {
    let options = request.options();
    let mut params = Params::new();

    params.push(
        Receptor::FIELD,
        join(request.receptors().iter().map(Receptor::raw)),
    );
    params.push_opt(
        Sender::FIELD,
        options
            .sender
            .as_ref()
            .or(default_sender)
            .map(|sender| ParamValue::text(sender.as_str())),
    );
    params.push(
        MessageText::FIELD,
        ParamValue::text(request.message().as_str()),
    );
    params.push_opt(UnixTimestamp::FIELD, options.date.map(UnixTimestamp::value));
    params.push_opt(MessageType::FIELD, options.message_type.map(MessageType::code));
    params.push_opt(
        LocalId::FIELD,
        options
            .local_ids
            .as_ref()
            .map(|ids| join(ids.iter().map(LocalId::as_str))),
    );

    params
}

pub fn encode_bulk_send_params(
    request: &BulkSend,
    default_sender: Option<&Sender>,
) -> Result<Params, ValidationError> {
    let options = request.options();
    let count = request.receptors().len();
    let mut params = Params::new();

    params.push(
        Receptor::FIELD,
        ParamValue::Json(serde_json::Value::from(
            request
                .receptors()
                .iter()
                .map(|receptor| receptor.raw().to_owned())
                .collect::<Vec<_>>(),
        )),
    );

    let senders = match (options.senders.as_ref(), default_sender) {
        (Some(senders), _) => Some(pad(Sender::FIELD, count, senders, |s| s.as_str())?),
        (None, Some(sender)) => Some(pad(
            Sender::FIELD,
            count,
            &OneOrMany::One(sender),
            |s| s.as_str(),
        )?),
        (None, None) => None,
    };
    params.push_opt(Sender::FIELD, senders);
    params.push(
        MessageText::FIELD,
        pad(MessageText::FIELD, count, request.messages(), |m| m.as_str())?,
    );
    params.push_opt(UnixTimestamp::FIELD, options.date.map(UnixTimestamp::value));
    params.push_opt(
        MessageType::FIELD,
        options
            .message_types
            .as_ref()
            .map(|types| pad(MessageType::FIELD, count, types, |t| t.code()))
            .transpose()?,
    );
    params.push_opt(
        LocalId::FIELD,
        options
            .local_ids
            .as_ref()
            .map(|ids| pad(LocalId::FIELD, count, ids, |id| id.as_str()))
            .transpose()?,
    );

    Ok(params)
}

/// Decode the message list shared by the send, select, outbox and lookup endpoints.
pub fn decode_message_entries(raw: &RawValue) -> Result<Vec<MessageEntry>, TransportError> {
    decode_list::<MessageEntryJson>(raw)?
        .into_iter()
        .map(|entry| -> Result<MessageEntry, TransportError> {
            Ok(MessageEntry {
                message_id: entry
                    .messageid
                    .into_u64()
                    .map(MessageId::new)
                    .ok_or(TransportError::InvalidField {
                        field: MessageId::FIELD,
                    })?,
                message: entry.message,
                status: entry
                    .status
                    .into_i32()
                    .map(DeliveryStatus::new)
                    .ok_or(TransportError::InvalidField { field: "status" })?,
                status_text: entry.statustext,
                sender: entry.sender,
                receptor: entry.receptor,
                date: entry
                    .date
                    .and_then(TransportNumber::into_u64)
                    .map(UnixTimestamp::new),
                cost: entry.cost.and_then(TransportNumber::into_i64),
            })
        })
        .collect()
}
