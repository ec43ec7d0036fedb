use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::envelope::decode_list;
use super::number::TransportNumber;
use super::params::{ParamValue, Params};
use crate::domain::{
    MessageText, PostalCode, PostalCodeCount, SendByPostalCode, Sender, UnixTimestamp,
};

#[derive(Debug, Clone, Deserialize)]
struct PostalCodeCountJson {
    section: String,
    value: TransportNumber,
}

pub fn encode_count_postal_code_params(postal_code: &PostalCode) -> Params {
    let mut params = Params::new();
    params.push(PostalCode::FIELD, ParamValue::text(postal_code.as_str()));
    params
}

pub fn encode_send_by_postal_code_params(
    request: &SendByPostalCode,
    default_sender: Option<&Sender>,
) -> Params {
    let mut params = Params::new();
    params.push(
        PostalCode::FIELD,
        ParamValue::text(request.postal_code.as_str()),
    );
    params.push_opt(
        Sender::FIELD,
        request
            .sender
            .as_ref()
            .or(default_sender)
            .map(|sender| ParamValue::text(sender.as_str())),
    );
    params.push(
        MessageText::FIELD,
        ParamValue::text(request.message.as_str()),
    );
    params.push("mcistartindex", request.mci.start_index);
    params.push("mcicount", request.mci.count);
    params.push("mtnstartindex", request.mtn.start_index);
    params.push("mtncount", request.mtn.count);
    params.push_opt(UnixTimestamp::FIELD, request.date.map(UnixTimestamp::value));
    params
}

pub fn decode_postal_code_counts(raw: &RawValue) -> Result<Vec<PostalCodeCount>, TransportError> {
    decode_list::<PostalCodeCountJson>(raw)?
        .into_iter()
        .map(|entry| -> Result<PostalCodeCount, TransportError> {
            Ok(PostalCodeCount {
                section: entry.section,
                value: entry
                    .value
                    .into_u64()
                    .ok_or(TransportError::InvalidField { field: "value" })?,
            })
        })
        .collect()
}
