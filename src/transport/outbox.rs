use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::envelope::decode_single;
use super::number::TransportNumber;
use super::params::{ParamValue, Params};
use crate::domain::{OutboxCount, OutboxQuery, PageSize, RecentOutboxQuery, Sender, UnixTimestamp};

pub const START_DATE_FIELD: &str = "startdate";
pub const END_DATE_FIELD: &str = "enddate";

#[derive(Debug, Clone, Deserialize)]
struct OutboxCountJson {
    #[serde(default)]
    startdate: Option<TransportNumber>,
    #[serde(default)]
    enddate: Option<TransportNumber>,
    #[serde(default)]
    sumpart: Option<TransportNumber>,
    #[serde(default)]
    sumcount: Option<TransportNumber>,
    #[serde(default)]
    cost: Option<TransportNumber>,
}

/// Parameters for `selectoutbox` and `countoutbox`.
pub fn encode_outbox_params(query: &OutboxQuery, default_sender: Option<&Sender>) -> Params {
    let mut params = Params::new();
    params.push(START_DATE_FIELD, query.start.value());
    params.push_opt(END_DATE_FIELD, query.end.map(UnixTimestamp::value));
    params.push_opt(
        Sender::FIELD,
        query
            .sender
            .as_ref()
            .or(default_sender)
            .map(|sender| ParamValue::text(sender.as_str())),
    );
    params
}

pub fn encode_recent_outbox_params(
    query: &RecentOutboxQuery,
    default_sender: Option<&Sender>,
) -> Params {
    let mut params = Params::new();
    params.push(PageSize::FIELD, query.page_size.value());
    params.push_opt(
        Sender::FIELD,
        query
            .sender
            .as_ref()
            .or(default_sender)
            .map(|sender| ParamValue::text(sender.as_str())),
    );
    params
}

pub fn decode_outbox_count(raw: &RawValue) -> Result<OutboxCount, TransportError> {
    let parsed: OutboxCountJson = decode_single(raw)?;
    Ok(OutboxCount {
        start_date: timestamp(parsed.startdate),
        end_date: timestamp(parsed.enddate),
        sum_part: parsed.sumpart.and_then(TransportNumber::into_u64),
        sum_count: parsed.sumcount.and_then(TransportNumber::into_u64),
        cost: parsed.cost.and_then(TransportNumber::into_i64),
    })
}

pub(super) fn timestamp(value: Option<TransportNumber>) -> Option<UnixTimestamp> {
    value
        .and_then(TransportNumber::into_u64)
        .map(UnixTimestamp::new)
}
