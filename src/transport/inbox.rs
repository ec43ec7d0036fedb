use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::envelope::{decode_list, decode_single};
use super::number::TransportNumber;
use super::outbox::{END_DATE_FIELD, START_DATE_FIELD, timestamp};
use super::params::{ParamValue, Params};
use crate::domain::{
    InboxCount, InboxCountQuery, InboxEntry, InboxQuery, MessageId, Sender, UnixTimestamp,
};

const IS_READ_FIELD: &str = "isread";

#[derive(Debug, Clone, Deserialize)]
struct InboxEntryJson {
    messageid: TransportNumber,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    sender: Option<String>,
    #[serde(default)]
    receptor: Option<String>,
    #[serde(default)]
    date: Option<TransportNumber>,
}

#[derive(Debug, Clone, Deserialize)]
struct InboxCountJson {
    #[serde(default)]
    startdate: Option<TransportNumber>,
    #[serde(default)]
    enddate: Option<TransportNumber>,
    #[serde(default)]
    sumcount: Option<TransportNumber>,
}

pub fn encode_inbox_params(query: &InboxQuery, default_line: Option<&Sender>) -> Params {
    let mut params = Params::new();
    params.push_opt(Sender::LINE_FIELD, line(query.line.as_ref(), default_line));
    params.push(IS_READ_FIELD, query.only_read);
    params
}

pub fn encode_inbox_count_params(
    query: &InboxCountQuery,
    default_line: Option<&Sender>,
) -> Params {
    let mut params = Params::new();
    params.push(START_DATE_FIELD, query.start.value());
    params.push_opt(END_DATE_FIELD, query.end.map(UnixTimestamp::value));
    params.push_opt(Sender::LINE_FIELD, line(query.line.as_ref(), default_line));
    params.push(IS_READ_FIELD, query.only_read);
    params
}

fn line(line: Option<&Sender>, default_line: Option<&Sender>) -> Option<ParamValue> {
    line.or(default_line)
        .map(|sender| ParamValue::text(sender.as_str()))
}

pub fn decode_inbox_entries(raw: &RawValue) -> Result<Vec<InboxEntry>, TransportError> {
    decode_list::<InboxEntryJson>(raw)?
        .into_iter()
        .map(|entry| -> Result<InboxEntry, TransportError> {
            Ok(InboxEntry {
                message_id: entry
                    .messageid
                    .into_u64()
                    .map(MessageId::new)
                    .ok_or(TransportError::InvalidField {
                        field: MessageId::FIELD,
                    })?,
                message: entry.message,
                sender: entry.sender,
                receptor: entry.receptor,
                date: timestamp(entry.date),
            })
        })
        .collect()
}

pub fn decode_inbox_count(raw: &RawValue) -> Result<InboxCount, TransportError> {
    let parsed: InboxCountJson = decode_single(raw)?;
    Ok(InboxCount {
        start_date: timestamp(parsed.startdate),
        end_date: timestamp(parsed.enddate),
        sum_count: parsed.sumcount.and_then(TransportNumber::into_u64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn encode_inbox_sends_isread_as_integer() {
        let query = InboxQuery {
            only_read: true,
            line: Some(Sender::new("30002626").unwrap()),
        };
        assert_eq!(
            encode_inbox_params(&query, None).prune(),
            vec![pair("linenumber", "30002626"), pair("isread", "1")]
        );
    }

    #[test]
    fn encode_inbox_falls_back_to_default_line() {
        let default_line = Sender::new("10004346").unwrap();
        assert_eq!(
            encode_inbox_params(&InboxQuery::default(), Some(&default_line)).prune(),
            vec![pair("linenumber", "10004346"), pair("isread", "0")]
        );
        assert_eq!(
            encode_inbox_params(&InboxQuery::default(), None).prune(),
            vec![pair("isread", "0")]
        );
    }

    #[test]
    fn encode_inbox_count_params_order() {
        let mut query = InboxCountQuery::since(UnixTimestamp::new(100));
        query.end = Some(UnixTimestamp::new(200));
        assert_eq!(
            encode_inbox_count_params(&query, None).prune(),
            vec![
                pair("startdate", "100"),
                pair("enddate", "200"),
                pair("isread", "0"),
            ]
        );
    }

    #[test]
    fn decode_inbox_entries_and_count() {
        let entries = RawValue::from_string(
            r#"[{"messageid":1470,"message":"salam","sender":"09361234567","receptor":"30002626","date":1410152400}]"#
                .to_owned(),
        )
        .unwrap();
        let entries = decode_inbox_entries(&entries).unwrap();
        assert_eq!(entries[0].message_id, MessageId::new(1470));
        assert_eq!(entries[0].sender.as_deref(), Some("09361234567"));
        assert_eq!(entries[0].date, Some(UnixTimestamp::new(1_410_152_400)));

        let count = RawValue::from_string(
            r#"[{"startdate":1410152400,"enddate":1410238800,"sumcount":3}]"#.to_owned(),
        )
        .unwrap();
        assert_eq!(decode_inbox_count(&count).unwrap().sum_count, Some(3));
    }
}
