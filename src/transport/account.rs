use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::envelope::decode_single;
use super::number::TransportNumber;
use super::outbox::timestamp;
use super::params::{ParamValue, Params};
use crate::domain::{AccountConfig, AccountConfigUpdate, AccountInfo, ApiLogs, Toggle};

#[derive(Debug, Clone, Deserialize)]
struct AccountInfoJson {
    #[serde(default)]
    remaincredit: Option<TransportNumber>,
    #[serde(default)]
    expiredate: Option<TransportNumber>,
    #[serde(default, rename = "type")]
    account_type: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AccountConfigJson {
    #[serde(default)]
    apilogs: Option<String>,
    #[serde(default)]
    dailyreport: Option<String>,
    #[serde(default)]
    debugmode: Option<String>,
    #[serde(default)]
    defaultsender: Option<String>,
    #[serde(default)]
    mincreditalarm: Option<TransportNumber>,
    #[serde(default)]
    resendfailed: Option<String>,
}

pub fn encode_account_config_params(update: &AccountConfigUpdate) -> Params {
    let mut params = Params::new();
    params.push_opt(
        "apilogs",
        update.api_logs.map(|value| ParamValue::text(value.as_str())),
    );
    params.push_opt("dailyreport", toggle(update.daily_report));
    params.push_opt("debugmode", toggle(update.debug_mode));
    params.push_opt(
        "defaultsender",
        update
            .default_sender
            .as_ref()
            .map(|sender| ParamValue::text(sender.as_str())),
    );
    params.push_opt("mincreditalarm", update.min_credit_alarm);
    params.push_opt("resendfailed", toggle(update.resend_failed));
    params
}

fn toggle(value: Option<Toggle>) -> Option<ParamValue> {
    value.map(|value| ParamValue::text(value.as_str()))
}

pub fn decode_account_info(raw: &RawValue) -> Result<AccountInfo, TransportError> {
    let parsed: AccountInfoJson = decode_single(raw)?;
    Ok(AccountInfo {
        remain_credit: parsed.remaincredit.and_then(TransportNumber::into_i64),
        expire_date: timestamp(parsed.expiredate),
        account_type: parsed.account_type,
    })
}

pub fn decode_account_config(raw: &RawValue) -> Result<AccountConfig, TransportError> {
    let parsed: AccountConfigJson = decode_single(raw)?;
    Ok(AccountConfig {
        api_logs: parsed.apilogs.as_deref().and_then(ApiLogs::from_wire),
        daily_report: parsed.dailyreport.as_deref().and_then(Toggle::from_wire),
        debug_mode: parsed.debugmode.as_deref().and_then(Toggle::from_wire),
        default_sender: parsed
            .defaultsender
            .filter(|sender| !sender.trim().is_empty()),
        min_credit_alarm: parsed.mincreditalarm.and_then(TransportNumber::into_u64),
        resend_failed: parsed.resendfailed.as_deref().and_then(Toggle::from_wire),
    })
}
