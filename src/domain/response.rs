use crate::domain::request::{ApiLogs, Toggle};
use crate::domain::value::{DeliveryStatus, LocalId, MessageId, UnixTimestamp};

/// A sent message as returned by the send, select and outbox endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEntry {
    pub message_id: MessageId,
    pub message: Option<String>,
    pub status: DeliveryStatus,
    pub status_text: Option<String>,
    pub sender: Option<String>,
    pub receptor: Option<String>,
    pub date: Option<UnixTimestamp>,
    /// Cost in rials.
    pub cost: Option<i64>,
}

/// Delivery status of a message (`sms/status`, `sms/cancel`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub message_id: MessageId,
    pub status: DeliveryStatus,
    pub status_text: Option<String>,
}

/// Delivery status looked up by local id (`sms/statuslocalmessageid`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStatusEntry {
    pub message_id: Option<MessageId>,
    pub local_id: Option<LocalId>,
    pub status: DeliveryStatus,
    pub status_text: Option<String>,
}

/// A received message (`sms/receive`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxEntry {
    pub message_id: MessageId,
    pub message: Option<String>,
    pub sender: Option<String>,
    pub receptor: Option<String>,
    pub date: Option<UnixTimestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboxCount {
    pub start_date: Option<UnixTimestamp>,
    pub end_date: Option<UnixTimestamp>,
    /// Number of message parts, counting each multipart message segment.
    pub sum_part: Option<u64>,
    pub sum_count: Option<u64>,
    pub cost: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboxCount {
    pub start_date: Option<UnixTimestamp>,
    pub end_date: Option<UnixTimestamp>,
    pub sum_count: Option<u64>,
}

/// Subscriber count of one operator section inside a postal code area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCodeCount {
    pub section: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// Remaining credit in rials.
    pub remain_credit: Option<i64>,
    pub expire_date: Option<UnixTimestamp>,
    pub account_type: Option<String>,
}

/// Current account configuration. Unrecognized values come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountConfig {
    pub api_logs: Option<ApiLogs>,
    pub daily_report: Option<Toggle>,
    pub debug_mode: Option<Toggle>,
    pub default_sender: Option<String>,
    pub min_credit_alarm: Option<u64>,
    pub resend_failed: Option<Toggle>,
}
