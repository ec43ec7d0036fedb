use crate::domain::validation::ValidationError;
use crate::domain::value::{
    LocalId, MessageId, MessageText, MessageType, OneOrMany, PageSize, PostalCode, Receptor,
    Sender, TemplateName, UnixTimestamp, VerifyToken,
};

#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    /// Overrides the client-wide default sender.
    pub sender: Option<Sender>,
    /// Schedule the send for this moment instead of sending now.
    pub date: Option<UnixTimestamp>,
    pub message_type: Option<MessageType>,
    /// Either one id for the whole request or one id per receptor.
    pub local_ids: Option<OneOrMany<LocalId>>,
}

/// One text to one or more receptors (`sms/send`).
#[derive(Debug, Clone)]
pub struct SendMessage {
    receptors: Vec<Receptor>,
    message: MessageText,
    options: SendOptions,
}

impl SendMessage {
    pub fn new(
        receptors: Vec<Receptor>,
        message: MessageText,
        options: SendOptions,
    ) -> Result<Self, ValidationError> {
        if receptors.is_empty() {
            return Err(ValidationError::Empty {
                field: Receptor::FIELD,
            });
        }
        if let Some(actual) = options.local_ids.as_ref().and_then(OneOrMany::list_len) {
            if actual != receptors.len() {
                return Err(ValidationError::LengthMismatch {
                    field: LocalId::FIELD,
                    expected: receptors.len(),
                    actual,
                });
            }
        }
        Ok(Self {
            receptors,
            message,
            options,
        })
    }

    /// Shorthand for a single receptor with default options.
    pub fn to(receptor: Receptor, message: MessageText) -> Self {
        Self {
            receptors: vec![receptor],
            message,
            options: SendOptions::default(),
        }
    }

    pub fn receptors(&self) -> &[Receptor] {
        &self.receptors
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SendOptions {
        &self.options
    }
}

/// Options for [`BulkSend`]. List values must have one entry per receptor.
#[derive(Debug, Clone, Default)]
pub struct BulkSendOptions {
    pub senders: Option<OneOrMany<Sender>>,
    pub date: Option<UnixTimestamp>,
    pub message_types: Option<OneOrMany<MessageType>>,
    pub local_ids: Option<OneOrMany<LocalId>>,
}

/// Per-receptor texts and senders in one request (`sms/sendarray`).
///
/// Single values are replicated to every receptor when the request is encoded; list lengths
/// are checked against the receptor count at that point.
#[derive(Debug, Clone)]
pub struct BulkSend {
    receptors: Vec<Receptor>,
    messages: OneOrMany<MessageText>,
    options: BulkSendOptions,
}

impl BulkSend {
    pub fn new(
        receptors: Vec<Receptor>,
        messages: OneOrMany<MessageText>,
        options: BulkSendOptions,
    ) -> Result<Self, ValidationError> {
        if receptors.is_empty() {
            return Err(ValidationError::Empty {
                field: Receptor::FIELD,
            });
        }
        Ok(Self {
            receptors,
            messages,
            options,
        })
    }

    pub fn receptors(&self) -> &[Receptor] {
        &self.receptors
    }

    pub fn messages(&self) -> &OneOrMany<MessageText> {
        &self.messages
    }

    pub fn options(&self) -> &BulkSendOptions {
        &self.options
    }
}

/// Non-empty list of message ids for status, detail and cancel calls.
#[derive(Debug, Clone)]
pub struct MessageIds {
    ids: Vec<MessageId>,
}

impl MessageIds {
    pub fn new(ids: Vec<MessageId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty {
                field: MessageId::FIELD,
            });
        }
        Ok(Self { ids })
    }

    pub fn one(id: MessageId) -> Self {
        Self { ids: vec![id] }
    }

    pub fn ids(&self) -> &[MessageId] {
        &self.ids
    }
}

/// Non-empty list of local ids for `sms/statuslocalmessageid`.
#[derive(Debug, Clone)]
pub struct LocalIds {
    ids: Vec<LocalId>,
}

impl LocalIds {
    pub fn new(ids: Vec<LocalId>) -> Result<Self, ValidationError> {
        if ids.is_empty() {
            return Err(ValidationError::Empty {
                field: LocalId::FIELD,
            });
        }
        Ok(Self { ids })
    }

    pub fn one(id: LocalId) -> Self {
        Self { ids: vec![id] }
    }

    pub fn ids(&self) -> &[LocalId] {
        &self.ids
    }
}

/// Date-range query over sent messages (`sms/selectoutbox`, `sms/countoutbox`).
#[derive(Debug, Clone)]
pub struct OutboxQuery {
    pub start: UnixTimestamp,
    pub end: Option<UnixTimestamp>,
    pub sender: Option<Sender>,
}

impl OutboxQuery {
    pub fn since(start: UnixTimestamp) -> Self {
        Self {
            start,
            end: None,
            sender: None,
        }
    }

    pub fn until(mut self, end: UnixTimestamp) -> Self {
        self.end = Some(end);
        self
    }

    pub fn sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }
}

/// Latest sent messages (`sms/latestoutbox`).
#[derive(Debug, Clone, Default)]
pub struct RecentOutboxQuery {
    pub page_size: PageSize,
    pub sender: Option<Sender>,
}

/// Received messages (`sms/receive`).
#[derive(Debug, Clone, Default)]
pub struct InboxQuery {
    pub only_read: bool,
    pub line: Option<Sender>,
}

/// Count of received messages in a date range (`sms/countinbox`).
#[derive(Debug, Clone)]
pub struct InboxCountQuery {
    pub start: UnixTimestamp,
    pub end: Option<UnixTimestamp>,
    pub line: Option<Sender>,
    pub only_read: bool,
}

impl InboxCountQuery {
    pub fn since(start: UnixTimestamp) -> Self {
        Self {
            start,
            end: None,
            line: None,
            only_read: false,
        }
    }
}

/// Slice of one operator's subscribers in a postal code area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperatorRange {
    pub start_index: u32,
    pub count: u32,
}

/// Send to subscribers in a postal code area (`sms/sendbypostalcode`).
#[derive(Debug, Clone)]
pub struct SendByPostalCode {
    pub postal_code: PostalCode,
    pub message: MessageText,
    /// Range over MCI (Hamrah-e Aval) subscribers.
    pub mci: OperatorRange,
    /// Range over MTN Irancell subscribers.
    pub mtn: OperatorRange,
    pub date: Option<UnixTimestamp>,
    pub sender: Option<Sender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Request logging mode for the account (`apilogs`).
pub enum ApiLogs {
    JustFaults,
    Enabled,
    Disabled,
}

impl ApiLogs {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JustFaults => "justfaults",
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value.trim() {
            "justfaults" => Self::JustFaults,
            "enabled" => Self::Enabled,
            "disabled" => Self::Disabled,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// On/off account switch (`dailyreport`, `debugmode`, `resendfailed`).
pub enum Toggle {
    Enabled,
    Disabled,
}

impl Toggle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Some(match value.trim() {
            "enabled" => Self::Enabled,
            "disabled" => Self::Disabled,
            _ => return None,
        })
    }
}

/// Account settings to change (`account/config`).
///
/// Fields left as `None` are not sent, so an all-`None` update only reads the current
/// configuration. With `debug_mode` enabled, sends are accepted but not delivered.
#[derive(Debug, Clone, Default)]
pub struct AccountConfigUpdate {
    pub api_logs: Option<ApiLogs>,
    pub daily_report: Option<Toggle>,
    pub debug_mode: Option<Toggle>,
    pub default_sender: Option<Sender>,
    pub min_credit_alarm: Option<u64>,
    pub resend_failed: Option<Toggle>,
}

/// Template-based verification message (`verify/lookup`).
#[derive(Debug, Clone)]
pub struct VerifyLookup {
    pub receptor: Receptor,
    pub token: VerifyToken,
    pub template: TemplateName,
}

impl VerifyLookup {
    pub fn new(receptor: Receptor, token: VerifyToken, template: TemplateName) -> Self {
        Self {
            receptor,
            token,
            template,
        }
    }
}
