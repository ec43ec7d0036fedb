use crate::domain::validation::ValidationError;

use phonenumber::country;

/// String newtype that is trimmed on construction and rejects empty input.
macro_rules! trimmed_string {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Form field name used by Kavenegar (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                Ok(Self(trimmed.to_owned()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

trimmed_string!(
    /// Kavenegar API key, sent as the first path segment of every request URL.
    ApiKey,
    "api_key"
);

trimmed_string!(
    /// Sender line number (`sender`, or `linenumber` for inbox queries).
    ///
    /// The line must belong to your Kavenegar account.
    Sender,
    "sender"
);

impl Sender {
    /// Form field name used by inbox endpoints (`linenumber`).
    pub const LINE_FIELD: &'static str = "linenumber";
}

trimmed_string!(
    /// Caller-chosen message identifier (`localid`), used to look up status later.
    LocalId,
    "localid"
);

trimmed_string!(
    /// Iranian postal code (`postalcode`).
    PostalCode,
    "postalcode"
);

trimmed_string!(
    /// Verification token substituted into a lookup template (`token`).
    VerifyToken,
    "token"
);

trimmed_string!(
    /// Name of a verification template defined in the Kavenegar panel (`template`).
    TemplateName,
    "template"
);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message text (`message`).
///
/// Rejected when blank; otherwise whitespace is kept as given.
pub struct MessageText(String);

impl MessageText {
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Kavenegar message id (`messageid`) returned by the send endpoints.
pub struct MessageId(u64);

impl MessageId {
    pub const FIELD: &'static str = "messageid";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated recipient phone number as sent to Kavenegar (`receptor`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you want E.164
/// normalization, parse into [`PhoneNumber`] and convert it into [`Receptor`].
pub struct Receptor(String);

impl Receptor {
    /// Form field name used by Kavenegar (`receptor`).
    pub const FIELD: &'static str = "receptor";

    /// Create a validated (non-empty) receptor.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Kavenegar.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Receptor {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Region assumed by [`PhoneNumber::parse_local`] (Iran).
    pub const DEFAULT_REGION: country::Id = country::Id::IR;

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: Receptor::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Parse a number in national format (`0912...`) assuming [`PhoneNumber::DEFAULT_REGION`].
    pub fn parse_local(input: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(Some(Self::DEFAULT_REGION), input)
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds.
///
/// Used for scheduled sends (`date`) and date-range queries (`startdate`, `enddate`).
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Form field name for scheduled sends (`date`).
    pub const FIELD: &'static str = "date";

    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of records returned by `latestoutbox` (`pagesize`).
///
/// Invariant: `1..=500`.
pub struct PageSize(u16);

impl PageSize {
    /// Form field name used by Kavenegar (`pagesize`).
    pub const FIELD: &'static str = "pagesize";

    pub const MIN: u16 = 1;
    pub const MAX: u16 = 500;
    /// Page size used when the caller does not choose one.
    pub const DEFAULT: Self = Self(10);

    /// Create a validated page size.
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::PageSizeOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How the handset stores the message (`type`).
pub enum MessageType {
    /// Shown on screen and not stored.
    Flash,
    PhoneMemory,
    SimMemory,
    AppMemory,
}

impl MessageType {
    /// Form field name used by Kavenegar (`type`).
    pub const FIELD: &'static str = "type";

    /// Integer code sent on the wire.
    pub fn code(self) -> u8 {
        match self {
            Self::Flash => 0,
            Self::PhoneMemory => 1,
            Self::SimMemory => 2,
            Self::AppMemory => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Either a single value or one value per receptor.
///
/// `One` is replicated to every receptor of a bulk send; `Many` must have exactly one
/// entry per receptor.
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Number of list entries, or `None` for a single value.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            Self::One(_) => None,
            Self::Many(values) => Some(values.len()),
        }
    }

    /// Iterate over the contained values.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::One(value) => std::slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Envelope status code (`return.status`).
///
/// `200` means success. Unknown codes are preserved as-is.
pub struct ApiStatusCode(i32);

impl ApiStatusCode {
    /// The only status code Kavenegar uses for a successful call.
    pub const OK: Self = Self(200);

    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by Kavenegar.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownApiStatusCode> {
        KnownApiStatusCode::from_code(self.0)
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if this status code represents an authentication/authorization error.
    pub fn is_auth_error(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_auth_error())
    }
}

impl std::fmt::Display for ApiStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known envelope status codes.
pub enum KnownApiStatusCode {
    Ok,
    IncompleteParameters,
    AccountDisabled,
    OperationFailed,
    InvalidApiKey,
    MethodNotFound,
    WrongHttpMethod,
    RequiredParameterEmpty,
    AccessDenied,
    ServerUnavailable,
    InvalidReceptor,
    InvalidSender,
    MessageEmptyOrTooLong,
    TooManyReceptors,
    IndexOutOfRange,
    IpNotAllowed,
    InvalidDate,
    InsufficientCredit,
    ArrayLengthMismatch,
    InvalidCharacters,
    TemplateNotFound,
    PremiumAccountRequired,
    InvalidVerifyToken,
    OwnerOnly,
}

impl KnownApiStatusCode {
    /// Convert a raw envelope code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            200 => Self::Ok,
            400 => Self::IncompleteParameters,
            401 => Self::AccountDisabled,
            402 => Self::OperationFailed,
            403 => Self::InvalidApiKey,
            404 => Self::MethodNotFound,
            405 => Self::WrongHttpMethod,
            406 => Self::RequiredParameterEmpty,
            407 => Self::AccessDenied,
            409 => Self::ServerUnavailable,
            411 => Self::InvalidReceptor,
            412 => Self::InvalidSender,
            413 => Self::MessageEmptyOrTooLong,
            414 => Self::TooManyReceptors,
            415 => Self::IndexOutOfRange,
            416 => Self::IpNotAllowed,
            417 => Self::InvalidDate,
            418 => Self::InsufficientCredit,
            419 => Self::ArrayLengthMismatch,
            422 => Self::InvalidCharacters,
            424 => Self::TemplateNotFound,
            426 => Self::PremiumAccountRequired,
            431 => Self::InvalidVerifyToken,
            501 => Self::OwnerOnly,
            _ => return None,
        })
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::ServerUnavailable)
    }

    /// Whether this status indicates an invalid key or a blocked caller.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidApiKey | Self::AccountDisabled | Self::AccessDenied | Self::IpNotAllowed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Per-message delivery status (`status` inside an entry).
///
/// This value is preserved as-is even when unknown to this crate.
pub struct DeliveryStatus(i32);

impl DeliveryStatus {
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known delivery status, if one exists.
    pub fn known(self) -> Option<KnownDeliveryStatus> {
        KnownDeliveryStatus::from_code(self.0)
    }

    /// Returns `true` once the message will not change status anymore.
    pub fn is_final(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_final())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known per-message delivery statuses.
pub enum KnownDeliveryStatus {
    Queued,
    Scheduled,
    SentToOperator,
    Failed,
    Delivered,
    Undelivered,
    Canceled,
    Blocked,
    InvalidMessageId,
}

impl KnownDeliveryStatus {
    /// Convert a raw delivery status into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => Self::Queued,
            2 => Self::Scheduled,
            4 | 5 => Self::SentToOperator,
            6 => Self::Failed,
            10 => Self::Delivered,
            11 => Self::Undelivered,
            13 => Self::Canceled,
            14 => Self::Blocked,
            100 => Self::InvalidMessageId,
            _ => return None,
        })
    }

    pub fn is_final(self) -> bool {
        !matches!(self, Self::Queued | Self::Scheduled | Self::SentToOperator)
    }
}
