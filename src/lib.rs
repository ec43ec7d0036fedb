//! Typed Rust client for the Kavenegar SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for parameter
//! maps and wire-format quirks, and a small client layer issuing one POST per operation.
//!
//! ```rust,no_run
//! use kavenegar::{ApiKey, KavenegarClient, MessageText, Receptor, SendMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), kavenegar::KavenegarError> {
//!     let client = KavenegarClient::new(ApiKey::new("...")?)?;
//!     let request = SendMessage::to(Receptor::new("09123456789")?, MessageText::new("hello")?);
//!     let entries = client.send(request).await?;
//!     println!("{entries:?}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{KavenegarClient, KavenegarClientBuilder, KavenegarError, ResourceBase};
pub use config::KavenegarConfig;
pub use domain::{
    AccountConfig, AccountConfigUpdate, AccountInfo, ApiKey, ApiLogs, ApiStatusCode, BulkSend,
    BulkSendOptions, DeliveryStatus, InboxCount, InboxCountQuery, InboxEntry, InboxQuery,
    KnownApiStatusCode, KnownDeliveryStatus, LocalId, LocalIds, LocalStatusEntry, MessageEntry,
    MessageId, MessageIds, MessageText, MessageType, OneOrMany, OperatorRange, OutboxCount,
    OutboxQuery, PageSize, PhoneNumber, PostalCode, PostalCodeCount, Receptor, RecentOutboxQuery,
    SendByPostalCode, SendMessage, SendOptions, Sender, StatusEntry, TemplateName, Toggle,
    UnixTimestamp, ValidationError, VerifyLookup, VerifyToken,
};
