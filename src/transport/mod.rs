//! Transport layer: parameter maps and wire-format details (serialization/deserialization).

mod account;
mod envelope;
mod inbox;
mod number;
mod outbox;
mod params;
mod postal_code;
mod send;
mod status;
mod verify;

pub use account::{decode_account_config, decode_account_info, encode_account_config_params};
pub use envelope::decode_envelope;
pub use inbox::{
    decode_inbox_count, decode_inbox_entries, encode_inbox_count_params, encode_inbox_params,
};
pub use outbox::{decode_outbox_count, encode_outbox_params, encode_recent_outbox_params};
pub use params::Params;
pub use postal_code::{
    decode_postal_code_counts, encode_count_postal_code_params, encode_send_by_postal_code_params,
};
pub use send::{decode_message_entries, encode_bulk_send_params, encode_send_params};
pub use status::{
    decode_local_status_entries, decode_status_entries, encode_local_ids_params,
    encode_message_ids_params,
};
pub use verify::encode_verify_lookup_params;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no entries")]
    MissingEntries,

    #[error("response field `{field}` has an unexpected value")]
    InvalidField { field: &'static str },
}
