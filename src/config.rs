//! Environment-driven configuration.

use serde::Deserialize;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "K_API_KEY";
/// Environment variable holding the default sender line.
pub const SENDER_ENV: &str = "K_SENDER_NUM";

/// Settings needed to build a [`crate::KavenegarClient`].
///
/// Both values are optional here; the client builder reports a missing api key. Leaving the
/// sender unset makes Kavenegar fall back to the default sender configured on the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KavenegarConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
}

impl KavenegarConfig {
    /// Read [`API_KEY_ENV`] and [`SENDER_ENV`]. Blank values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            api_key: read(API_KEY_ENV),
            sender: read(SENDER_ENV),
        }
    }
}
