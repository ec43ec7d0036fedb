use url::Url;

use crate::domain::ApiKey;

/// Resource group in the request path (`/{api_key}/{base}/{method}.json/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceBase {
    Sms,
    Account,
    Verify,
}

impl ResourceBase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Account => "account",
            Self::Verify => "verify",
        }
    }
}

/// API root that accepts path segments (rules out `mailto:`, `data:` and the like).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoint(Url);

impl ApiEndpoint {
    /// Returns `None` when `raw` is not a URL or cannot be a base.
    pub fn parse(raw: &str) -> Option<Self> {
        Url::parse(raw)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Append `{api_key}/{base}/{method}.json/` to `endpoint`.
///
/// Every component is percent-encoded as one path segment, so reserved characters in the key
/// cannot alter the path.
pub fn method_url(
    endpoint: &ApiEndpoint,
    api_key: &ApiKey,
    base: ResourceBase,
    method: &str,
) -> Url {
    let mut url = endpoint.0.clone();
    // Always `Ok`: `ApiEndpoint` only holds base URLs.
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .push(api_key.as_str())
            .push(base.as_str())
            .push(&format!("{method}.json"))
            .push("");
    }
    url
}
