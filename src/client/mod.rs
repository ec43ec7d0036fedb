//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod url;

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::value::RawValue;
use tracing::{debug, warn};

use self::url::ApiEndpoint;
pub use self::url::ResourceBase;
use crate::config::KavenegarConfig;
use crate::domain::{
    AccountConfig, AccountConfigUpdate, AccountInfo, ApiKey, ApiStatusCode, BulkSend,
    InboxCount, InboxCountQuery, InboxEntry, InboxQuery, LocalIds, LocalStatusEntry,
    MessageEntry, MessageIds, OutboxCount, OutboxQuery, PostalCode, PostalCodeCount,
    RecentOutboxQuery, SendByPostalCode, SendMessage, Sender, StatusEntry, ValidationError,
    VerifyLookup,
};
use crate::transport::{self, Params, TransportError};

const DEFAULT_ENDPOINT: &str = "https://api.kavenegar.com/v1/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            // `form` sets `Content-Type: application/x-www-form-urlencoded`.
            let response = self
                .client
                .post(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .header("charset", "utf-8")
                .form(&params)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`KavenegarClient`].
///
/// A call fails in one of three ways once the request is valid:
/// - the HTTP exchange itself failed ([`KavenegarError::Transport`]),
/// - the server answered with a non-200 status and no readable envelope
///   ([`KavenegarError::HttpStatus`]),
/// - the envelope carries a `return.status` other than 200 ([`KavenegarError::Api`]).
pub enum KavenegarError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-200 HTTP status without a parsable JSON envelope.
    #[error("[{status}] api call has failed")]
    HttpStatus { status: u16, body: Option<String> },

    /// Kavenegar reported a failure in `return.status` / `return.message`.
    #[error("[{status}] {message}")]
    Api {
        status: ApiStatusCode,
        message: String,
    },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a usable base URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl KavenegarError {
    fn parse(err: TransportError) -> Self {
        Self::Parse(Box::new(err))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`KavenegarClient`].
///
/// Use this when you need a default sender, a different endpoint, a timeout or a user-agent.
pub struct KavenegarClientBuilder {
    api_key: ApiKey,
    sender: Option<Sender>,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    verify_certificates: bool,
}

impl KavenegarClientBuilder {
    /// Create a builder with the default endpoint and no default sender.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            sender: None,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            verify_certificates: false,
        }
    }

    /// Start from a [`KavenegarConfig`]; fails when no api key is configured.
    pub fn from_config(config: &KavenegarConfig) -> Result<Self, KavenegarError> {
        let api_key = ApiKey::new(config.api_key.clone().unwrap_or_default())?;
        let builder = Self::new(api_key);
        Ok(match config.sender.as_deref() {
            Some(sender) => builder.sender(Sender::new(sender)?),
            None => builder,
        })
    }

    /// Sender used by every call that does not pass its own.
    pub fn sender(mut self, sender: Sender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Override the API root (`https://api.kavenegar.com/v1/`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Turn TLS certificate verification on or off. Off by default.
    pub fn verify_certificates(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }

    /// Build a [`KavenegarClient`].
    pub fn build(self) -> Result<KavenegarClient, KavenegarError> {
        let endpoint = parse_endpoint(&self.endpoint)?;

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(!self.verify_certificates);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| KavenegarError::Transport(Box::new(err)))?;

        Ok(KavenegarClient {
            api_key: self.api_key,
            sender: self.sender,
            endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<ApiEndpoint, KavenegarError> {
    ApiEndpoint::parse(raw).ok_or_else(|| KavenegarError::InvalidEndpoint(raw.to_owned()))
}

#[derive(Clone)]
/// High-level Kavenegar client.
///
/// Every method is one POST to `{endpoint}/{api_key}/{base}/{method}.json/` and returns the
/// decoded `entries` of the response envelope. Calls that take a sender (or inbox line) use
/// the client-wide default when the request leaves it unset.
pub struct KavenegarClient {
    api_key: ApiKey,
    sender: Option<Sender>,
    endpoint: ApiEndpoint,
    http: Arc<dyn HttpTransport>,
}

impl KavenegarClient {
    /// Create a client using the default endpoint and no default sender.
    ///
    /// For more customization, use [`KavenegarClient::builder`].
    pub fn new(api_key: ApiKey) -> Result<Self, KavenegarError> {
        KavenegarClientBuilder::new(api_key).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> KavenegarClientBuilder {
        KavenegarClientBuilder::new(api_key)
    }

    /// Build a client from environment-style configuration.
    pub fn from_config(config: &KavenegarConfig) -> Result<Self, KavenegarError> {
        KavenegarClientBuilder::from_config(config)?.build()
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn default_sender(&self) -> Option<&Sender> {
        self.sender.as_ref()
    }

    /// Send one text to one or more receptors (`sms/send`).
    pub async fn send(&self, request: SendMessage) -> Result<Vec<MessageEntry>, KavenegarError> {
        let params = transport::encode_send_params(&request, self.default_sender());
        self.run(
            ResourceBase::Sms,
            "send",
            params,
            transport::decode_message_entries,
        )
        .await
    }

    /// Send per-receptor texts in one request (`sms/sendarray`).
    ///
    /// Errors:
    /// - [`KavenegarError::Validation`] when a list option does not have one entry per receptor.
    pub async fn bulk_send(&self, request: BulkSend) -> Result<Vec<MessageEntry>, KavenegarError> {
        let params = transport::encode_bulk_send_params(&request, self.default_sender())?;
        self.run(
            ResourceBase::Sms,
            "sendarray",
            params,
            transport::decode_message_entries,
        )
        .await
    }

    /// Delivery status of sent messages (`sms/status`).
    pub async fn message_status(
        &self,
        ids: MessageIds,
    ) -> Result<Vec<StatusEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "status",
            transport::encode_message_ids_params(&ids),
            transport::decode_status_entries,
        )
        .await
    }

    /// Delivery status looked up by the local ids given at send time
    /// (`sms/statuslocalmessageid`).
    pub async fn message_status_by_local_id(
        &self,
        ids: LocalIds,
    ) -> Result<Vec<LocalStatusEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "statuslocalmessageid",
            transport::encode_local_ids_params(&ids),
            transport::decode_local_status_entries,
        )
        .await
    }

    /// Full details of sent messages (`sms/select`).
    pub async fn message_detail(
        &self,
        ids: MessageIds,
    ) -> Result<Vec<MessageEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "select",
            transport::encode_message_ids_params(&ids),
            transport::decode_message_entries,
        )
        .await
    }

    /// Messages sent in a date range, at most 3000 (`sms/selectoutbox`).
    pub async fn outbox(&self, query: OutboxQuery) -> Result<Vec<MessageEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "selectoutbox",
            transport::encode_outbox_params(&query, self.default_sender()),
            transport::decode_message_entries,
        )
        .await
    }

    /// Most recently sent messages (`sms/latestoutbox`).
    pub async fn recent_outbox(
        &self,
        query: RecentOutboxQuery,
    ) -> Result<Vec<MessageEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "latestoutbox",
            transport::encode_recent_outbox_params(&query, self.default_sender()),
            transport::decode_message_entries,
        )
        .await
    }

    /// Number of messages sent in a date range (`sms/countoutbox`).
    pub async fn outbox_count(&self, query: OutboxQuery) -> Result<OutboxCount, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "countoutbox",
            transport::encode_outbox_params(&query, self.default_sender()),
            transport::decode_outbox_count,
        )
        .await
    }

    /// Cancel scheduled messages that have not been sent yet (`sms/cancel`).
    pub async fn cancel(&self, ids: MessageIds) -> Result<Vec<StatusEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "cancel",
            transport::encode_message_ids_params(&ids),
            transport::decode_status_entries,
        )
        .await
    }

    /// Received messages, 100 per call (`sms/receive`).
    pub async fn inbox(&self, query: InboxQuery) -> Result<Vec<InboxEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "receive",
            transport::encode_inbox_params(&query, self.default_sender()),
            transport::decode_inbox_entries,
        )
        .await
    }

    /// Number of received messages in a date range (`sms/countinbox`).
    pub async fn inbox_count(&self, query: InboxCountQuery) -> Result<InboxCount, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "countinbox",
            transport::encode_inbox_count_params(&query, self.default_sender()),
            transport::decode_inbox_count,
        )
        .await
    }

    /// Subscriber counts per operator in a postal code area (`sms/countpostalcode`).
    pub async fn phone_count_by_postal_code(
        &self,
        postal_code: PostalCode,
    ) -> Result<Vec<PostalCodeCount>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "countpostalcode",
            transport::encode_count_postal_code_params(&postal_code),
            transport::decode_postal_code_counts,
        )
        .await
    }

    /// Send to subscribers in a postal code area (`sms/sendbypostalcode`).
    pub async fn send_by_postal_code(
        &self,
        request: SendByPostalCode,
    ) -> Result<Vec<MessageEntry>, KavenegarError> {
        self.run(
            ResourceBase::Sms,
            "sendbypostalcode",
            transport::encode_send_by_postal_code_params(&request, self.default_sender()),
            transport::decode_message_entries,
        )
        .await
    }

    /// Remaining credit and account type (`account/info`).
    pub async fn account_info(&self) -> Result<AccountInfo, KavenegarError> {
        self.run(
            ResourceBase::Account,
            "info",
            Params::new(),
            transport::decode_account_info,
        )
        .await
    }

    /// Update account settings and return the resulting configuration (`account/config`).
    ///
    /// Pass [`AccountConfigUpdate::default`] to read the configuration without changing it.
    pub async fn account_config(
        &self,
        update: AccountConfigUpdate,
    ) -> Result<AccountConfig, KavenegarError> {
        self.run(
            ResourceBase::Account,
            "config",
            transport::encode_account_config_params(&update),
            transport::decode_account_config,
        )
        .await
    }

    /// Send a verification code through a panel template (`verify/lookup`).
    pub async fn send_verification_code(
        &self,
        request: VerifyLookup,
    ) -> Result<Vec<MessageEntry>, KavenegarError> {
        self.run(
            ResourceBase::Verify,
            "lookup",
            transport::encode_verify_lookup_params(&request),
            transport::decode_message_entries,
        )
        .await
    }

    async fn run<T>(
        &self,
        base: ResourceBase,
        method: &'static str,
        params: Params,
        decode: fn(&RawValue) -> Result<T, TransportError>,
    ) -> Result<T, KavenegarError> {
        let url = url::method_url(&self.endpoint, &self.api_key, base, method);

        debug!(base = base.as_str(), method, "sending kavenegar request");
        let response = self
            .http
            .post_form(url.as_str(), params.prune())
            .await
            .map_err(KavenegarError::Transport)?;
        debug!(
            base = base.as_str(),
            method,
            status = response.status,
            "received kavenegar response"
        );

        let envelope = match transport::decode_envelope(&response.body) {
            Ok(envelope) => envelope,
            Err(_) if response.status != 200 => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                return Err(KavenegarError::HttpStatus {
                    status: response.status,
                    body,
                });
            }
            Err(err) => return Err(KavenegarError::parse(err)),
        };

        if !envelope.status.is_ok() {
            let message = envelope.message.unwrap_or_default();
            warn!(
                base = base.as_str(),
                method,
                status = envelope.status.as_i32(),
                message = message.as_str(),
                "kavenegar rejected request"
            );
            return Err(KavenegarError::Api {
                status: envelope.status,
                message,
            });
        }

        decode(envelope.entries()).map_err(KavenegarError::parse)
    }
}
