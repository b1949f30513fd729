//! Client layer: orchestrates validation, the HTTP POST and response parsing.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    CountryCode, Message, Originator, Parameters, Password, SendDefaults, SendResponse, Username,
    ValidationError, form_encode,
};
use crate::transport::{ResponseError, decode_send_response, encode_send_form};

/// Cellsynt's production endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://se-1.cellsynt.net/sms.php";

/// Content type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and full body of an HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The HTTP POST capability the client depends on.
///
/// Implementations send `body` with content type [`FORM_CONTENT_TYPE`] to `url`
/// and return the full response body whatever the status code. They must be
/// safe to share between concurrent sends.
pub trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Account credentials sent with every request.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    fn push_form_params(&self, params: &mut Parameters) {
        params.insert(Username::FIELD, form_encode(self.username.as_str()));
        params.insert(Password::FIELD, form_encode(self.password.as_str()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`CellsyntClient`].
///
/// None of them is retried by the client.
pub enum CellsyntError {
    /// A value was rejected before any request was made.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, body read).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The gateway answered `Error: <message>`; `message` is kept verbatim.
    #[error("{message}")]
    Gateway { message: String },

    /// The gateway answered with a body that is neither `OK: ` nor `Error: `.
    #[error("response error: {body}")]
    Protocol { body: String },
}

impl From<ResponseError> for CellsyntError {
    fn from(value: ResponseError) -> Self {
        match value {
            ResponseError::Gateway { message } => Self::Gateway { message },
            ResponseError::Unrecognized { body } => Self::Protocol { body },
        }
    }
}

#[derive(Clone)]
/// Builder for [`CellsyntClient`].
///
/// Use this to customize the endpoint, timeout, user-agent, send defaults, or
/// to inject your own [`HttpTransport`].
pub struct CellsyntClientBuilder {
    credentials: Credentials,
    defaults: SendDefaults,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl CellsyntClientBuilder {
    /// Create a builder with the default endpoint and [`SendDefaults::default`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            defaults: SendDefaults::default(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the gateway URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace all send defaults at once.
    pub fn defaults(mut self, defaults: SendDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default originator for messages without their own.
    pub fn originator(mut self, originator: Originator) -> Self {
        self.defaults.originator = Some(originator);
        self
    }

    /// Country code completing local numbers of recipients without one.
    pub fn default_country_code(mut self, country_code: CountryCode) -> Self {
        self.defaults.country_code = Some(country_code);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is injected.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send through `transport` instead of a reqwest client.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build a [`CellsyntClient`].
    pub fn build(self) -> Result<CellsyntClient, CellsyntError> {
        if url::Url::parse(&self.endpoint).is_err() {
            return Err(ValidationError::InvalidEndpoint {
                input: self.endpoint,
            }
            .into());
        }

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| CellsyntError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(CellsyntClient {
            credentials: self.credentials,
            defaults: self.defaults,
            endpoint: self.endpoint,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level Cellsynt client.
///
/// Holds credentials and [`SendDefaults`]; every field a message leaves unset is
/// taken from the defaults. The client carries no per-call state and can be
/// cloned and shared between tasks.
pub struct CellsyntClient {
    credentials: Credentials,
    defaults: SendDefaults,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl CellsyntClient {
    /// Create a client using the default endpoint, sending as `originator`
    /// (alphanumeric, UTF-8, concatenation enabled).
    ///
    /// For more customization, use [`CellsyntClient::builder`].
    pub fn new(credentials: Credentials, originator: Originator) -> Self {
        Self {
            credentials,
            defaults: SendDefaults {
                originator: Some(originator),
                ..Default::default()
            },
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> CellsyntClientBuilder {
        CellsyntClientBuilder::new(credentials)
    }

    pub fn defaults(&self) -> &SendDefaults {
        &self.defaults
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Credentials and defaults as sent on the wire, before message overrides.
    pub fn parameters(&self) -> Parameters {
        let mut params = self.defaults.parameters();
        self.credentials.push_form_params(&mut params);
        params
    }

    /// Form body that [`CellsyntClient::send_message`] would post for `message`.
    pub fn encode_message(&self, message: &Message) -> String {
        encode_send_form(
            &self.parameters(),
            message,
            self.defaults.country_code.as_ref(),
        )
    }

    /// Send `message` with a single POST.
    ///
    /// Errors:
    /// - [`CellsyntError::Validation`] if the message has no destination; nothing is sent,
    /// - [`CellsyntError::Transport`] if the request or body read fails,
    /// - [`CellsyntError::Gateway`] when the gateway answers `Error: ...`,
    /// - [`CellsyntError::Protocol`] for any other unrecognized answer.
    ///
    /// The HTTP status code is not inspected; the gateway reports failures in the body.
    pub async fn send_message(&self, message: Message) -> Result<SendResponse, CellsyntError> {
        let message_type = message.message_type();
        let destination = message
            .recipient()
            .destination_with(self.defaults.country_code.as_ref());
        if destination.is_empty() {
            return Err(ValidationError::MissingDestination.into());
        }

        let body = self.encode_message(&message);
        let response = self
            .http
            .post_form(&self.endpoint, body)
            .await
            .map_err(CellsyntError::Transport)?;

        match decode_send_response(&response.body) {
            Ok(parsed) => {
                tracing::debug!(
                    message_type = %message_type,
                    destination = %destination,
                    http_status = response.status,
                    tracking_ids = ?parsed.tracking_ids,
                    "sent message"
                );
                Ok(parsed)
            }
            Err(err) => {
                let err = CellsyntError::from(err);
                tracing::debug!(
                    message_type = %message_type,
                    destination = %destination,
                    http_status = response.status,
                    error = %err,
                    "error sending message"
                );
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for CellsyntClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellsyntClient")
            .field("credentials", &self.credentials)
            .field("defaults", &self.defaults)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
