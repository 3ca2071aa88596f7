//! Client layer: dispatches Bot API operations and maps envelopes to typed results.

use std::error::Error as StdError;
use std::future::Future;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

use crate::domain::{
    ApiBase, BotToken, ChannelName, ChatAction, File, FileId, MESSAGE_LENGTH_LIMIT, Message,
    MessageOptions, NotificationMode, ReplyMarkup, User, ValidationError, split_message_text,
};
use crate::transport::{
    Destination, EnvelopeError, FORWARD_MESSAGE_METHOD, GET_FILE_METHOD, GET_ME_METHOD,
    RESULT_FIELD, SEND_CHAT_ACTION_METHOD, SEND_MESSAGE_METHOD,
};

const DEFAULT_USER_AGENT: &str = "LibTelegram";
const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(30);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    /// POST `body` as JSON to `url`. `timeout` bounds opening the connection and each
    /// individual read of the response.
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

/// Settings fixed for every request a client makes.
#[derive(Debug, Clone)]
struct TransportOptions {
    user_agent: String,
    poll_timeout: Duration,
}

#[derive(Debug)]
struct ReqwestTransport {
    options: TransportOptions,
    // reqwest only takes connect/read timeouts per client, so one client per poll timeout.
    clients: Mutex<HashMap<Duration, reqwest::Client>>,
}

impl ReqwestTransport {
    fn new(options: TransportOptions) -> Result<Self, reqwest::Error> {
        let client = build_reqwest_client(&options.user_agent, options.poll_timeout)?;
        let clients = HashMap::from([(options.poll_timeout, client)]);
        Ok(Self {
            options,
            clients: Mutex::new(clients),
        })
    }

    fn client_for(&self, poll_timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(&poll_timeout) {
            return Ok(client.clone());
        }
        let client = build_reqwest_client(&self.options.user_agent, poll_timeout)?;
        clients.insert(poll_timeout, client.clone());
        Ok(client)
    }
}

fn build_reqwest_client(
    user_agent: &str,
    poll_timeout: Duration,
) -> Result<reqwest::Client, reqwest::Error> {
    // Redirects are never followed.
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(user_agent)
        .connect_timeout(poll_timeout)
        .read_timeout(poll_timeout)
        .build()
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Value,
        timeout: Duration,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let client = self.client_for(timeout)?;
            // Request URLs embed the bot token; keep it out of error messages.
            let response = client
                .post(url)
                .json(body)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(reqwest::Error::without_url)?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Why a Bot API call produced no value.
///
/// The plain operations ([`TelegramClient::send_message`], [`TelegramClient::get_me`], ...)
/// log this and return `None`/`false`; the `try_*` variants return it.
pub enum TelegramError {
    /// The request could not be sent or the response could not be read (DNS, TLS,
    /// timeouts, connection resets).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with an empty body.
    #[error("empty response body (HTTP {status})")]
    EmptyBody { status: u16 },

    /// The response body is not JSON.
    #[error("invalid JSON response: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The envelope's `ok` field is not `true`.
    #[error("API error: {description:?} (error_code {error_code:?})")]
    Api {
        error_code: Option<i64>,
        description: Option<String>,
    },

    /// The envelope is ok but `result` does not have the expected shape.
    #[error("could not decode result: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// The request tree could not be built.
    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<EnvelopeError> for TelegramError {
    fn from(value: EnvelopeError) -> Self {
        match value {
            EnvelopeError::NotOk {
                error_code,
                description,
            } => Self::Api {
                error_code,
                description,
            },
            other => Self::Decode(Box::new(other)),
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TelegramClient`].
///
/// Use this when you need to customize the API server, poll timeout, or user-agent.
pub struct TelegramClientBuilder {
    token: BotToken,
    api_base: Option<String>,
    poll_timeout: Duration,
    user_agent: String,
}

impl TelegramClientBuilder {
    /// Create a builder with the public API server, a 30 second poll timeout and the
    /// `LibTelegram` user-agent.
    pub fn new(token: BotToken) -> Self {
        Self {
            token,
            api_base: None,
            poll_timeout: DEFAULT_POLL_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the Bot API server (for example a self-hosted `telegram-bot-api`).
    ///
    /// The value is validated in [`TelegramClientBuilder::build`].
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Timeout applied both to opening the connection and to reading the response.
    pub fn poll_timeout(mut self, poll_timeout: Duration) -> Self {
        self.poll_timeout = poll_timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`TelegramClient`].
    pub fn build(self) -> Result<TelegramClient, TelegramError> {
        let api_base = match self.api_base {
            Some(raw) => ApiBase::new(raw)?,
            None => ApiBase::default(),
        };
        let transport = ReqwestTransport::new(TransportOptions {
            user_agent: self.user_agent,
            poll_timeout: self.poll_timeout,
        })
        .map_err(|err| TelegramError::Transport(Box::new(err)))?;

        Ok(TelegramClient {
            endpoint: api_base.endpoint(&self.token),
            token: self.token,
            api_base,
            poll_timeout: self.poll_timeout,
            http: Arc::new(transport),
        })
    }
}

#[derive(Clone)]
/// Telegram Bot API client.
///
/// Every operation is one POST of a JSON request tree to `<api base>/bot<token>/<method>`
/// followed by decoding of the `{"ok": .., "result": ..}` envelope. Failures of any kind
/// (transport, empty or non-JSON body, `ok != true`, unexpected `result` shape) are logged
/// and surface as `None` (or `false` for [`TelegramClient::send_chat_action`]). Use the
/// `try_*` methods to see the reason.
///
/// Nothing is retried.
pub struct TelegramClient {
    token: BotToken,
    api_base: ApiBase,
    endpoint: String,
    poll_timeout: Duration,
    http: Arc<dyn HttpTransport>,
}

impl TelegramClient {
    /// Create a client with default settings.
    ///
    /// For more customization, use [`TelegramClient::builder`].
    pub fn new(token: BotToken) -> Result<Self, TelegramError> {
        TelegramClientBuilder::new(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: BotToken) -> TelegramClientBuilder {
        TelegramClientBuilder::new(token)
    }

    /// Timeout used by every operation except [`TelegramClient::send_json_with_timeout`].
    pub fn poll_timeout(&self) -> Duration {
        self.poll_timeout
    }

    /// POST `body` to `method` and return the parsed response, or `Value::Null` on failure.
    pub async fn send_json(&self, method: &str, body: &Value) -> Value {
        self.send_json_with_timeout(method, body, self.poll_timeout)
            .await
    }

    /// Like [`TelegramClient::send_json`] with a per-call poll timeout.
    pub async fn send_json_with_timeout(
        &self,
        method: &str,
        body: &Value,
        poll_timeout: Duration,
    ) -> Value {
        match self
            .try_send_json_with_timeout(method, body, poll_timeout)
            .await
        {
            Ok(value) => value,
            Err(err) => {
                warn!(method, error = %err, "request failed");
                Value::Null
            }
        }
    }

    /// POST `body` to `method` and parse the response body as JSON.
    ///
    /// No shape validation happens here; a non-ok envelope is still `Ok`.
    pub async fn try_send_json(&self, method: &str, body: &Value) -> Result<Value, TelegramError> {
        self.try_send_json_with_timeout(method, body, self.poll_timeout)
            .await
    }

    /// Like [`TelegramClient::try_send_json`] with a per-call poll timeout, applied to
    /// opening the connection and to each read of the response.
    #[instrument(skip(self, body))]
    pub async fn try_send_json_with_timeout(
        &self,
        method: &str,
        body: &Value,
        poll_timeout: Duration,
    ) -> Result<Value, TelegramError> {
        debug!(request = %body, "sending request");
        let url = format!("{}{}", self.endpoint, method);

        let response = self
            .http
            .post_json(&url, body, poll_timeout)
            .await
            .map_err(TelegramError::Transport)?;
        debug!(status = response.status, "received response");

        if response.body.trim().is_empty() {
            return Err(TelegramError::EmptyBody {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(TelegramError::InvalidJson)
    }

    /// POST `body` to `method` and decode the envelope's `result` into `T`.
    ///
    /// Returns `None` on any failure; the reason is logged.
    pub async fn send_json_and_parse<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &Value,
    ) -> Option<T> {
        match self.try_send_json_and_parse(method, body).await {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    method,
                    expected = std::any::type_name::<T>(),
                    error = %err,
                    "request produced no value"
                );
                None
            }
        }
    }

    /// Like [`TelegramClient::send_json_and_parse`], returning the reason on failure.
    ///
    /// Errors:
    /// - [`TelegramError::Transport`], [`TelegramError::EmptyBody`] and
    ///   [`TelegramError::InvalidJson`] from the round trip,
    /// - [`TelegramError::Api`] when the envelope's `ok` is not `true`,
    /// - [`TelegramError::Decode`] when `result` is missing or has the wrong shape.
    pub async fn try_send_json_and_parse<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &Value,
    ) -> Result<T, TelegramError> {
        let envelope = self.try_send_json(method, body).await?;
        Ok(crate::transport::decode_envelope::<T>(envelope, RESULT_FIELD)?)
    }

    /// Fetch the bot's own identity (`getMe`).
    pub async fn get_me(&self) -> Option<User> {
        self.send_json_and_parse(GET_ME_METHOD, &Value::Object(Map::new()))
            .await
    }

    /// Send `text` to the chat with id `chat_id` (`sendMessage`).
    ///
    /// Empty text sends nothing and returns `None`. Text longer than
    /// [`MESSAGE_LENGTH_LIMIT`] UTF-16 units goes out as consecutive messages, one request
    /// after the other, each with the same options and reply markup; only the message
    /// created by the last request is returned.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        options: &MessageOptions,
        reply_markup: Option<&ReplyMarkup>,
    ) -> Option<Message> {
        self.dispatch_message(Destination::Chat(chat_id), text, options, reply_markup)
            .await
    }

    /// Send `text` to a public channel by name. Splitting works as in
    /// [`TelegramClient::send_message`].
    pub async fn send_message_to_channel(
        &self,
        channel: &ChannelName,
        text: &str,
        options: &MessageOptions,
    ) -> Option<Message> {
        self.dispatch_message(Destination::Channel(channel), text, options, None)
            .await
    }

    async fn dispatch_message(
        &self,
        destination: Destination<'_>,
        text: &str,
        options: &MessageOptions,
        reply_markup: Option<&ReplyMarkup>,
    ) -> Option<Message> {
        let chunks = split_message_text(text, MESSAGE_LENGTH_LIMIT);
        let Some((last, leading)) = chunks.split_last() else {
            debug!("not sending empty message");
            return None;
        };
        if !leading.is_empty() {
            debug!(chunks = chunks.len(), "splitting oversized message");
        }

        // Chunks must arrive in order, so each one waits for the previous response.
        for chunk in leading {
            let _ = self
                .send_message_chunk(destination, chunk, options, reply_markup)
                .await;
        }
        self.send_message_chunk(destination, last, options, reply_markup)
            .await
    }

    async fn send_message_chunk(
        &self,
        destination: Destination<'_>,
        text: &str,
        options: &MessageOptions,
        reply_markup: Option<&ReplyMarkup>,
    ) -> Option<Message> {
        let tree =
            match crate::transport::encode_send_message(destination, text, options, reply_markup)
            {
                Ok(tree) => tree,
                Err(err) => {
                    warn!(error = %TelegramError::Encode(err), "sendMessage not sent");
                    return None;
                }
            };
        self.send_json_and_parse(SEND_MESSAGE_METHOD, &Value::Object(tree))
            .await
    }

    /// Forward message `message_id` from `from_chat_id` to `chat_id` (`forwardMessage`).
    pub async fn forward_message(
        &self,
        chat_id: i64,
        from_chat_id: i64,
        message_id: i64,
        notification: NotificationMode,
    ) -> Option<Message> {
        let tree = crate::transport::encode_forward_message(
            chat_id,
            from_chat_id,
            message_id,
            notification,
        );
        self.send_json_and_parse(FORWARD_MESSAGE_METHOD, &Value::Object(tree))
            .await
    }

    /// Show `action` in the chat (`sendChatAction`). Returns whether the API accepted it.
    pub async fn send_chat_action(&self, chat_id: i64, action: ChatAction) -> bool {
        let tree = crate::transport::encode_chat_action(chat_id, action);
        self.send_json_and_parse::<bool>(SEND_CHAT_ACTION_METHOD, &Value::Object(tree))
            .await
            .unwrap_or(false)
    }

    /// Like [`TelegramClient::send_chat_action`], returning the reason on failure.
    pub async fn try_send_chat_action(
        &self,
        chat_id: i64,
        action: ChatAction,
    ) -> Result<bool, TelegramError> {
        let tree = crate::transport::encode_chat_action(chat_id, action);
        self.try_send_json_and_parse(SEND_CHAT_ACTION_METHOD, &Value::Object(tree))
            .await
    }

    /// Fetch download metadata for a stored file (`getFile`).
    pub async fn get_file(&self, file_id: &FileId) -> Option<File> {
        let tree = crate::transport::encode_get_file(file_id);
        self.send_json_and_parse(GET_FILE_METHOD, &Value::Object(tree))
            .await
    }

    /// Download URL for `file`, if `getFile` returned a `file_path` for it.
    ///
    /// The URL contains the bot token.
    pub fn file_download_url(&self, file: &File) -> Option<String> {
        let path = file.file_path.as_deref()?;
        Some(format!("{}{}", self.api_base.file_endpoint(&self.token), path))
    }
}
