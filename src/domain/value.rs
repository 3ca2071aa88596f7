use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Telegram bot authentication token, as issued by BotFather.
///
/// Invariant: non-empty after trimming. The token is embedded in every request URL,
/// so its `Debug` output is redacted.
pub struct BotToken(String);

impl BotToken {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "token";

    /// Create a validated [`BotToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Public channel name used as a message destination (for example `@my_channel`).
///
/// Invariant: non-empty after trimming. Sent as-is in the `chat_id` field.
pub struct ChannelName(String);

impl ChannelName {
    /// Field name used by the Bot API (`chat_id`).
    pub const FIELD: &'static str = "chat_id";

    /// Create a validated [`ChannelName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated channel name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Identifier of a file stored on Telegram servers.
///
/// Invariant: non-empty after trimming.
pub struct FileId(String);

impl FileId {
    /// Field name used by the Bot API (`file_id`).
    pub const FIELD: &'static str = "file_id";

    /// Create a validated [`FileId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated file id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base URL of the Bot API server, without the `/bot<token>/` suffix.
///
/// Invariant: parses as an absolute `http` or `https` URL. Stored without a trailing slash.
pub struct ApiBase(String);

impl ApiBase {
    /// The public Bot API server.
    #[cfg(not(feature = "plain-http"))]
    pub const DEFAULT: &'static str = "https://api.telegram.org";
    /// The public Bot API server.
    #[cfg(feature = "plain-http")]
    pub const DEFAULT: &'static str = "http://api.telegram.org";

    /// Create a validated [`ApiBase`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidUrl {
            input: value.clone(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::UnsupportedScheme {
                    scheme: other.to_owned(),
                });
            }
        }
        if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
            return Err(ValidationError::InvalidUrl { input: value });
        }
        Ok(Self(trimmed.trim_end_matches('/').to_owned()))
    }

    /// Borrow the base URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Method endpoint prefix for `token`: `<base>/bot<token>/`.
    pub fn endpoint(&self, token: &BotToken) -> String {
        format!("{}/bot{}/", self.0, token.as_str())
    }

    /// File download prefix for `token`: `<base>/file/bot<token>/`.
    pub fn file_endpoint(&self, token: &BotToken) -> String {
        format!("{}/file/bot{}/", self.0, token.as_str())
    }
}

impl Default for ApiBase {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}
