/// Maximum `sendMessage` text length, in UTF-16 code units.
pub const MESSAGE_LENGTH_LIMIT: usize = 4096;

/// Legacy sentinel for "no reply target", accepted by [`MessageOptions::reply_to`].
pub const REPLY_TO_MESSAGE_ID_NONE: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Text formatting mode (`parse_mode`).
pub enum ParseMode {
    /// Plain text, no entity parsing.
    None,
    Markdown,
    Html,
}

impl ParseMode {
    /// Value that is never sent on the wire.
    pub const DEFAULT: Self = Self::None;
}

impl Default for ParseMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Link preview behavior (`disable_web_page_preview`).
pub enum WebPreviewMode {
    Disable,
    Enable,
}

impl WebPreviewMode {
    /// Value that is never sent on the wire. The Bot API shows previews unless told otherwise.
    pub const DEFAULT: Self = Self::Enable;
}

impl Default for WebPreviewMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Whether recipients get a notification sound (`disable_notification`).
pub enum NotificationMode {
    Disable,
    Enable,
}

impl NotificationMode {
    /// Value that is never sent on the wire. The Bot API notifies unless told otherwise.
    pub const DEFAULT: Self = Self::Enable;
}

impl Default for NotificationMode {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Status shown to the chat while the bot prepares a reply (`sendChatAction`).
pub enum ChatAction {
    #[default]
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordAudio,
    UploadAudio,
    UploadDocument,
    FindLocation,
}

impl ChatAction {
    /// Wire value of the `action` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::UploadPhoto => "upload_photo",
            Self::RecordVideo => "record_video",
            Self::UploadVideo => "upload_video",
            Self::RecordAudio => "record_audio",
            Self::UploadAudio => "upload_audio",
            Self::UploadDocument => "upload_document",
            Self::FindLocation => "find_location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Optional `sendMessage` parameters shared by chat and channel destinations.
///
/// Every option left at its default is omitted from the request. Build values with
/// `MessageOptions::default()` and the setters below.
pub struct MessageOptions {
    pub(crate) reply_to_message_id: Option<i64>,
    pub(crate) parse_mode: ParseMode,
    pub(crate) web_preview: WebPreviewMode,
    pub(crate) notification: NotificationMode,
}

impl MessageOptions {
    /// Reply to `message_id`. [`REPLY_TO_MESSAGE_ID_NONE`] clears the reply target.
    pub fn reply_to(mut self, message_id: i64) -> Self {
        self.reply_to_message_id = (message_id != REPLY_TO_MESSAGE_ID_NONE).then_some(message_id);
        self
    }

    /// Set the formatting mode. [`ParseMode::DEFAULT`] is not sent.
    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = parse_mode;
        self
    }

    /// Set link preview behavior. [`WebPreviewMode::DEFAULT`] is not sent.
    pub fn web_preview(mut self, web_preview: WebPreviewMode) -> Self {
        self.web_preview = web_preview;
        self
    }

    /// Set notification behavior. [`NotificationMode::DEFAULT`] is not sent.
    pub fn notification(mut self, notification: NotificationMode) -> Self {
        self.notification = notification;
        self
    }

    /// Message to reply to, if any. Never the `-1` sentinel.
    pub fn reply_to_message_id(&self) -> Option<i64> {
        self.reply_to_message_id
    }
}

/// Split `text` into consecutive chunks of at most `limit` UTF-16 code units, the unit
/// the Bot API measures message length in.
///
/// Chunks partition the input left to right and never split a character. Empty input
/// yields no chunks; a `limit` of zero is treated as one. A single character wider than
/// `limit` becomes a chunk of its own.
pub fn split_message_text(text: &str, limit: usize) -> Vec<&str> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let mut units = 0;
        let mut cut = rest.len();
        for (idx, ch) in rest.char_indices() {
            let width = ch.len_utf16();
            if idx > 0 && units + width > limit {
                cut = idx;
                break;
            }
            units += width;
        }
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
