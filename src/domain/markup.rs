use serde::Serialize;
use serde::ser::SerializeStruct;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
}

impl InlineKeyboardButton {
    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            callback_data: None,
        }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: Some(data.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// Buttons attached below the message itself.
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
/// Custom keyboard replacing the recipient's text input.
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub resize_keyboard: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub one_time_keyboard: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub selective: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Removes a previously shown custom keyboard.
pub struct ReplyKeyboardRemove {
    pub selective: bool,
}

impl Serialize for ReplyKeyboardRemove {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let len = if self.selective { 2 } else { 1 };
        let mut state = serializer.serialize_struct("ReplyKeyboardRemove", len)?;
        state.serialize_field("remove_keyboard", &true)?;
        if self.selective {
            state.serialize_field("selective", &true)?;
        }
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Asks the client to open a reply interface to this message.
pub struct ForceReply {
    pub selective: bool,
}

impl Serialize for ForceReply {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let len = if self.selective { 2 } else { 1 };
        let mut state = serializer.serialize_struct("ForceReply", len)?;
        state.serialize_field("force_reply", &true)?;
        if self.selective {
            state.serialize_field("selective", &true)?;
        }
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// Reply markup accepted by `sendMessage` for numeric chat destinations.
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    RemoveKeyboard(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl ReplyMarkup {
    /// Request field name used by the Bot API (`reply_markup`).
    pub const FIELD: &'static str = "reply_markup";

    /// Merge this markup into a request tree. A `reply_markup` already present is kept.
    pub fn append_to(&self, tree: &mut Map<String, Value>) -> Result<(), serde_json::Error> {
        if tree.contains_key(Self::FIELD) {
            return Ok(());
        }
        tree.insert(Self::FIELD.to_owned(), serde_json::to_value(self)?);
        Ok(())
    }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(value: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(value)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(value: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(value)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(value: ReplyKeyboardRemove) -> Self {
        Self::RemoveKeyboard(value)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(value: ForceReply) -> Self {
        Self::ForceReply(value)
    }
}
