use serde_json::{Map, Value};

use crate::domain::{ChannelName, MessageOptions, ReplyMarkup};
use crate::transport::CHAT_ID_FIELD;
use crate::transport::options::{push_notification, push_parse_mode, push_web_preview};

pub const SEND_MESSAGE_METHOD: &str = "sendMessage";

/// Where a `sendMessage` request goes.
#[derive(Debug, Clone, Copy)]
pub enum Destination<'a> {
    Chat(i64),
    Channel(&'a ChannelName),
}

impl Destination<'_> {
    fn to_value(self) -> Value {
        match self {
            Self::Chat(chat_id) => Value::from(chat_id),
            Self::Channel(channel) => Value::from(channel.as_str()),
        }
    }
}

/// Build the request tree for one `sendMessage` call carrying `text` as-is.
pub fn encode_send_message(
    destination: Destination<'_>,
    text: &str,
    options: &MessageOptions,
    reply_markup: Option<&ReplyMarkup>,
) -> Result<Map<String, Value>, serde_json::Error> {
    let mut tree = Map::new();
    tree.insert(CHAT_ID_FIELD.to_owned(), destination.to_value());
    tree.insert("text".to_owned(), Value::from(text));

    push_parse_mode(&mut tree, options.parse_mode);
    push_web_preview(&mut tree, options.web_preview);
    push_notification(&mut tree, options.notification);

    if let Some(reply_to) = options.reply_to_message_id() {
        tree.insert("reply_to_message_id".to_owned(), Value::from(reply_to));
    }
    if let Some(markup) = reply_markup {
        markup.append_to(&mut tree)?;
    }

    Ok(tree)
}
