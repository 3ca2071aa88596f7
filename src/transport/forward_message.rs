use serde_json::{Map, Value};

use crate::domain::NotificationMode;
use crate::transport::CHAT_ID_FIELD;
use crate::transport::options::push_notification;

pub const FORWARD_MESSAGE_METHOD: &str = "forwardMessage";

pub fn encode_forward_message(
    chat_id: i64,
    from_chat_id: i64,
    message_id: i64,
    notification: NotificationMode,
) -> Map<String, Value> {
    let mut tree = Map::new();
    tree.insert(CHAT_ID_FIELD.to_owned(), Value::from(chat_id));
    tree.insert("from_chat_id".to_owned(), Value::from(from_chat_id));
    tree.insert("message_id".to_owned(), Value::from(message_id));
    push_notification(&mut tree, notification);
    tree
}
