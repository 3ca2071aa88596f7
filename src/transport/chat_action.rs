use serde_json::{Map, Value};

use crate::domain::ChatAction;
use crate::transport::CHAT_ID_FIELD;

pub const SEND_CHAT_ACTION_METHOD: &str = "sendChatAction";

/// The action is always sent; there is no default suppression for it.
pub fn encode_chat_action(chat_id: i64, action: ChatAction) -> Map<String, Value> {
    let mut tree = Map::new();
    tree.insert(CHAT_ID_FIELD.to_owned(), Value::from(chat_id));
    tree.insert("action".to_owned(), Value::from(action.as_str()));
    tree
}
