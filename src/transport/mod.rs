//! Transport layer: Bot API wire format (request trees and response envelopes).

mod chat_action;
mod envelope;
mod forward_message;
mod get_file;
mod options;
mod send_message;

pub use chat_action::{SEND_CHAT_ACTION_METHOD, encode_chat_action};
pub use envelope::{EnvelopeError, RESULT_FIELD, decode_envelope};
pub use forward_message::{FORWARD_MESSAGE_METHOD, encode_forward_message};
pub use get_file::{GET_FILE_METHOD, encode_get_file};
pub use send_message::{Destination, SEND_MESSAGE_METHOD, encode_send_message};

pub const GET_ME_METHOD: &str = "getMe";

/// Destination field shared by every chat-addressed request.
pub const CHAT_ID_FIELD: &str = "chat_id";
