//! Domain layer: strong types with validation and invariants (no I/O).

mod markup;
mod request;
mod response;
mod validation;
mod value;

pub use markup::{
    ForceReply, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};
pub use request::{
    ChatAction, MESSAGE_LENGTH_LIMIT, MessageOptions, NotificationMode, ParseMode,
    REPLY_TO_MESSAGE_ID_NONE, WebPreviewMode, split_message_text,
};
pub use response::{Chat, File, Message, User};
pub use validation::ValidationError;
pub use value::{ApiBase, BotToken, ChannelName, FileId};
