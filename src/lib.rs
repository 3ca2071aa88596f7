//! Typed Rust client for sending messages through the Telegram Bot API.
//!
//! The crate is split into a domain layer of strong types and options, a transport
//! layer for the Bot API wire format (request trees and `{"ok", "result"}` envelopes),
//! and a small client layer dispatching requests.
//!
//! Operations never return errors: any failure is logged through `tracing` and yields
//! `None` (or `false`). The `try_*` methods expose the underlying [`TelegramError`].
//!
//! ```rust,no_run
//! use telegram_sender::{BotToken, MessageOptions, ParseMode, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), telegram_sender::TelegramError> {
//!     let client = TelegramClient::new(BotToken::new("123456:ABC")?)?;
//!     let options = MessageOptions::default().parse_mode(ParseMode::Html);
//!     if let Some(message) = client.send_message(42, "<b>hello</b>", &options, None).await {
//!         println!("sent message {}", message.message_id);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{TelegramClient, TelegramClientBuilder, TelegramError};
pub use domain::{
    ApiBase, BotToken, ChannelName, Chat, ChatAction, File, FileId, ForceReply,
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, MESSAGE_LENGTH_LIMIT, Message,
    MessageOptions, NotificationMode, ParseMode, REPLY_TO_MESSAGE_ID_NONE, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup, User, ValidationError, WebPreviewMode, split_message_text,
};
