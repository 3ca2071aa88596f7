use std::io;

use telegram_sender::{BotToken, ChatAction, MessageOptions, TelegramClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()))
        .init();

    let token = std::env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TELEGRAM_BOT_TOKEN environment variable is required",
        )
    })?;
    let chat_id: i64 = std::env::var("TELEGRAM_CHAT_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "TELEGRAM_CHAT_ID environment variable is required",
            )
        })?
        .parse()?;
    let text = std::env::var("TELEGRAM_MESSAGE")
        .unwrap_or_else(|_| "Hello from the telegram-sender demo.".to_owned());

    let client = TelegramClient::new(BotToken::new(token)?)?;
    client.send_chat_action(chat_id, ChatAction::Typing).await;

    match client
        .send_message(chat_id, &text, &MessageOptions::default(), None)
        .await
    {
        Some(message) => println!("sent message {} at {}", message.message_id, message.date),
        None => println!("message was not sent; see the log for details"),
    }

    Ok(())
}
