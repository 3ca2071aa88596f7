use std::io;

use telegram_sender::{BotToken, TelegramClient};

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

    let client = TelegramClient::new(BotToken::new(token)?)?;
    let me = client
        .get_me()
        .await
        .ok_or_else(|| io::Error::other("getMe returned no user; see the log for details"))?;
    println!(
        "id: {}, username: {:?}, first_name: {}",
        me.id, me.username, me.first_name
    );

    Ok(())
}
