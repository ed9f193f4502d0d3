use async_trait::async_trait;

/// `TelegramApi` defines an interface for sending messages via the Telegram Bot API.
///
/// This trait allows different implementations, including mock implementations for testing
/// and real ones that send actual HTTP requests. The target chat is part of the
/// implementation's configuration; callers pass only the message text.
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Sends a text message to the configured Telegram chat.
    async fn send_telegram_message(&self, text: String) -> Result<(), String>;
}
