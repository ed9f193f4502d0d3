use async_trait::async_trait;
use bon::Builder;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::services::settings::Settings;
use crate::traits::telegram_api::TelegramApi;

/// A real implementation of the `TelegramApi` trait that sends HTTP requests to the Telegram Bot API.
#[derive(Builder)]
pub struct RealTelegramApi {
    pub client: Client,
    pub base_url: String,
    pub token: String,
    pub chat_id: String,
}

impl RealTelegramApi {
    /// Creates a new `RealTelegramApi` from loaded settings, with an explicit
    /// finite timeout on the outbound call.
    pub fn from_settings(settings: &Settings) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
            token: settings.bot_token.clone(),
            chat_id: settings.chat_id.clone(),
        })
    }
}

#[async_trait]
impl TelegramApi for RealTelegramApi {
    /// Sends a message to the configured Telegram chat using the Bot API.
    ///
    /// The remote HTTP status is deliberately not inspected: a completed round
    /// trip counts as delivered, and only transport-level failures (DNS,
    /// connect, timeout) or serialization failures are errors.
    async fn send_telegram_message(&self, text: String) -> Result<(), String> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let message = SendMessageRequest {
            chat_id: self.chat_id.clone(),
            text,
        };

        self.client
            .post(&url)
            .json(&message)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "HTTP error sending Telegram message");
                format!("HTTP error: {}", e)
            })?;

        Ok(())
    }
}

/// Outbound message envelope, serialized exactly as the Bot API expects.
#[derive(Debug, Serialize, Deserialize)]
struct SendMessageRequest {
    chat_id: String,
    text: String,
}
