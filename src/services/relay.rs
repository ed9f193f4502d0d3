use std::collections::HashMap;
use tracing::{error, info};

use crate::models::types::{GatewayRequest, GatewayResponse};
use crate::traits::telegram_api::TelegramApi;

/// Fixed response body returned when the message was relayed.
pub const SUCCESS_BODY: &str = r#"{"message": "Message sent successfully!"}"#;

/// Fixed response body returned when the relay failed. No error detail is
/// leaked to the caller.
pub const FAILURE_BODY: &str = r#"{"error": "Failed to send message"}"#;

/// Response headers shared by both front ends: JSON content type plus
/// permissive cross-origin headers.
fn response_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        (
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        ),
    ])
}

/// Relays the inbound request body as a Telegram message and maps the outcome
/// to one of the two fixed responses: 201 on success, 400 on relay failure.
pub async fn relay_request(api: &dyn TelegramApi, request: GatewayRequest) -> GatewayResponse {
    match api.send_telegram_message(request.body).await {
        Ok(()) => {
            info!("message relayed");
            GatewayResponse {
                status_code: 201,
                headers: response_headers(),
                body: SUCCESS_BODY.to_string(),
            }
        }
        Err(e) => {
            error!(error = %e, "relay failed");
            GatewayResponse {
                status_code: 400,
                headers: response_headers(),
                body: FAILURE_BODY.to_string(),
            }
        }
    }
}
