use axum::{
    Router,
    body::{Body, Bytes},
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::models::types::{GatewayRequest, GatewayResponse};
use crate::services::relay;
use crate::traits::telegram_api::TelegramApi;

/// Shared state for the local development server.
#[derive(Clone)]
struct ServerState {
    api: Arc<dyn TelegramApi>,
}

/// Builds the axum router exposing the relay on `/telegramWriter`.
pub fn build_router(api: Arc<dyn TelegramApi>) -> Router {
    Router::new()
        .route("/telegramWriter", any(telegram_writer))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024)) // 1 MB max request body
        .with_state(ServerState { api })
}

/// `/telegramWriter` — relays the raw request body as a Telegram message.
/// The body is read regardless of the declared method or content type.
async fn telegram_writer(State(state): State<ServerState>, body: Bytes) -> Response {
    let request = GatewayRequest {
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    let response = relay::relay_request(state.api.as_ref(), request).await;
    into_http(response)
}

/// Maps the shared response shape onto an HTTP response verbatim.
fn into_http(response: GatewayResponse) -> Response {
    let mut builder = Response::builder().status(response.status_code);
    for (name, value) in &response.headers {
        builder = builder.header(name, value);
    }
    match builder.body(Body::from(response.body)) {
        Ok(resp) => resp,
        Err(e) => {
            error!(error = %e, "failed to build HTTP response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Binds the local listener and serves until terminated externally.
pub async fn serve(api: Arc<dyn TelegramApi>, port: u16) -> std::io::Result<()> {
    let app = build_router(api);
    let addr = format!("127.0.0.1:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("local server listening on {}", addr);

    axum::serve(listener, app).await
}
