use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::models::types::GatewayRequest;
use crate::services::relay;
use crate::traits::telegram_api::TelegramApi;

/// Direct invocation front end: the orchestrator invokes the process once per
/// request, delivering the `GatewayRequest` event as JSON on stdin and reading
/// the `GatewayResponse` as JSON from stdout.
pub async fn run_once(api: &dyn TelegramApi) -> Result<()> {
    run_once_with(api, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Handles exactly one invocation over the given transport: reads the event
/// JSON from `reader` until EOF, writes the newline-terminated response JSON
/// to `writer`.
pub async fn run_once_with<R, W>(api: &dyn TelegramApi, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .await
        .context("failed to read invocation event")?;

    let request: GatewayRequest =
        serde_json::from_str(&raw).context("invalid invocation event")?;

    let response = relay::relay_request(api, request).await;

    let encoded = serde_json::to_string(&response).context("failed to encode response")?;
    writer
        .write_all(encoded.as_bytes())
        .await
        .context("failed to write response")?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(())
}
