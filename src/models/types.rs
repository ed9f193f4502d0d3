use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound request shape shared by both front ends.
///
/// In direct invocation mode this is the event object delivered by the
/// orchestrator; in local server mode it is built from the raw HTTP body.
/// The body is an opaque string relayed verbatim as the message text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub body: String,
}

/// Response shape returned to the orchestrator or HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_defaults_to_empty() {
        let req: GatewayRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.body, "");
    }

    #[test]
    fn response_serializes_camel_case() {
        let resp = GatewayResponse {
            status_code: 201,
            headers: HashMap::new(),
            body: "{}".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["statusCode"], 201);
        assert!(json.get("status_code").is_none());
    }
}
