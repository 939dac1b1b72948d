use serde::Serialize;
use serde_json::Value;

/// Envelope returned to the invoking runtime on the success path.
///
/// Serializes as `{"statusCode": 200, "response": "..."}`. No other status
/// code is ever produced by this code; failures propagate as unhandled
/// invocation errors rather than structured error responses.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub response: String,
}

impl HandlerResponse {
    #[must_use]
    pub fn ok(response: String) -> Self {
        Self {
            status_code: 200,
            response,
        }
    }
}

/// Best-effort textual rendering of an arbitrary finding event.
///
/// The event's internal shape is opaque to this Lambda; it is rendered as
/// pretty-printed JSON for inclusion in the prompt, with no schema assumed
/// or validated.
#[must_use]
pub fn serialize_finding(event: &Value) -> String {
    serde_json::to_string_pretty(event).unwrap_or_else(|_| event.to_string())
}
