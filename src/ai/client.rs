//! Bedrock model client module
//!
//! Encapsulates the single request/response cycle against the hosted model:
//! build the Anthropic messages body, invoke the model, pull the generated
//! text out of the response.

use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::TriageError;

/// Wire-level version tag required by Bedrock for Anthropic models.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Fixed upper bound on generated tokens per invocation.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Transport for the Bedrock `InvokeModel` operation.
///
/// Abstracted behind a trait so tests can substitute a mock endpoint; the
/// production implementation wraps the AWS SDK client.
#[async_trait]
pub trait ModelTransport: Send + Sync {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TriageError>;
}

/// Production transport wrapping the AWS Bedrock runtime client.
#[derive(Debug, Clone)]
pub struct BedrockTransport {
    client: aws_sdk_bedrockruntime::Client,
}

impl BedrockTransport {
    #[must_use]
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
        }
    }
}

#[async_trait]
impl ModelTransport for BedrockTransport {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, TriageError> {
        let blob = aws_sdk_bedrockruntime::primitives::Blob::new(body);

        let response = self
            .client
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(blob)
            .send()
            .await?;

        Ok(response.body.into_inner())
    }
}

/// Client issuing one prompt invocation per call.
///
/// Stateless beyond the injected transport and model identifier; constructed
/// once at process start and shared across invocations.
pub struct PromptInvoker<T: ModelTransport> {
    pub(crate) transport: T,
    model_id: String,
}

impl<T: ModelTransport> PromptInvoker<T> {
    #[must_use]
    pub fn new(transport: T, model_id: String) -> Self {
        Self {
            transport,
            model_id,
        }
    }

    /// Builds the single-turn request body in the exact shape Bedrock expects
    /// for Anthropic models.
    #[must_use]
    pub fn build_request_body(system: &str, user: &str) -> Value {
        json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": MAX_OUTPUT_TOKENS,
            "system": system,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": user
                        }
                    ]
                }
            ]
        })
    }

    /// Sends one synchronous (non-streamed) request and returns the first
    /// generated content block's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint call fails (auth, quota, network,
    /// malformed request) or the response lacks `content[0].text`. There is
    /// no retry and no fallback text; the failure propagates to the caller.
    pub async fn invoke(&self, system: &str, user: &str) -> Result<String, TriageError> {
        let body = serde_json::to_vec(&Self::build_request_body(system, user))?;

        let response_bytes = self.transport.invoke_model(&self.model_id, body).await?;

        let response_json: Value = serde_json::from_slice(&response_bytes).map_err(|e| {
            TriageError::ModelResponseError(format!("invalid JSON from model endpoint: {e}"))
        })?;

        info!("Response body from model endpoint: {}", response_json);

        response_json
            .get("content")
            .and_then(|content| content.as_array())
            .and_then(|blocks| blocks.first())
            .and_then(|block| block.get("text"))
            .and_then(|text| text.as_str())
            .map(std::string::ToString::to_string)
            .ok_or_else(|| {
                TriageError::ModelResponseError(
                    "missing content[0].text in model response".to_string(),
                )
            })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use mock::MockTransport;

    const MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

    #[tokio::test]
    async fn test_invoke_sends_exact_request_shape() {
        let transport = MockTransport::with_response(json!({
            "content": [{"type": "text", "text": "ok"}]
        }));
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        invoker
            .invoke("system instruction", "user message")
            .await
            .unwrap();

        let bodies = invoker.transport.recorded_bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            json!({
                "anthropic_version": "bedrock-2023-05-31",
                "max_tokens": 2048,
                "system": "system instruction",
                "messages": [
                    {
                        "role": "user",
                        "content": [
                            {"type": "text", "text": "user message"}
                        ]
                    }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_invoke_targets_configured_model() {
        let transport = MockTransport::with_response(json!({
            "content": [{"text": "ok"}]
        }));
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        invoker.invoke("s", "u").await.unwrap();

        let requests = invoker.transport.requests.lock().unwrap();
        assert_eq!(requests[0].0, MODEL_ID);
    }

    #[tokio::test]
    async fn test_invoke_returns_first_content_block_text() {
        let transport = MockTransport::with_response(json!({
            "content": [{"text": "ABC"}, {"text": "ignored"}]
        }));
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        let text = invoker.invoke("s", "u").await.unwrap();
        assert_eq!(text, "ABC");
    }

    #[tokio::test]
    async fn test_invoke_errors_when_content_missing() {
        let transport = MockTransport::with_response(json!({"id": "msg_123"}));
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        let err = invoker.invoke("s", "u").await.unwrap_err();
        match err {
            TriageError::ModelResponseError(msg) => {
                assert!(msg.contains("content[0].text"));
            }
            other => panic!("expected ModelResponseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_errors_when_content_empty() {
        let transport = MockTransport::with_response(json!({"content": []}));
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        assert!(invoker.invoke("s", "u").await.is_err());
    }

    #[tokio::test]
    async fn test_invoke_errors_on_non_json_response() {
        let transport = MockTransport::with_raw_response(b"not json".to_vec());
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        let err = invoker.invoke("s", "u").await.unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn test_invoke_propagates_endpoint_error() {
        let transport = MockTransport::with_error("Access denied");
        let invoker = PromptInvoker::new(transport, MODEL_ID.to_string());

        let err = invoker.invoke("s", "u").await.unwrap_err();
        match err {
            TriageError::BedrockError(msg) => assert_eq!(msg, "Access denied"),
            other => panic!("expected BedrockError, got {other:?}"),
        }
    }
}
