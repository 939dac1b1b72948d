use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::ai::client::{ModelTransport, PromptInvoker};
use crate::ai::prompt;
use crate::core::models::{HandlerResponse, serialize_finding};

/// Lambda handler for a single finding event. Serializes the event into the
/// incident-report prompt, invokes the model, and wraps the generated text
/// in the response envelope.
///
/// Any failure (endpoint error, malformed model response) propagates to the
/// runtime as a whole-invocation failure; the success path is the only path
/// that produces a status code, and it is always 200.
pub async fn function_handler<T: ModelTransport>(
    invoker: Arc<PromptInvoker<T>>,
    event: LambdaEvent<Value>,
) -> Result<HandlerResponse, Error> {
    info!("Received finding event: {}", event.payload);

    let finding_text = serialize_finding(&event.payload);
    let user = prompt::finding_user_prompt(&finding_text);

    let response = invoker
        .invoke(prompt::INCIDENT_REPORT_SYSTEM, &user)
        .await
        .map_err(|e| {
            error!("Failed to generate incident report: {}", e);
            Error::from(e)
        })?;

    Ok(HandlerResponse::ok(response))
}
