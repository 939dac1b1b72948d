// Lambda bootstrap entry point for the triage function

use std::sync::Arc;

use lambda_runtime::{Error, run, service_fn};
use tracing::error;

use triage::ai::{BedrockTransport, PromptInvoker};
use triage::core::config::AppConfig;
use triage::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    triage::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Built once at process start and reused across invocations
    let sdk_config = aws_config::load_from_env().await;
    let invoker = Arc::new(PromptInvoker::new(
        BedrockTransport::new(&sdk_config),
        config.model_id,
    ));

    run(service_fn(move |event| {
        let invoker = Arc::clone(&invoker);
        async move { function_handler(invoker, event).await }
    }))
    .await
}
