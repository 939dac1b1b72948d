/// Triage - an AWS Lambda that turns security-finding events into
/// incident-response next steps using a Claude model on Amazon Bedrock.
///
/// The Lambda receives an opaque finding event (e.g. a GuardDuty finding),
/// serializes it into a fixed incident-report prompt, invokes the model
/// synchronously, and returns the generated text in a
/// `{statusCode: 200, response}` envelope.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Amazon Bedrock (`InvokeModel`) for text generation
/// - Tokio for async runtime
///
/// The Bedrock client is constructed once at process start and shared across
/// invocations; each invocation is a single stateless request/response cycle
/// with no mutable state shared between invocations.
// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod handler;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda process.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
