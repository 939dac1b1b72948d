use std::env;

/// Model used when `BEDROCK_MODEL_ID` is not set.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_id: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let model_id = match env::var("BEDROCK_MODEL_ID") {
            Ok(value) if value.trim().is_empty() => {
                return Err("BEDROCK_MODEL_ID: set but empty".to_string());
            }
            Ok(value) => value,
            Err(_) => DEFAULT_MODEL_ID.to_string(),
        };

        Ok(Self { model_id })
    }
}
