use resume_forge::{
    config::{Config, InvocationMode, LlmConfig, LogsConfig, ServerConfig, default_preferred_models},
    llm::ModelDescriptor,
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8501,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: "test-api-key".to_string(),
            preferred_models: default_preferred_models(),
            timeout_secs: 5,
            invocation: InvocationMode::Sequential,
        },
    }
}

/// Catalog entry that can answer prompts
pub fn capable_model(name: &str) -> ModelDescriptor {
    ModelDescriptor::new(name, &["generateContent", "countTokens"])
}

/// Catalog entry that only embeds
pub fn embedding_model(name: &str) -> ModelDescriptor {
    ModelDescriptor::new(name, &["embedContent"])
}

/// Catalog as the live service tends to return it
pub fn sample_catalog() -> Vec<ModelDescriptor> {
    vec![
        embedding_model("models/embedding-001"),
        capable_model("models/gemini-pro"),
        capable_model("models/gemini-1.5-pro"),
        capable_model("models/gemini-1.5-flash"),
        embedding_model("models/text-embedding-004"),
    ]
}

pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  logs:
    level: "debug"
llm:
  base_url: "http://localhost:1234/v1beta"
  api_key: "from-file"
  preferred_models:
    - "models/gemini-2.0-flash"
  timeout_secs: 30
  invocation: concurrent
"#;
