mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Environment variable holding the Gemini credential. Wins over `llm.api_key`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let api_key = env::var(API_KEY_ENV).ok();

    load_from(&config_path, api_key).await
}

/// Reads the YAML file at `path` (all defaults when it does not exist) and
/// merges the credential in. A missing credential is fatal.
pub async fn load_from(path: impl AsRef<Path>, api_key: Option<String>) -> Result<Config> {
    let path = path.as_ref();

    let mut config: Config = if tokio::fs::try_exists(path).await? {
        debug!("Loading configuration from: {}", path.display());
        let config_str = tokio::fs::read_to_string(path).await?;
        serde_yaml::from_str(&config_str)?
    } else {
        debug!(
            "No configuration file at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = key;
    }

    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        return Err(Error::config(format!(
            "{API_KEY_ENV} is not set and llm.api_key is empty"
        )));
    }

    if config.llm.base_url.trim().is_empty() {
        return Err(Error::config("llm.base_url must not be empty"));
    }

    if config.llm.timeout_secs == 0 {
        return Err(Error::config("llm.timeout_secs must be greater than zero"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from(dir.path().join("absent.yaml"), Some("secret".to_string()))
            .await
            .unwrap();

        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(config.llm.preferred_models, default_preferred_models());
        assert_eq!(config.llm.invocation, InvocationMode::Sequential);
        assert_eq!(config.server.port, 8501);
    }

    #[tokio::test]
    async fn test_missing_credential_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(dir.path().join("absent.yaml"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let llm = LlmConfig {
            api_key: "super-secret-key".to_string(),
            ..LlmConfig::default()
        };

        let rendered = format!("{llm:?}");
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
