use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";
const PAGE_SIZE: &str = "1000";

/// The two call shapes of the remote generation service.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Full catalog, in the order the service returns it.
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>>;

    /// Sends one free-text prompt to `model` and returns the reply text.
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn model_url(&self, model: &str) -> String {
        if model.starts_with("models/") || model.starts_with("tunedModels/") {
            format!("{}/{}:generateContent", self.base_url, model)
        } else {
            format!("{}/models/{}:generateContent", self.base_url, model)
        }
    }
}

/// Turns a non-2xx reply into `Error::Api`, keeping the service's own message.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Gemini API returned {}", status);

    Err(api_error(status, &body))
}

fn api_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|e| match e.error.status {
            Some(code) => format!("{} ({})", e.error.message, code),
            None => e.error.message,
        })
        .unwrap_or_else(|_| {
            if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            }
        });

    Error::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("pageSize", PAGE_SIZE.to_string())];
            if let Some(ref token) = page_token {
                query.push(("pageToken", token.clone()));
            }

            let response = self
                .client
                .get(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .query(&query)
                .send()
                .await?;

            let page: ListModelsResponse = check_status(response).await?.json().await?;
            debug!("Fetched catalog page with {} models", page.models.len());
            models.extend(page.models);

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(models)
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String> {
        debug!(
            "Requesting content from {} (prompt length {})",
            model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.model_url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await?;

        let reply: GenerateContentResponse = check_status(response).await?.json().await?;
        let text = reply.text().map_err(Error::generation)?;

        debug!("Received {} characters from {}", text.len(), model);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_client() -> GeminiClient {
        let config = LlmConfig {
            base_url: "https://example.test/v1beta/".to_string(),
            api_key: "test-api-key".to_string(),
            ..LlmConfig::default()
        };
        GeminiClient::new(&config).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = create_test_client();
        assert_eq!(client.base_url, "https://example.test/v1beta");
    }

    #[test]
    fn test_model_url_keeps_resource_prefix() {
        let client = create_test_client();
        assert_eq!(
            client.model_url("models/gemini-pro"),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
        assert_eq!(
            client.model_url("gemini-pro"),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_api_error_prefers_service_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        let err = api_error(StatusCode::TOO_MANY_REQUESTS, body);

        assert_eq!(
            err.to_string(),
            "API error (status 429): Quota exceeded (RESOURCE_EXHAUSTED)"
        );
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "API error (status 502): upstream down");
    }
}
