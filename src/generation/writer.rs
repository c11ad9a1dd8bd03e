use super::prompts;
use crate::{
    Error, Result, config::InvocationMode, form::ValidatedInput, llm::LlmClient,
    resolver::ModelHandle,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Text produced for one submission. Only exists when both calls succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    pub bullets: String,
    pub bio: String,
}

/// Issues the generation calls for a submission against one fixed model.
///
/// Built once at startup after model resolution and shared read-only.
pub struct ResumeWriter {
    client: Arc<dyn LlmClient>,
    model: ModelHandle,
    mode: InvocationMode,
}

impl ResumeWriter {
    pub fn new(client: Arc<dyn LlmClient>, model: ModelHandle, mode: InvocationMode) -> Self {
        Self {
            client,
            model,
            mode,
        }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn mode(&self) -> InvocationMode {
        self.mode
    }

    /// Both texts or one error. Nothing from a failed attempt is returned.
    pub async fn generate(&self, input: &ValidatedInput) -> Result<GeneratedContent> {
        let bullets_prompt = prompts::bullet_points(input.raw_experience(), input.job_title());
        let bio_prompt = prompts::portfolio_bio(input.name(), input.job_title());

        let (bullets, bio) = match self.mode {
            InvocationMode::Sequential => {
                let bullets = self.call(&bullets_prompt).await?;
                let bio = self.call(&bio_prompt).await?;
                (bullets, bio)
            }
            InvocationMode::Concurrent => {
                tokio::try_join!(self.call(&bullets_prompt), self.call(&bio_prompt))?
            }
        };

        Ok(GeneratedContent { bullets, bio })
    }

    async fn call(&self, prompt: &str) -> Result<String> {
        debug!("Sending prompt of {} characters to {}", prompt.len(), self.model);

        let text = self
            .client
            .generate_content(self.model.as_str(), prompt)
            .await
            .map_err(|e| {
                error!("Generation call to {} failed: {}", self.model, e);
                match e {
                    Error::Generation(cause) => Error::Generation(cause),
                    other => Error::generation(other.to_string()),
                }
            })?;

        if text.trim().is_empty() {
            return Err(Error::generation("model returned an empty response"));
        }

        Ok(text)
    }
}
