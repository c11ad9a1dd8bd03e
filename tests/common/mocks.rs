use async_trait::async_trait;
use resume_forge::{
    Error, Result,
    llm::{LlmClient, ModelDescriptor},
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One recorded `generate_content` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPrompt {
    pub model: String,
    pub prompt: String,
}

/// Mock LLM client for testing
#[derive(Debug)]
pub struct MockLlmClient {
    pub catalog: Vec<ModelDescriptor>,
    pub catalog_error: Option<String>,
    pub responses: Arc<Mutex<VecDeque<std::result::Result<String, String>>>>,
    pub prompts: Arc<Mutex<Vec<RecordedPrompt>>>,
    pub list_calls: Arc<Mutex<usize>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            catalog_error: None,
            responses: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            list_calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_catalog(mut self, catalog: Vec<ModelDescriptor>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_catalog_error(mut self, error: &str) -> Self {
        self.catalog_error = Some(error.to_string());
        self
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn with_failure(self, error: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(error.to_string()));
        self
    }

    pub fn get_prompts(&self) -> Vec<RecordedPrompt> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        *self.list_calls.lock().unwrap()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn list_models(&self) -> Result<Vec<ModelDescriptor>> {
        *self.list_calls.lock().unwrap() += 1;

        if let Some(ref error) = self.catalog_error {
            return Err(Error::Api {
                status: 403,
                message: error.clone(),
            });
        }

        Ok(self.catalog.clone())
    }

    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(RecordedPrompt {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(error)) => Err(Error::Api {
                status: 500,
                message: error,
            }),
            None => Err(Error::generation("No more mock responses available")),
        }
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
