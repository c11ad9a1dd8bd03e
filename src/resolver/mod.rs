mod selection;

pub use selection::select_model;

use crate::{Error, Result, llm::LlmClient};
use serde::Serialize;
use std::{fmt, sync::Arc};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Name of the remote model every generation call of this process goes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModelHandle(String);

impl ModelHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fetches the catalog at most once and remembers the model it picked.
pub struct ModelResolver {
    client: Arc<dyn LlmClient>,
    preferences: Vec<String>,
    resolved: OnceCell<ModelHandle>,
}

impl ModelResolver {
    pub fn new(client: Arc<dyn LlmClient>, preferences: Vec<String>) -> Self {
        Self {
            client,
            preferences,
            resolved: OnceCell::new(),
        }
    }

    /// Returns the cached handle, resolving it on first use. A failed
    /// resolution is not cached.
    pub async fn resolve(&self) -> Result<ModelHandle> {
        self.resolved
            .get_or_try_init(|| self.fetch_and_select())
            .await
            .cloned()
    }

    async fn fetch_and_select(&self) -> Result<ModelHandle> {
        let catalog = self.client.list_models().await.map_err(|e| {
            error!("Failed to fetch model catalog: {}", e);
            Error::no_model(e.to_string())
        })?;

        let handle = select_model(&catalog, &self.preferences)?;
        info!(
            "Resolved model {} from a catalog of {} entries",
            handle,
            catalog.len()
        );

        Ok(handle)
    }
}
