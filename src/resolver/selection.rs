use super::ModelHandle;
use crate::{Error, Result, llm::ModelDescriptor};
use tracing::debug;

/// Picks the first preference that is a capable catalog entry, otherwise the
/// first capable entry in catalog order.
pub fn select_model(catalog: &[ModelDescriptor], preferences: &[String]) -> Result<ModelHandle> {
    let available: Vec<&str> = catalog
        .iter()
        .filter(|m| m.supports_generation())
        .map(|m| m.name.as_str())
        .collect();

    debug!(
        "{} of {} catalog entries support content generation",
        available.len(),
        catalog.len()
    );

    if let Some(preferred) = preferences
        .iter()
        .find(|p| available.contains(&p.as_str()))
    {
        return Ok(ModelHandle::new(preferred.as_str()));
    }

    available
        .first()
        .map(|name| ModelHandle::new(*name))
        .ok_or_else(|| Error::no_model("no model in the catalog supports content generation"))
}
