//! Tag resolver: tag IDs to display names.

use std::collections::BTreeMap;

use forge_core::ports::TeamStore;

use crate::error::EngineError;

/// Look up the name of each tag. Unknown IDs are left out of the map.
///
/// # Errors
///
/// Returns [`EngineError::UpstreamUnavailable`] if the store cannot be read.
pub async fn resolve_names<S: TeamStore + ?Sized>(
    store: &S,
    tag_ids: &[String],
) -> Result<BTreeMap<String, String>, EngineError> {
    let mut names = BTreeMap::new();
    for tag_id in tag_ids {
        if names.contains_key(tag_id) {
            continue;
        }
        match store
            .get_tag(tag_id)
            .await
            .map_err(|e| EngineError::upstream("resolve tags", &e))?
        {
            Some(tag) => {
                names.insert(tag.id, tag.name);
            }
            None => tracing::debug!(%tag_id, "tag not found; omitted from analysis"),
        }
    }
    Ok(names)
}
