//! Eligibility filter: who may be considered for a project.

use std::collections::HashSet;

use forge_core::entities::User;

/// Users whose declared skills share at least one tag with `required_tag_ids`.
///
/// An empty requirement list means the project has no requirement, so every
/// candidate is eligible. Input order is preserved. Runs a linear scan over
/// the whole pool: O(pool size × skills per user).
#[must_use]
pub fn filter_eligible(required_tag_ids: &[String], candidates: &[User]) -> Vec<User> {
    if required_tag_ids.is_empty() {
        return candidates.to_vec();
    }
    let required: HashSet<&str> = required_tag_ids.iter().map(String::as_str).collect();
    candidates
        .iter()
        .filter(|user| {
            user.skill_tags
                .iter()
                .any(|skill| required.contains(skill.tag_id.as_str()))
        })
        .cloned()
        .collect()
}
