use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named skill or category reference. Owned externally; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub category_id: Option<String>,
}
