//! ID prefix constants.
//!
//! Store-generated IDs take the form `{prefix}-{8 hex chars}`, e.g. `tm-3fa81c0e`.

/// Prefix for team records.
pub const PREFIX_TEAM: &str = "tm";
