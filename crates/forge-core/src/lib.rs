//! # forge-core
//!
//! Core types shared across all TeamForge crates:
//! - Entity structs for tags, users, projects and teams
//! - Collaborator ports (`TeamStore`, `TextGenerator`) consumed by the engine
//! - Cross-cutting error types raised at the port boundary
//! - ID prefix constants
//! - Response types returned by the CLI

pub mod entities;
pub mod errors;
pub mod ids;
pub mod ports;
pub mod responses;
