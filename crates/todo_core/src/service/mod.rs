//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operations exposed over HTTP.
//! - Turn absent records into `NotFound` errors so callers get one error path.

pub mod item_service;
pub mod list_service;
