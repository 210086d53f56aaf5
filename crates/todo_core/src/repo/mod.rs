//! Repository layer contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the list and item data-access contracts.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every write runs in one `IMMEDIATE` transaction and either fully applies
//!   or leaves the store unchanged.
//! - Item operations resolve the parent list first and fail with
//!   `ListNotFound` when it is absent.

pub mod error;
pub mod item_repo;
pub mod list_repo;
mod schema_guard;
