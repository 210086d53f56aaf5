//! Domain model for todo lists and their items.
//!
//! # Invariants
//! - Every item belongs to exactly one list.
//! - Identifiers are store-assigned integers; `0` means "not assigned yet".

pub mod item;
pub mod todo_list;

/// Identifier value used before the store assigns one.
pub const UNASSIGNED_ID: i64 = 0;
