//! In-memory person collection and its lifecycle.
//!
//! # Responsibility
//! - Own the ordered list of committed people shown by the table.
//! - Mint person ids and enforce validation before any insert.
//!
//! # Invariants
//! - Writes must call `PersonRecord::validate()` before mutating the list.
//! - Ids come from a per-registry counter and are never reused.
//! - Every mutation either applies fully or leaves the registry untouched.

pub mod person_registry;
pub mod seed;
