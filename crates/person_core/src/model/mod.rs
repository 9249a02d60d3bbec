//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record shared by registry and adapters.
//! - Keep validation and age classification as pure functions of input
//!   values and an explicit reference date.
//!
//! # Invariants
//! - Every committed record carries a registry-minted `PersonId`.
//! - "Today" always comes from a `Clock`; the model never reads wall time.

pub mod clock;
pub mod person;
