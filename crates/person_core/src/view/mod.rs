//! Display projections over registry rows.
//!
//! Views are snapshots: nothing here mutates a registry, and selection
//! indices always refer to `PersonRegistry::list()` order.

pub mod table;
