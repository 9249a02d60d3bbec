//! Flutter-facing bindings for the person table.

pub mod api;
