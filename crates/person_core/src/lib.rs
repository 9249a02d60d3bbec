//! Core domain logic for the person roster.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod registry;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::clock::{Clock, FixedClock, SystemClock};
pub use model::person::{
    age_category_for, age_in_years, validate_birth_date, AgeCategory, PersonId, PersonRecord,
    PersonValidationError, ValidationErrors,
};
pub use registry::person_registry::{
    DeleteOutcome, PersonRegistry, RegistryError, RegistryResult,
};
pub use registry::seed::seed_records;
pub use view::table::{sorted_rows, PersonColumn, PersonRow, SortOrder};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
