//! Person registry: the table's backing collection.
//!
//! # Responsibility
//! - Provide add / delete-by-indices / restore / list over an ordered list.
//! - Mint sequential ids starting at `FIRST_PERSON_ID`.
//!
//! # Invariants
//! - `add` validates against the registry clock before any mutation.
//! - Multi-index deletes remove from the highest index down.
//! - An out-of-range index rejects the whole delete call.

use crate::model::clock::{Clock, SystemClock};
use crate::model::person::{PersonId, PersonRecord, ValidationErrors};
use crate::registry::seed::seed_records;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_PERSON_ID: u32 = 1;
const NOTHING_SELECTED_MESSAGE: &str = "Please select a row to delete.";

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry error for rejected mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Candidate failed one or more field rules.
    Validation(ValidationErrors),
    /// Delete index does not address a current row.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "row index {index} is out of range for {len} row(s)")
            }
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}

impl From<ValidationErrors> for RegistryError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

/// Result of a delete request that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No rows were selected; nothing changed.
    NothingSelected,
    /// Removed records, in ascending original index order.
    Deleted(Vec<PersonRecord>),
}

impl DeleteOutcome {
    /// Informational message for the user, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NothingSelected => Some(NOTHING_SELECTED_MESSAGE),
            Self::Deleted(_) => None,
        }
    }

    pub fn removed_count(&self) -> usize {
        match self {
            Self::NothingSelected => 0,
            Self::Deleted(removed) => removed.len(),
        }
    }
}

/// Ordered in-memory collection of committed people.
///
/// Mutators take `&mut self`; share across threads only behind a lock so
/// the id counter and the list change together.
#[derive(Debug, Clone)]
pub struct PersonRegistry<C: Clock = SystemClock> {
    items: Vec<PersonRecord>,
    next_id: u32,
    clock: C,
}

impl PersonRegistry<SystemClock> {
    /// Creates an empty registry validating against the local date.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a registry preloaded with the seed set.
    pub fn seeded() -> Self {
        Self::seeded_with_clock(SystemClock)
    }
}

impl Default for PersonRegistry<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PersonRegistry<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_PERSON_ID,
            clock,
        }
    }

    pub fn seeded_with_clock(clock: C) -> Self {
        let mut registry = Self::with_clock(clock);
        registry.restore();
        registry
    }

    /// Reference date used for validation.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Builds a fresh seed set with newly minted ids.
    ///
    /// Advances the id counter but leaves the current list untouched.
    pub fn seed(&mut self) -> Vec<PersonRecord> {
        seed_records()
            .into_iter()
            .map(|mut person| {
                person.assign_id(self.mint_id());
                person
            })
            .collect()
    }

    /// Validates `candidate` and appends it with a new id.
    ///
    /// # Contract
    /// - Any id already on `candidate` is replaced.
    /// - On error, neither the list nor the counter changes.
    ///
    /// # Errors
    /// - `RegistryError::Validation` with every failed rule.
    pub fn add(&mut self, mut candidate: PersonRecord) -> RegistryResult<PersonId> {
        if let Err(errors) = candidate.validate(self.clock.today()) {
            info!(
                "event=person_add module=registry status=rejected error_count={}",
                errors.len()
            );
            return Err(errors.into());
        }

        let id = self.mint_id();
        candidate.assign_id(id);
        self.items.push(candidate);
        info!(
            "event=person_add module=registry status=ok person_id={} row_count={}",
            id,
            self.items.len()
        );
        Ok(id)
    }

    /// Removes the rows at `indices` (positions in [`PersonRegistry::list`]).
    ///
    /// # Contract
    /// - Empty selection is `Ok(DeleteOutcome::NothingSelected)`.
    /// - Rows are removed highest index first so positions stay valid.
    ///
    /// # Errors
    /// - `RegistryError::IndexOutOfRange` when any index is past the end; no
    ///   row is removed in that case.
    pub fn delete_by_indices(
        &mut self,
        indices: &BTreeSet<usize>,
    ) -> RegistryResult<DeleteOutcome> {
        if indices.is_empty() {
            debug!("event=person_delete module=registry status=skipped reason=nothing_selected");
            return Ok(DeleteOutcome::NothingSelected);
        }

        let len = self.items.len();
        if let Some(&index) = indices.last().filter(|&&index| index >= len) {
            warn!(
                "event=person_delete module=registry status=error error_code=index_out_of_range index={} row_count={}",
                index, len
            );
            return Err(RegistryError::IndexOutOfRange { index, len });
        }

        let mut removed = indices
            .iter()
            .rev()
            .map(|&index| self.items.remove(index))
            .collect::<Vec<_>>();
        removed.reverse();

        info!(
            "event=person_delete module=registry status=ok removed={} row_count={}",
            removed.len(),
            self.items.len()
        );
        Ok(DeleteOutcome::Deleted(removed))
    }

    /// Replaces the whole list with a fresh seed set.
    pub fn restore(&mut self) {
        let seed = self.seed();
        self.items.clear();
        self.items.extend(seed);
        info!(
            "event=registry_restore module=registry status=ok row_count={} next_id={}",
            self.items.len(),
            self.next_id
        );
    }

    /// Current rows in display order.
    pub fn list(&self) -> &[PersonRecord] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&PersonRecord> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn mint_id(&mut self) -> PersonId {
        let id = PersonId(self.next_id);
        self.next_id += 1;
        id
    }
}
