//! FFI use-case API for the person table UI.
//!
//! # Responsibility
//! - Expose form/table use-cases to Dart via FRB as plain data.
//! - Parse raw form strings (dates use `YYYY-MM-DD`) before they reach core.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call holds the table lock for its whole duration, so the id
//!   counter and the row list always change together.
//! - Row indices always refer to `table_list_rows` order.

use chrono::NaiveDate;
use log::warn;
use person_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    sorted_rows, Clock, DeleteOutcome, PersonColumn, PersonRecord, PersonRegistry, PersonRow,
    RegistryError, SortOrder,
};
use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock, PoisonError};

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";
const BIRTH_DATE_FORMAT_MESSAGE: &str = "Birth date must use YYYY-MM-DD format.";
static TABLE_REGISTRY: OnceLock<Mutex<PersonRegistry>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Result envelope for table mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableActionResponse {
    /// Whether the request was applied (an empty delete selection counts).
    pub ok: bool,
    /// Id minted by a successful add.
    pub person_id: Option<u32>,
    /// User-facing messages: every validation problem, or an info note.
    pub messages: Vec<String>,
}

impl TableActionResponse {
    fn success(person_id: Option<u32>, messages: Vec<String>) -> Self {
        Self {
            ok: true,
            person_id,
            messages,
        }
    }

    fn failure(messages: Vec<String>) -> Self {
        Self {
            ok: false,
            person_id: None,
            messages,
        }
    }
}

/// Rows plus an optional diagnostic, for sorted table reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowsResponse {
    pub rows: Vec<PersonRow>,
    /// Empty on success.
    pub message: String,
}

/// Validates form fields without touching the table.
///
/// Returns every problem in field order; empty means the form can be added.
#[flutter_rust_bridge::frb(sync)]
pub fn form_validate(
    first_name: String,
    last_name: String,
    birth_date: Option<String>,
) -> Vec<String> {
    with_table(|registry| {
        form_messages(registry, &first_name, &last_name, birth_date.as_deref())
    })
}

/// Adds a person from raw form fields.
///
/// # FFI contract
/// - On success returns the minted id; the form can be cleared.
/// - On failure returns all messages and leaves the table unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn table_add_person(
    first_name: String,
    last_name: String,
    birth_date: Option<String>,
) -> TableActionResponse {
    with_table(|registry| add_person(registry, &first_name, &last_name, birth_date.as_deref()))
}

/// Deletes the selected rows.
///
/// An empty selection returns `ok=true` with an informational message.
#[flutter_rust_bridge::frb(sync)]
pub fn table_delete_rows(indices: Vec<u32>) -> TableActionResponse {
    with_table(|registry| delete_rows(registry, &indices))
}

/// Resets the table to the seed rows.
#[flutter_rust_bridge::frb(sync)]
pub fn table_restore_rows() -> TableActionResponse {
    with_table(|registry| {
        registry.restore();
        TableActionResponse::success(None, Vec::new())
    })
}

/// Current rows in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn table_list_rows() -> Vec<PersonRow> {
    with_table(|registry| list_rows(registry))
}

/// Rows sorted by `column` (`id|first_name|last_name|birth_date`).
///
/// Sorting is a view only; delete indices still follow `table_list_rows`.
#[flutter_rust_bridge::frb(sync)]
pub fn table_sorted_rows(column: String, descending: bool) -> TableRowsResponse {
    with_table(|registry| sorted_table_rows(registry, &column, descending))
}

fn with_table<T>(f: impl FnOnce(&mut PersonRegistry) -> T) -> T {
    let table = TABLE_REGISTRY.get_or_init(|| Mutex::new(PersonRegistry::seeded()));
    // No call leaves the registry half-updated, so a poisoned lock is still usable.
    let mut registry = table.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut registry)
}

/// Builds a candidate from raw fields plus an optional date-format message.
fn build_candidate(
    first_name: &str,
    last_name: &str,
    birth_date: Option<&str>,
) -> (PersonRecord, Option<String>) {
    let (birth_date, format_error) = match birth_date.map(str::trim) {
        None | Some("") => (None, None),
        Some(raw) => match NaiveDate::parse_from_str(raw, BIRTH_DATE_FORMAT) {
            Ok(date) => (Some(date), None),
            Err(_) => (None, Some(BIRTH_DATE_FORMAT_MESSAGE.to_string())),
        },
    };
    let candidate = PersonRecord::new(first_name.trim(), last_name.trim(), birth_date);
    (candidate, format_error)
}

fn form_messages<C: Clock>(
    registry: &PersonRegistry<C>,
    first_name: &str,
    last_name: &str,
    birth_date: Option<&str>,
) -> Vec<String> {
    let (candidate, format_error) = build_candidate(first_name, last_name, birth_date);
    let mut messages = candidate
        .validate(registry.today())
        .err()
        .map(|errors| errors.messages())
        .unwrap_or_default();
    messages.extend(format_error);
    messages
}

fn add_person<C: Clock>(
    registry: &mut PersonRegistry<C>,
    first_name: &str,
    last_name: &str,
    birth_date: Option<&str>,
) -> TableActionResponse {
    let (candidate, format_error) = build_candidate(first_name, last_name, birth_date);
    if format_error.is_some() {
        return TableActionResponse::failure(form_messages(
            registry, first_name, last_name, birth_date,
        ));
    }

    match registry.add(candidate) {
        Ok(id) => TableActionResponse::success(Some(id.value()), Vec::new()),
        Err(RegistryError::Validation(errors)) => TableActionResponse::failure(errors.messages()),
        Err(other) => TableActionResponse::failure(vec![other.to_string()]),
    }
}

fn delete_rows<C: Clock>(
    registry: &mut PersonRegistry<C>,
    indices: &[u32],
) -> TableActionResponse {
    let selection = indices
        .iter()
        .map(|&index| index as usize)
        .collect::<BTreeSet<_>>();

    match registry.delete_by_indices(&selection) {
        Ok(outcome @ DeleteOutcome::NothingSelected) => TableActionResponse::success(
            None,
            outcome.message().map(str::to_string).into_iter().collect(),
        ),
        Ok(DeleteOutcome::Deleted(_)) => TableActionResponse::success(None, Vec::new()),
        Err(err) => TableActionResponse::failure(vec![format!("table_delete_rows failed: {err}")]),
    }
}

fn list_rows<C: Clock>(registry: &PersonRegistry<C>) -> Vec<PersonRow> {
    let today = registry.today();
    registry
        .list()
        .iter()
        .map(|person| PersonRow::from_record(person, today))
        .collect()
}

fn sorted_table_rows<C: Clock>(
    registry: &PersonRegistry<C>,
    column: &str,
    descending: bool,
) -> TableRowsResponse {
    let column = match column.parse::<PersonColumn>() {
        Ok(column) => column,
        Err(err) => {
            warn!("event=table_sort module=ffi status=error error_code=unknown_column");
            return TableRowsResponse {
                rows: Vec::new(),
                message: err,
            };
        }
    };
    let order = if descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };

    let today = registry.today();
    let rows = sorted_rows(registry.list(), column, order)
        .iter()
        .map(|person| PersonRow::from_record(person, today))
        .collect();
    TableRowsResponse {
        rows,
        message: String::new(),
    }
}
