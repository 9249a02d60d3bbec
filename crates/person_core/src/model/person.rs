//! Person domain model.
//!
//! # Responsibility
//! - Define the person record displayed by roster tables.
//! - Validate user-entered fields and classify age from the birth date.
//!
//! # Invariants
//! - `id` is `None` for candidates and is only ever set by a registry.
//! - First and last names must be non-blank after trimming.
//! - `birth_date`, when set, must not be after the reference date.
//! - Age category is derived on read and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BLANK_FIRST_NAME_MESSAGE: &str = "First name must contain minimum one character.";
const BLANK_LAST_NAME_MESSAGE: &str = "Last name must contain minimum one character.";
const FUTURE_BIRTH_DATE_MESSAGE: &str = "Birth date must not be in future.";

/// Registry-assigned identifier of a committed person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl PersonId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Age bucket derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeCategory {
    /// Younger than 2 years.
    Baby,
    /// 2 to 12 years.
    Child,
    /// 13 to 19 years, both inclusive.
    Teen,
    /// 20 to 50 years, both inclusive.
    Adult,
    /// Older than 50 years.
    Senior,
    /// No birth date, or a birth date after the reference date.
    Unknown,
}

impl AgeCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Baby => "BABY",
            Self::Child => "CHILD",
            Self::Teen => "TEEN",
            Self::Adult => "ADULT",
            Self::Senior => "SENIOR",
            Self::Unknown => "UNKNOWN",
        }
    }

    fn from_years(years: u32) -> Self {
        match years {
            0..=1 => Self::Baby,
            2..=12 => Self::Child,
            13..=19 => Self::Teen,
            20..=50 => Self::Adult,
            _ => Self::Senior,
        }
    }
}

impl Display for AgeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One failed field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    BlankFirstName,
    BlankLastName,
    FutureBirthDate { birth_date: NaiveDate, today: NaiveDate },
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankFirstName => f.write_str(BLANK_FIRST_NAME_MESSAGE),
            Self::BlankLastName => f.write_str(BLANK_LAST_NAME_MESSAGE),
            Self::FutureBirthDate { .. } => f.write_str(FUTURE_BIRTH_DATE_MESSAGE),
        }
    }
}

impl Error for PersonValidationError {}

/// All rule failures of one validation pass, in check order.
///
/// Never empty: a pass with no failures is reported as `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<PersonValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[PersonValidationError] {
        &self.0
    }

    /// Human-readable messages in check order, ready for display.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &PersonValidationError) -> bool {
        self.0.contains(error)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = PersonValidationError;
    type IntoIter = std::vec::IntoIter<PersonValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A person as entered in the form or listed in the table.
///
/// Candidates are built with [`PersonRecord::new`] and have no id. A
/// registry assigns the id when it accepts the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(default)]
    id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub birth_date: Option<NaiveDate>,
}

impl PersonRecord {
    /// Creates a candidate record without an id.
    ///
    /// Does not validate; call [`PersonRecord::validate`] or hand the record
    /// to a registry.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
        }
    }

    /// Registry-assigned id, `None` while the record is a candidate.
    pub fn id(&self) -> Option<PersonId> {
        self.id
    }

    pub fn is_candidate(&self) -> bool {
        self.id.is_none()
    }

    pub(crate) fn assign_id(&mut self, id: PersonId) {
        self.id = Some(id);
    }

    /// Runs every field rule and returns all failures together.
    ///
    /// # Contract
    /// - Checks never short-circuit.
    /// - Failure order is first name, last name, birth date.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if is_blank(&self.first_name) {
            errors.push(PersonValidationError::BlankFirstName);
        }
        if is_blank(&self.last_name) {
            errors.push(PersonValidationError::BlankLastName);
        }
        if let Err(err) = validate_birth_date(self.birth_date, today) {
            errors.push(err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn is_valid(&self, today: NaiveDate) -> bool {
        self.validate(today).is_ok()
    }

    pub fn age_category(&self, today: NaiveDate) -> AgeCategory {
        age_category_for(self.birth_date, today)
    }

    /// Accepts the record if it is valid and records the acceptance.
    ///
    /// Succeeds exactly when [`PersonRecord::validate`] succeeds. The only
    /// side effect is a metadata log line; storage belongs to the caller.
    pub fn save(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        match self.validate(today) {
            Ok(()) => {
                log::info!(
                    "event=person_saved module=model status=ok person_id={}",
                    display_id(self.id)
                );
                Ok(())
            }
            Err(errors) => {
                log::debug!(
                    "event=person_saved module=model status=rejected error_count={}",
                    errors.len()
                );
                Err(errors)
            }
        }
    }
}

impl Display for PersonRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[personId={}, firstName={}, lastName={}, birthDate=",
            display_id(self.id),
            self.first_name,
            self.last_name
        )?;
        match self.birth_date {
            Some(date) => write!(f, "{date}]"),
            None => f.write_str("none]"),
        }
    }
}

/// Checks that an optional birth date is not after `today`.
///
/// An absent date is valid. No lower bound is enforced.
pub fn validate_birth_date(
    birth_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), PersonValidationError> {
    match birth_date {
        Some(birth_date) if birth_date > today => {
            Err(PersonValidationError::FutureBirthDate { birth_date, today })
        }
        _ => Ok(()),
    }
}

/// Whole calendar years between `birth_date` and `today`.
///
/// Returns `None` when `birth_date` is after `today`.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth_date)
}

/// Classifies an optional birth date relative to `today`.
pub fn age_category_for(birth_date: Option<NaiveDate>, today: NaiveDate) -> AgeCategory {
    birth_date
        .and_then(|birth_date| age_in_years(birth_date, today))
        .map(AgeCategory::from_years)
        .unwrap_or(AgeCategory::Unknown)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn display_id(id: Option<PersonId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "none".to_string())
}
