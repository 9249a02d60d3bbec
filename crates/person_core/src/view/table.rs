//! Table columns, flat rows and sorted snapshots.

use crate::model::person::PersonRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Columns shown by the person table, in display order via [`PersonColumn::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonColumn {
    Id,
    FirstName,
    LastName,
    BirthDate,
}

impl PersonColumn {
    pub const ALL: [PersonColumn; 4] = [
        PersonColumn::Id,
        PersonColumn::FirstName,
        PersonColumn::LastName,
        PersonColumn::BirthDate,
    ];

    /// Header text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::BirthDate => "Birth Date",
        }
    }

    /// Stable snake_case key, accepted back by `from_str`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::BirthDate => "birth_date",
        }
    }

    fn compare(self, left: &PersonRecord, right: &PersonRecord) -> Ordering {
        match self {
            Self::Id => left.id().cmp(&right.id()),
            Self::FirstName => left.first_name.cmp(&right.first_name),
            Self::LastName => left.last_name.cmp(&right.last_name),
            // `None < Some(_)`: rows without a date sort first.
            Self::BirthDate => left.birth_date.cmp(&right.birth_date),
        }
    }
}

impl FromStr for PersonColumn {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|column| column.key() == normalized)
            .ok_or_else(|| {
                format!(
                    "unsupported column `{normalized}`; expected id|first_name|last_name|birth_date"
                )
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Returns a sorted copy of `rows`.
///
/// Sorting is stable, so rows with equal keys keep their list order.
pub fn sorted_rows(
    rows: &[PersonRecord],
    column: PersonColumn,
    order: SortOrder,
) -> Vec<PersonRecord> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|left, right| {
        let ordering = column.compare(left, right);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Flat, string-only projection of one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRow {
    /// `0` for candidates that were never committed.
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    /// ISO `YYYY-MM-DD`, empty when unknown.
    pub birth_date: String,
    pub age_category: String,
}

impl PersonRow {
    pub fn from_record(record: &PersonRecord, today: NaiveDate) -> Self {
        Self {
            id: record.id().map(|id| id.value()).unwrap_or_default(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            birth_date: record
                .birth_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            age_category: record.age_category(today).label().to_string(),
        }
    }
}
