//! Demonstration seed set.

use crate::model::person::PersonRecord;
use chrono::NaiveDate;

const SEED_PEOPLE: [(&str, &str, (i32, u32, u32)); 5] = [
    ("Ashwin", "Sharan", (2012, 10, 11)),
    ("Advik", "Sharan", (2012, 10, 11)),
    ("Layne", "Estes", (2011, 12, 16)),
    ("Mason", "Boyd", (2003, 4, 20)),
    ("Babalu", "Sharan", (1980, 1, 10)),
];

/// Returns the five seed people as candidates, in display order.
///
/// Ids are left unset; a registry mints them when loading the seed.
pub fn seed_records() -> Vec<PersonRecord> {
    SEED_PEOPLE
        .iter()
        .map(|(first_name, last_name, (year, month, day))| {
            PersonRecord::new(
                *first_name,
                *last_name,
                NaiveDate::from_ymd_opt(*year, *month, *day),
            )
        })
        .collect()
}
