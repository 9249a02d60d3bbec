//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `person_core` linkage.
//! - Print the seeded table so registry wiring can be checked by eye.

use person_core::{PersonColumn, PersonRegistry, PersonRow};

fn main() {
    println!("person_core ping={}", person_core::ping());
    println!("person_core version={}", person_core::core_version());

    let registry = PersonRegistry::seeded();
    let today = registry.today();
    let headers = PersonColumn::ALL.map(PersonColumn::title);
    println!(
        "{:<4} {:<12} {:<12} {:<12} Age Category",
        headers[0], headers[1], headers[2], headers[3]
    );
    for person in registry.list() {
        let row = PersonRow::from_record(person, today);
        println!(
            "{:<4} {:<12} {:<12} {:<12} {}",
            row.id, row.first_name, row.last_name, row.birth_date, row.age_category
        );
    }
}
