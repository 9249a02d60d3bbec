use chrono::NaiveDate;
use person_core::{
    age_category_for, validate_birth_date, AgeCategory, PersonRecord, PersonValidationError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 1, 1)
}

#[test]
fn future_birth_date_is_rejected_with_message() {
    let err = validate_birth_date(Some(date(2024, 1, 2)), today()).unwrap_err();
    assert_eq!(
        err,
        PersonValidationError::FutureBirthDate {
            birth_date: date(2024, 1, 2),
            today: today(),
        }
    );
    assert_eq!(err.to_string(), "Birth date must not be in future.");
}

#[test]
fn absent_or_past_birth_date_is_valid() {
    assert!(validate_birth_date(None, today()).is_ok());
    assert!(validate_birth_date(Some(today()), today()).is_ok());
    assert!(validate_birth_date(Some(date(1800, 1, 1)), today()).is_ok());
}

#[test]
fn validate_accumulates_all_errors_in_field_order() {
    let person = PersonRecord::new("  ", "", Some(date(2030, 5, 5)));

    let errors = person.validate(today()).unwrap_err();
    assert_eq!(
        errors.messages(),
        vec![
            "First name must contain minimum one character.",
            "Last name must contain minimum one character.",
            "Birth date must not be in future.",
        ]
    );
    assert!(!person.is_valid(today()));
}

#[test]
fn blank_names_yield_exactly_two_errors() {
    let person = PersonRecord::new("", "\t", None);

    let errors = person.validate(today()).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.errors(),
        &[
            PersonValidationError::BlankFirstName,
            PersonValidationError::BlankLastName,
        ]
    );
}

#[test]
fn valid_person_passes_and_save_succeeds() {
    let person = PersonRecord::new("Layne", "Estes", Some(date(2011, 12, 16)));

    assert!(person.validate(today()).is_ok());
    assert!(person.save(today()).is_ok());
}

#[test]
fn save_fails_exactly_when_validation_fails() {
    let person = PersonRecord::new("Layne", " ", None);

    assert_eq!(
        person.save(today()).unwrap_err(),
        person.validate(today()).unwrap_err()
    );
}

#[test]
fn age_category_boundaries() {
    let cases = [
        (date(2023, 6, 1), AgeCategory::Baby),
        (date(2022, 1, 2), AgeCategory::Baby),
        (date(2022, 1, 1), AgeCategory::Child),
        (date(2011, 1, 2), AgeCategory::Child),
        (date(2011, 1, 1), AgeCategory::Teen),
        (date(2005, 1, 1), AgeCategory::Teen),
        (date(2004, 1, 1), AgeCategory::Adult),
        (date(1974, 1, 1), AgeCategory::Adult),
        (date(1973, 1, 2), AgeCategory::Adult),
        (date(1973, 1, 1), AgeCategory::Senior),
    ];

    for (birth_date, expected) in cases {
        let person = PersonRecord::new("A", "B", Some(birth_date));
        assert_eq!(
            person.age_category(today()),
            expected,
            "birth date {birth_date}"
        );
    }
}

#[test]
fn age_category_is_unknown_without_or_with_future_date() {
    assert_eq!(age_category_for(None, today()), AgeCategory::Unknown);
    assert_eq!(
        age_category_for(Some(date(2024, 1, 2)), today()),
        AgeCategory::Unknown
    );
}

#[test]
fn age_category_is_stable_for_same_inputs() {
    let person = PersonRecord::new("Babalu", "Sharan", Some(date(1980, 1, 10)));
    assert_eq!(person.age_category(today()), person.age_category(today()));
}

#[test]
fn default_record_is_an_empty_candidate() {
    let person = PersonRecord::default();

    assert!(person.is_candidate());
    assert_eq!(person.first_name, "");
    assert_eq!(person.birth_date, None);
    assert_eq!(person.validate(today()).unwrap_err().len(), 2);
}

#[test]
fn person_serialization_uses_expected_wire_fields() {
    let person = PersonRecord::new("Ashwin", "Sharan", Some(date(2012, 10, 11)));

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["id"], serde_json::Value::Null);
    assert_eq!(json["first_name"], "Ashwin");
    assert_eq!(json["last_name"], "Sharan");
    assert_eq!(json["birth_date"], "2012-10-11");

    let decoded: PersonRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn age_category_serializes_as_upper_case_label() {
    let json = serde_json::to_value(AgeCategory::Senior).unwrap();
    assert_eq!(json, "SENIOR");
    assert_eq!(AgeCategory::Teen.to_string(), "TEEN");
}
