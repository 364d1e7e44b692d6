//! Regression coverage for character PLOD domain types.

use rstest::{fixture, rstest};
use serde_json::{Value, json};
use uuid::Uuid;

use super::{
    CharacterPlod, CharacterPlodDraft, CharacterPlodId, CharacterPlodValidationError,
    CriteriaError, PlodCount, SearchCriteria, rank_by_plod,
};

fn record(name: &str, plod: i32, description: Option<&str>) -> CharacterPlod {
    CharacterPlod::new(CharacterPlodDraft {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        plod,
        description: description.map(str::to_owned),
    })
    .expect("valid record")
}

#[fixture]
fn vader() -> CharacterPlod {
    record("Darth Vader", 5, Some("Sith Lord"))
}

fn criteria(value: Value) -> Result<SearchCriteria, CriteriaError> {
    SearchCriteria::from_json(value.as_object().expect("criteria fixture is an object"))
}

#[rstest]
fn record_trims_name() {
    let record = record("  Jon Snow  ", 40, None);
    assert_eq!(record.name(), "Jon Snow");
}

#[rstest]
#[case("   ", 1, CharacterPlodValidationError::EmptyName)]
#[case("Arya", -1, CharacterPlodValidationError::NegativePlod { value: -1 })]
fn record_rejects_invalid_drafts(
    #[case] name: &str,
    #[case] plod: i32,
    #[case] expected: CharacterPlodValidationError,
) {
    let result = CharacterPlod::new(CharacterPlodDraft {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        plod,
        description: None,
    });
    assert_eq!(result, Err(expected));
}

#[rstest]
fn record_serialises_without_empty_description() {
    let record = record("Darth Vader", 5, None);
    let value = serde_json::to_value(&record).expect("record serialises");

    assert_eq!(value.get("name"), Some(&json!("Darth Vader")));
    assert_eq!(value.get("plod"), Some(&json!(5)));
    assert!(value.get("description").is_none());
    assert_eq!(value.get("id"), Some(&json!(record.id().to_string())));
}

#[rstest]
fn record_deserialises_through_validation() {
    let result: Result<CharacterPlod, _> =
        serde_json::from_value(json!({"name": "", "plod": 3}));
    assert!(result.is_err());

    let parsed: CharacterPlod =
        serde_json::from_value(json!({"_id": Uuid::nil(), "name": "Bran", "plod": 3}))
            .expect("valid document");
    assert!(parsed.id().as_uuid().is_nil());
}

#[rstest]
#[case("abc")]
#[case("")]
#[case(" 00000000-0000-0000-0000-000000000000")]
fn id_rejects_malformed_values(#[case] raw: &str) {
    assert_eq!(
        CharacterPlodId::parse(raw),
        Err(CharacterPlodValidationError::InvalidId)
    );
}

#[rstest]
#[case("1", Some(1))]
#[case(" 25 ", Some(25))]
#[case("0", None)]
#[case("-3", None)]
#[case("ten", None)]
fn count_parsing(#[case] raw: &str, #[case] expected: Option<u32>) {
    assert_eq!(PlodCount::parse(raw).ok().map(PlodCount::get), expected);
}

#[rstest]
fn empty_criteria_match_everything(vader: CharacterPlod) {
    let parsed = criteria(json!({})).expect("empty criteria are valid");
    assert!(parsed.is_empty());
    assert!(parsed.matches(&vader));
}

#[rstest]
fn criteria_match_on_every_constrained_field(vader: CharacterPlod) {
    let parsed = criteria(json!({"name": "Darth Vader", "plod": 5})).expect("valid criteria");
    assert!(parsed.matches(&vader));

    let mismatch = criteria(json!({"name": "Darth Vader", "plod": 6})).expect("valid criteria");
    assert!(!mismatch.matches(&vader));
}

#[rstest]
fn criteria_accept_numeric_strings_for_plod(vader: CharacterPlod) {
    let parsed = criteria(json!({"plod": "5"})).expect("numeric string is accepted");
    assert!(parsed.matches(&vader));
}

#[rstest]
fn null_description_matches_records_without_one(vader: CharacterPlod) {
    let parsed = criteria(json!({"description": null})).expect("null description is valid");
    assert!(!parsed.matches(&vader));
    assert!(parsed.matches(&record("Hodor", 90, None)));
}

#[rstest]
#[case(json!({"house": "Stark"}), "house")]
#[case(json!({"name": "Arya", "weapon": "Needle"}), "weapon")]
fn criteria_reject_unknown_properties(#[case] body: Value, #[case] property: &str) {
    let err = criteria(body).expect_err("unknown property is rejected");
    assert!(matches!(err, CriteriaError::UnknownProperty { .. }));
    assert_eq!(err.property(), property);
}

#[rstest]
#[case(json!({"plod": "high"}), "plod")]
#[case(json!({"name": 7}), "name")]
#[case(json!({"_id": "abc"}), "_id")]
fn criteria_reject_mistyped_values(#[case] body: Value, #[case] property: &str) {
    let err = criteria(body).expect_err("mistyped value is rejected");
    assert!(matches!(err, CriteriaError::InvalidValue { .. }));
    assert_eq!(err.property(), property);
}

#[rstest]
fn ranking_orders_by_plod_then_name() {
    let mut records = vec![
        record("Bran", 10, None),
        record("Arya", 80, None),
        record("Aemon", 10, None),
    ];
    rank_by_plod(&mut records);
    let names: Vec<&str> = records.iter().map(CharacterPlod::name).collect();
    assert_eq!(names, ["Arya", "Aemon", "Bran"]);
}
