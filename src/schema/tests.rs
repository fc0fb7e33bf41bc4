//! Unit tests for declarative schema validation.

use super::{FieldPath, ObjectSchema, PathSegment, Schema, SchemaError, is_email};
use regex::Regex;
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

#[fixture]
fn profile() -> ObjectSchema {
    let lowercase = Regex::new("^[a-z]+$").expect("literal pattern compiles");
    ObjectSchema::new()
        .required(
            "handle",
            Schema::string()
                .non_empty("Handle is required")
                .pattern(lowercase, "Handle must be lowercase"),
        )
        .optional("bio", Schema::string())
        .with_default("labels", Schema::array(Schema::string()), json!([]))
        .with_default("visible", Schema::boolean(), json!(true))
        .optional(
            "limits",
            ObjectSchema::new()
                .optional("rate", Schema::number().positive())
                .optional("share", Schema::number().min(0.0).max(100.0))
                .optional("tier", Schema::one_of(["low", "medium", "high"])),
        )
}

fn messages(schema: &ObjectSchema, input: &Value) -> Vec<String> {
    schema
        .validate(input)
        .expect_err("input should be rejected")
        .into_messages()
}

#[rstest]
fn defaults_are_applied_and_optionals_omitted(profile: ObjectSchema) {
    let normalized = profile
        .validate(&json!({ "handle": "bot" }))
        .expect("input should be accepted");

    assert_eq!(
        normalized,
        json!({ "handle": "bot", "labels": [], "visible": true })
    );
}

#[rstest]
fn supplied_values_override_defaults(profile: ObjectSchema) {
    let normalized = profile
        .validate(&json!({ "handle": "bot", "labels": ["a"], "visible": false, "bio": "hi" }))
        .expect("input should be accepted");

    assert_eq!(
        normalized,
        json!({ "handle": "bot", "bio": "hi", "labels": ["a"], "visible": false })
    );
}

#[rstest]
fn undeclared_members_are_dropped(profile: ObjectSchema) {
    let normalized = profile
        .validate(&json!({ "handle": "bot", "admin": true }))
        .expect("input should be accepted");

    assert!(normalized.get("admin").is_none());
}

#[rstest]
fn missing_required_field_reports_required(profile: ObjectSchema) {
    assert_eq!(messages(&profile, &json!({})), vec!["Required".to_owned()]);
}

#[rstest]
fn every_failing_string_check_is_reported(profile: ObjectSchema) {
    assert_eq!(
        messages(&profile, &json!({ "handle": "" })),
        vec![
            "Handle is required".to_owned(),
            "Handle must be lowercase".to_owned(),
        ]
    );
}

#[rstest]
fn violations_across_fields_keep_declaration_order(profile: ObjectSchema) {
    let input = json!({
        "handle": "Bot",
        "labels": ["ok", 7],
        "visible": "yes",
        "limits": { "rate": 0, "share": 120, "tier": "extreme" },
    });

    assert_eq!(
        messages(&profile, &input),
        vec![
            "Handle must be lowercase".to_owned(),
            "Expected string, received number".to_owned(),
            "Expected boolean, received string".to_owned(),
            "Number must be greater than 0".to_owned(),
            "Number must be less than or equal to 100".to_owned(),
            "Invalid enum value. Expected 'low' | 'medium' | 'high', received 'extreme'".to_owned(),
        ]
    );
}

#[rstest]
fn violation_paths_point_into_nested_values(profile: ObjectSchema) {
    let violations = profile
        .validate(&json!({ "handle": "bot", "labels": ["ok", false] }))
        .expect_err("input should be rejected");

    let paths: Vec<String> = violations
        .violations()
        .iter()
        .map(|v| v.path().to_string())
        .collect();
    assert_eq!(paths, vec!["labels[1]".to_owned()]);
    assert_eq!(
        violations.violations().first().map(|v| v.path().segments().to_vec()),
        Some(vec![PathSegment::Key("labels"), PathSegment::Index(1)])
    );
}

#[rstest]
#[case(json!(-1), "Number must be greater than or equal to 0")]
#[case(json!(100.5), "Number must be less than or equal to 100")]
#[case(json!("fast"), "Expected number, received string")]
fn bounded_numbers_reject_out_of_range(
    profile: ObjectSchema,
    #[case] share: Value,
    #[case] expected: &str,
) {
    let input = json!({ "handle": "bot", "limits": { "share": share } });

    assert_eq!(messages(&profile, &input), vec![expected.to_owned()]);
}

#[rstest]
#[case(json!(0))]
#[case(json!(100))]
#[case(json!(99.9))]
fn bounds_are_inclusive(profile: ObjectSchema, #[case] share: Value) {
    let input = json!({ "handle": "bot", "limits": { "share": share } });

    assert!(profile.validate(&input).is_ok());
}

#[rstest]
fn null_is_not_treated_as_absent(profile: ObjectSchema) {
    assert_eq!(
        messages(&profile, &json!({ "handle": "bot", "bio": null })),
        vec!["Expected string, received null".to_owned()]
    );
}

#[rstest]
fn non_object_root_is_rejected(profile: ObjectSchema) {
    assert_eq!(
        messages(&profile, &json!(["handle"])),
        vec!["Expected object, received array".to_owned()]
    );
}

#[rstest]
fn enum_rejects_non_string_values() {
    let schema = Schema::one_of(["one-time", "subscription"]);

    let violations = schema.validate(&json!(3)).expect_err("number is not an option");

    assert_eq!(
        violations.into_messages(),
        vec!["Expected 'one-time' | 'subscription', received number".to_owned()]
    );
}

#[rstest]
fn format_checks_cover_email_uuid_and_datetime() {
    let schema = ObjectSchema::new()
        .required("email", Schema::string().email("Invalid email format"))
        .required("id", Schema::string().uuid("Invalid uuid"))
        .required("at", Schema::string().datetime("Invalid datetime"));

    let ok = json!({
        "email": "ada@example.com",
        "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
        "at": "2026-01-02T03:04:05Z",
    });
    let bad = json!({ "email": "ada@", "id": "not-a-uuid", "at": "yesterday" });

    assert!(schema.validate(&ok).is_ok());
    assert_eq!(
        messages(&schema, &bad),
        vec![
            "Invalid email format".to_owned(),
            "Invalid uuid".to_owned(),
            "Invalid datetime".to_owned(),
        ]
    );
}

#[rstest]
fn max_length_is_counted_in_characters() {
    let schema = Schema::string().max_len(3, "Too long");

    assert!(Schema::from(schema.clone()).validate(&json!("äöü")).is_ok());
    assert!(Schema::from(schema).validate(&json!("äöüß")).is_err());
}

#[derive(Debug, Deserialize, PartialEq)]
struct Profile {
    handle: String,
    labels: Vec<String>,
    visible: bool,
}

#[rstest]
fn parse_decodes_the_normalized_value(profile: ObjectSchema) {
    let parsed: Profile = profile
        .parse(&json!({ "handle": "bot" }))
        .expect("input should parse");

    assert_eq!(
        parsed,
        Profile {
            handle: "bot".to_owned(),
            labels: Vec::new(),
            visible: true,
        }
    );
}

#[rstest]
fn parse_keeps_violations_separate_from_decode_errors(profile: ObjectSchema) {
    let invalid = profile.parse::<Profile>(&json!({ "handle": "" }));
    let undecodable = ObjectSchema::new()
        .required("handle", Schema::number())
        .parse::<Profile>(&json!({ "handle": 1 }));

    assert!(matches!(invalid, Err(SchemaError::Invalid(_))));
    assert!(matches!(undecodable, Err(SchemaError::Decode(_))));
}

#[rstest]
fn root_path_displays_empty() {
    assert_eq!(FieldPath::root().to_string(), "");
}

#[rstest]
#[case("ada@example.com", true)]
#[case("first.last+tag@mail.example.org", true)]
#[case("ada@example", false)]
#[case("@example.com", false)]
#[case("ada..b@example.com", false)]
#[case("ada@example.c", false)]
#[case("ada example@example.com", false)]
fn email_shape_is_checked(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(is_email(text), expected);
}
