// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::forms::{signup_schema, signup_step_schema, waitlist_schema};
use crate::{CrossRule, FormData, Rule, Schema, Step, ValidationErrors, fields};

use super::helpers::{create_individual_signup, create_school_sponsor_signup};

#[test]
fn test_complete_signup_passes_every_step() {
    let data: FormData = create_individual_signup();
    for step in Step::NAVIGABLE {
        let errors: ValidationErrors = signup_step_schema(*step).validate(&data);
        assert!(errors.is_empty(), "{step} rejected valid data: {errors}");
    }
}

#[test]
fn test_missing_required_field_flags_only_that_field() {
    let complete: FormData = create_school_sponsor_signup();
    let schema: Schema = signup_schema(&complete);

    for spec in schema.fields().iter().filter(|spec| spec.is_required()) {
        let mut data: FormData = complete.clone();
        data.remove(spec.field);
        let errors: ValidationErrors = schema.validate(&data);
        assert_eq!(
            errors.fields(),
            vec![spec.field],
            "removing '{}' produced {errors:?}",
            spec.field
        );
    }
}

#[test]
fn test_password_mismatch_fails_on_confirmation() {
    let pairs = [
        ("correct-horse", "correct-horsE"),
        ("abcdefgh", "abcdefghi"),
        ("longpassword1", "different-one"),
    ];
    for (password, confirmation) in pairs {
        let mut data: FormData = create_individual_signup();
        data.set(fields::PASSWORD, password);
        data.set(fields::CONFIRM_PASSWORD, confirmation);

        let errors: ValidationErrors = signup_step_schema(Step::Security).validate(&data);
        assert_eq!(errors.fields(), vec![fields::CONFIRM_PASSWORD]);
        assert_eq!(
            errors.get(fields::CONFIRM_PASSWORD),
            Some("Passwords do not match")
        );
    }
}

#[test]
fn test_unknown_fields_are_ignored() {
    let mut data: FormData = create_individual_signup();
    data.set("favorite_color", "");
    data.set("utm_source", vec!["newsletter"]);
    assert!(signup_schema(&data).validate(&data).is_empty());
}

#[test]
fn test_optional_blank_field_is_not_checked() {
    let mut data: FormData = create_individual_signup();
    data.set(fields::PHONE, "   ");
    assert!(signup_step_schema(Step::Contact).validate(&data).is_empty());

    data.set(fields::PHONE, "not a phone");
    let errors = signup_step_schema(Step::Contact).validate(&data);
    assert_eq!(errors.fields(), vec![fields::PHONE]);
}

#[test]
fn test_first_failing_rule_wins() {
    let schema: Schema = Schema::new().field(
        "code",
        "Code",
        &[Rule::MinLength(4), Rule::OneOf(&["abcd", "wxyz"])],
    );
    let mut data: FormData = FormData::new();
    data.set("code", "ab");
    assert_eq!(
        schema.validate(&data).get("code"),
        Some("Code must be at least 4 characters")
    );
    data.set("code", "abce");
    assert_eq!(
        schema.validate(&data).get("code"),
        Some("Code must be one of: abcd, wxyz")
    );
}

#[test]
fn test_judge_and_nominee_are_mutually_exclusive() {
    let mut data: FormData = create_individual_signup();
    data.set(fields::INTENTS, vec!["judge", "be_nominated"]);
    let errors: ValidationErrors = signup_step_schema(Step::Intents).validate(&data);
    assert_eq!(
        errors.get(fields::INTENTS),
        Some("Judges cannot also be nominated; choose one")
    );
}

#[test]
fn test_organization_fields_required_only_for_organizations() {
    let mut data: FormData = create_individual_signup();
    let schema: Schema = signup_step_schema(Step::Organization);
    assert!(schema.validate(&data).is_empty());

    data.set(fields::ACCOUNT_TYPE, "company");
    let errors: ValidationErrors = schema.validate(&data);
    assert_eq!(
        errors.fields(),
        vec![fields::ORGANIZATION_NAME, fields::ORGANIZATION_SIZE]
    );
}

#[test]
fn test_role_details_required_when_selected() {
    let mut data: FormData = create_individual_signup();
    data.set(fields::INTENTS, vec!["judge"]);
    let errors: ValidationErrors = signup_step_schema(Step::RoleDetails).validate(&data);
    assert_eq!(errors.fields(), vec![fields::JUDGE_EXPERTISE]);

    data.set(fields::JUDGE_EXPERTISE, "Twenty years teaching physics");
    assert!(
        signup_step_schema(Step::RoleDetails)
            .validate(&data)
            .is_empty()
    );
}

#[test]
fn test_cross_rule_does_not_replace_field_error() {
    let schema: Schema = Schema::new()
        .field("a", "A", &[Rule::Required])
        .cross(CrossRule::MustMatch {
            field: "a",
            other: "b",
            message: "A must match B",
        });
    let mut data: FormData = FormData::new();
    data.set("b", "value");
    assert_eq!(schema.validate(&data).get("a"), Some("A is required"));
}

#[test]
fn test_unchecked_terms_are_required() {
    let mut data: FormData = create_individual_signup();
    data.set(fields::AGREE_TERMS, false);
    let errors: ValidationErrors = signup_step_schema(Step::Security).validate(&data);
    assert_eq!(errors.get(fields::AGREE_TERMS), Some("Terms acceptance is required"));
}

#[test]
fn test_waitlist_schema_rejects_unknown_category() {
    let mut data: FormData = FormData::new();
    data.set(fields::NAME, "Jane Doe");
    data.set(fields::EMAIL, "jane@x.com");
    data.set(fields::CATEGORIES, vec!["vote_nominate", "astronaut"]);
    let errors: ValidationErrors = waitlist_schema().validate(&data);
    assert_eq!(errors.fields(), vec![fields::CATEGORIES]);
}
