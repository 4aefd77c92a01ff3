// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field names and the schemas of every form the portal collects.

use crate::nomination::{AwardCategory, SponsorTier};
use crate::nrc::HOURS_PER_WEEK_OPTIONS;
use crate::registration::{AccountType, Intent};
use crate::schema::{CrossRule, PatternKind, Rule, Schema};
use crate::waitlist::WaitlistCategory;
use crate::wizard::Step;

/// Field names shared by forms and typed payloads.
pub mod fields {
    pub const ACCOUNT_TYPE: &str = "account_type";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const COUNTRY: &str = "country";
    pub const ORGANIZATION_NAME: &str = "organization_name";
    pub const ORGANIZATION_WEBSITE: &str = "organization_website";
    pub const ORGANIZATION_SIZE: &str = "organization_size";
    pub const JOB_TITLE: &str = "job_title";
    pub const INTENTS: &str = "intents";
    pub const SPONSORSHIP_TIER: &str = "sponsorship_tier";
    pub const JUDGE_EXPERTISE: &str = "judge_expertise";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const AGREE_TERMS: &str = "agree_terms";
    pub const MARKETING_OPT_IN: &str = "marketing_opt_in";
    pub const REFERRAL_CODE: &str = "referral_code";
    pub const WALLET_BONUS: &str = "wallet_bonus";

    pub const NAME: &str = "name";
    pub const CATEGORIES: &str = "categories";

    pub const NOMINEE_NAME: &str = "nominee_name";
    pub const NOMINEE_EMAIL: &str = "nominee_email";
    pub const SCHOOL: &str = "school";
    pub const CATEGORY: &str = "category";
    pub const SUBCATEGORY: &str = "subcategory";
    pub const JUSTIFICATION: &str = "justification";
    pub const NOMINATOR_NAME: &str = "nominator_name";
    pub const NOMINATOR_EMAIL: &str = "nominator_email";
    pub const SUPPORTING_DOCUMENT: &str = "supporting_document";

    pub const CONTACT_NAME: &str = "contact_name";
    pub const TIER: &str = "tier";
    pub const MESSAGE: &str = "message";

    pub const EDUCATION_BACKGROUND: &str = "education_background";
    pub const MOTIVATION: &str = "motivation";
    pub const HOURS_PER_WEEK: &str = "hours_per_week";
    pub const EXPERTISE_CATEGORIES: &str = "expertise_categories";
}

/// Organization headcount buckets offered on the organization step.
pub const ORGANIZATION_SIZE_OPTIONS: &[&str] = &["1-10", "11-50", "51-200", "201-1000", "1000+"];

/// Minimum password length for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

fn person_name(schema: Schema, field: &'static str, label: &'static str) -> Schema {
    schema.field(
        field,
        label,
        &[
            Rule::Required,
            Rule::MaxLength(50),
            Rule::Pattern(PatternKind::PersonName),
        ],
    )
}

fn email(schema: Schema, field: &'static str, label: &'static str) -> Schema {
    schema.field(
        field,
        label,
        &[
            Rule::Required,
            Rule::MaxLength(254),
            Rule::Pattern(PatternKind::Email),
        ],
    )
}

/// The schema gating the given signup step.
///
/// `Review` and `Complete` collect nothing and have empty schemas.
#[must_use]
pub fn signup_step_schema(step: Step) -> Schema {
    match step {
        Step::AccountType => Schema::new().field(
            fields::ACCOUNT_TYPE,
            "Account type",
            &[Rule::Required, Rule::OneOf(AccountType::OPTIONS)],
        ),
        Step::Contact => {
            let schema: Schema = person_name(Schema::new(), fields::FIRST_NAME, "First name");
            let schema: Schema = person_name(schema, fields::LAST_NAME, "Last name");
            email(schema, fields::EMAIL, "Email")
                .field(fields::PHONE, "Phone", &[Rule::Pattern(PatternKind::Phone)])
                .field(fields::COUNTRY, "Country", &[Rule::Required, Rule::MaxLength(60)])
        }
        Step::Organization => Schema::new()
            .field(
                fields::ORGANIZATION_NAME,
                "Organization name",
                &[Rule::MinLength(2), Rule::MaxLength(120)],
            )
            .field(
                fields::ORGANIZATION_WEBSITE,
                "Website",
                &[Rule::Pattern(PatternKind::Url)],
            )
            .field(
                fields::ORGANIZATION_SIZE,
                "Organization size",
                &[Rule::OneOf(ORGANIZATION_SIZE_OPTIONS)],
            )
            .field(fields::JOB_TITLE, "Job title", &[Rule::MaxLength(80)])
            .cross(CrossRule::RequiredUnless {
                field: fields::ORGANIZATION_NAME,
                when: fields::ACCOUNT_TYPE,
                equals: "individual",
                message: "Organization name is required for organization accounts",
            })
            .cross(CrossRule::RequiredUnless {
                field: fields::ORGANIZATION_SIZE,
                when: fields::ACCOUNT_TYPE,
                equals: "individual",
                message: "Organization size is required for organization accounts",
            }),
        Step::Intents => Schema::new()
            .field(
                fields::INTENTS,
                "Participation",
                &[Rule::Required, Rule::OneOf(Intent::OPTIONS)],
            )
            .cross(CrossRule::MutuallyExclusive {
                field: fields::INTENTS,
                first: "judge",
                second: "be_nominated",
                message: "Judges cannot also be nominated; choose one",
            }),
        Step::RoleDetails => Schema::new()
            .field(
                fields::SPONSORSHIP_TIER,
                "Sponsorship tier",
                &[Rule::OneOf(SponsorTier::OPTIONS)],
            )
            .field(
                fields::JUDGE_EXPERTISE,
                "Judging expertise",
                &[Rule::MinLength(10), Rule::MaxLength(500)],
            )
            .cross(CrossRule::RequiredWhenSelected {
                field: fields::SPONSORSHIP_TIER,
                when: fields::INTENTS,
                option: "sponsor",
                message: "Choose a sponsorship tier",
            })
            .cross(CrossRule::RequiredWhenSelected {
                field: fields::JUDGE_EXPERTISE,
                when: fields::INTENTS,
                option: "judge",
                message: "Describe your judging expertise",
            }),
        Step::Security => Schema::new()
            .field(
                fields::PASSWORD,
                "Password",
                &[
                    Rule::Required,
                    Rule::MinLength(MIN_PASSWORD_LENGTH),
                    Rule::MaxLength(128),
                ],
            )
            .field(fields::CONFIRM_PASSWORD, "Password confirmation", &[Rule::Required])
            .field(fields::AGREE_TERMS, "Terms acceptance", &[Rule::Required])
            .cross(CrossRule::MustMatch {
                field: fields::CONFIRM_PASSWORD,
                other: fields::PASSWORD,
                message: "Passwords do not match",
            }),
        Step::Review | Step::Complete => Schema::new(),
    }
}

/// The union of every step schema on the path the answers select.
#[must_use]
pub fn signup_schema(data: &crate::form::FormData) -> Schema {
    Step::NAVIGABLE
        .iter()
        .filter(|step| step.is_on_path(data))
        .fold(Schema::new(), |schema, step| {
            schema.merge(signup_step_schema(*step))
        })
}

/// Waitlist signup.
#[must_use]
pub fn waitlist_schema() -> Schema {
    let schema: Schema = Schema::new().field(
        fields::NAME,
        "Name",
        &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)],
    );
    email(schema, fields::EMAIL, "Email").field(
        fields::CATEGORIES,
        "Interests",
        &[Rule::Required, Rule::OneOf(WaitlistCategory::OPTIONS)],
    )
}

/// Public nomination of an educator.
#[must_use]
pub fn nomination_schema() -> Schema {
    let schema: Schema = Schema::new().field(
        fields::NOMINEE_NAME,
        "Nominee name",
        &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)],
    );
    let schema: Schema = email(schema, fields::NOMINEE_EMAIL, "Nominee email")
        .field(
            fields::SCHOOL,
            "School",
            &[Rule::Required, Rule::MaxLength(150)],
        )
        .field(fields::COUNTRY, "Country", &[Rule::Required])
        .field(
            fields::CATEGORY,
            "Award category",
            &[Rule::Required, Rule::OneOf(AwardCategory::OPTIONS)],
        )
        .field(
            fields::SUBCATEGORY,
            "Subcategory",
            &[Rule::Required, Rule::MaxLength(100)],
        )
        .field(
            fields::JUSTIFICATION,
            "Justification",
            &[Rule::Required, Rule::MinLength(50), Rule::MaxLength(2000)],
        );
    let schema: Schema = person_name(schema, fields::NOMINATOR_NAME, "Your name");
    email(schema, fields::NOMINATOR_EMAIL, "Your email")
}

/// Sponsorship inquiry from an organization.
#[must_use]
pub fn sponsorship_inquiry_schema() -> Schema {
    let schema: Schema = Schema::new()
        .field(
            fields::ORGANIZATION_NAME,
            "Organization name",
            &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(120)],
        )
        .field(
            fields::CONTACT_NAME,
            "Contact name",
            &[Rule::Required, Rule::MaxLength(100)],
        );
    email(schema, fields::EMAIL, "Email")
        .field(
            fields::TIER,
            "Sponsorship tier",
            &[Rule::Required, Rule::OneOf(SponsorTier::OPTIONS)],
        )
        .field(fields::MESSAGE, "Message", &[Rule::MaxLength(1000)])
}

/// Nominee Research Corps volunteer application.
#[must_use]
pub fn nrc_application_schema() -> Schema {
    let schema: Schema = person_name(Schema::new(), fields::FIRST_NAME, "First name");
    let schema: Schema = person_name(schema, fields::LAST_NAME, "Last name");
    email(schema, fields::EMAIL, "Email")
        .field(fields::PHONE, "Phone", &[Rule::Pattern(PatternKind::Phone)])
        .field(fields::COUNTRY, "Country", &[Rule::Required])
        .field(
            fields::EDUCATION_BACKGROUND,
            "Education background",
            &[Rule::Required, Rule::MinLength(10), Rule::MaxLength(1000)],
        )
        .field(
            fields::MOTIVATION,
            "Motivation",
            &[Rule::Required, Rule::MinLength(50), Rule::MaxLength(2000)],
        )
        .field(
            fields::HOURS_PER_WEEK,
            "Hours per week",
            &[Rule::Required, Rule::OneOf(HOURS_PER_WEEK_OPTIONS)],
        )
        .field(
            fields::EXPERTISE_CATEGORIES,
            "Areas of expertise",
            &[Rule::Required, Rule::OneOf(AwardCategory::OPTIONS)],
        )
}

/// A nominee profile researched by a volunteer.
#[must_use]
pub fn nominee_profile_schema() -> Schema {
    Schema::new()
        .field(
            fields::NOMINEE_NAME,
            "Nominee name",
            &[Rule::Required, Rule::MinLength(2), Rule::MaxLength(100)],
        )
        .field(
            fields::NOMINEE_EMAIL,
            "Nominee email",
            &[Rule::Pattern(PatternKind::Email)],
        )
        .field(
            fields::SCHOOL,
            "School",
            &[Rule::Required, Rule::MaxLength(150)],
        )
        .field(fields::COUNTRY, "Country", &[Rule::Required])
        .field(
            fields::CATEGORY,
            "Award category",
            &[Rule::Required, Rule::OneOf(AwardCategory::OPTIONS)],
        )
        .field(fields::SUBCATEGORY, "Subcategory", &[Rule::MaxLength(100)])
        .field(
            fields::JUSTIFICATION,
            "Justification",
            &[Rule::Required, Rule::MinLength(50), Rule::MaxLength(2000)],
        )
}
