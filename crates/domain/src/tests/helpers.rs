// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FieldValue, FormData, fields};

/// A complete individual signup that passes every step schema.
pub fn create_individual_signup() -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::ACCOUNT_TYPE, "individual".into()),
        (fields::FIRST_NAME, "Jane".into()),
        (fields::LAST_NAME, "Doe".into()),
        (fields::EMAIL, "Jane@X.com".into()),
        (fields::COUNTRY, "Kenya".into()),
        (fields::INTENTS, vec!["vote_nominate"].into()),
        (fields::PASSWORD, "correct-horse".into()),
        (fields::CONFIRM_PASSWORD, "correct-horse".into()),
        (fields::AGREE_TERMS, true.into()),
    ];
    pairs.into_iter().collect()
}

/// A complete school signup that also wants to sponsor.
pub fn create_school_sponsor_signup() -> FormData {
    let mut data: FormData = create_individual_signup();
    data.set(fields::ACCOUNT_TYPE, "school");
    data.set(fields::ORGANIZATION_NAME, "Lakeside Academy");
    data.set(fields::ORGANIZATION_SIZE, "51-200");
    data.set(fields::INTENTS, vec!["vote_nominate", "sponsor"]);
    data.set(fields::SPONSORSHIP_TIER, "gold");
    data
}

/// A complete volunteer application form.
pub fn create_application_form(email: &str) -> FormData {
    let pairs: Vec<(&str, FieldValue)> = vec![
        (fields::FIRST_NAME, "Amara".into()),
        (fields::LAST_NAME, "Okafor".into()),
        (fields::EMAIL, email.into()),
        (fields::COUNTRY, "Nigeria".into()),
        (
            fields::EDUCATION_BACKGROUND,
            "B.Ed. in Science Education".into(),
        ),
        (
            fields::MOTIVATION,
            "I want to help surface the teachers who changed my community for the better."
                .into(),
        ),
        (fields::HOURS_PER_WEEK, "6-10".into()),
        (
            fields::EXPERTISE_CATEGORIES,
            vec!["stem_excellence", "leadership"].into(),
        ),
    ];
    pairs.into_iter().collect()
}
