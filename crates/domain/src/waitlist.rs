// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::form::FormData;
use crate::forms::{fields, waitlist_schema};
use crate::registration::{parse_list, required_text};
use crate::schema::ValidationErrors;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

string_enum! {
    /// What a waitlist signup wants to hear about.
    pub enum WaitlistCategory: "waitlist category" {
        VoteNominate => "vote_nominate",
        Sponsor => "sponsor",
        Judge => "judge",
        NrcVolunteer => "nrc_volunteer",
        GeneralUpdates => "general_updates",
    }
}

/// Validated answers of the waitlist form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistInput {
    pub name: String,
    pub email: String,
    pub categories: Vec<WaitlistCategory>,
}

impl WaitlistInput {
    /// Validates a waitlist form and builds the input.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the waitlist schema rejects the data.
    pub fn from_form(data: &FormData) -> Result<Self, ValidationErrors> {
        waitlist_schema().validate(data).into_result()?;

        let mut errors: ValidationErrors = ValidationErrors::new();
        let input: Self = Self {
            name: required_text(data, fields::NAME, &mut errors),
            email: required_text(data, fields::EMAIL, &mut errors).to_lowercase(),
            categories: parse_list(data, fields::CATEGORIES, &mut errors),
        };
        errors.into_result()?;
        Ok(input)
    }
}

/// A stored waitlist signup.
///
/// `synced_to_sheets` starts false and flips once an export job has copied
/// the entry to the shared spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub categories: Vec<WaitlistCategory>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub synced_to_sheets: bool,
}

impl WaitlistEntry {
    /// Creates an unsynced entry.
    #[must_use]
    pub fn new(id: String, input: WaitlistInput, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            categories: input.categories,
            created_at,
            synced_to_sheets: false,
        }
    }
}
