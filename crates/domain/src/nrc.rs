// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nominee Research Corps entities.
//!
//! Applications move `pending → approved` or `pending → rejected` and both
//! outcomes are terminal. An approved application yields exactly one
//! volunteer. Volunteers research nominee profiles; each submitted profile
//! bumps the volunteer's upload counter and completion rate.

use crate::error::DomainError;
use crate::form::FormData;
use crate::forms::{fields, nominee_profile_schema, nrc_application_schema};
use crate::nomination::AwardCategory;
use crate::registration::{optional_text, parse_list, parse_option, required_text};
use crate::schema::ValidationErrors;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Weekly time commitment options on the application form.
pub const HOURS_PER_WEEK_OPTIONS: &[&str] = &["1-5", "6-10", "11-20", "20+"];

/// Number of nominee profiles every volunteer is asked to research.
pub const DEFAULT_TARGET_NOMINEES: u32 = 200;

string_enum! {
    /// Review state of a volunteer application.
    pub enum ApplicationStatus: "application status" {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

impl ApplicationStatus {
    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Validates a transition from this status to `next`.
    ///
    /// # Errors
    ///
    /// Returns an error unless this is `Pending` and `next` is terminal.
    pub fn validate_transition(&self, next: Self) -> Result<(), DomainError> {
        if matches!(self, Self::Pending) && next.is_terminal() {
            return Ok(());
        }
        Err(DomainError::InvalidStatusTransition {
            entity: "application",
            from: self.as_str().to_string(),
            to: next.as_str().to_string(),
        })
    }
}

string_enum! {
    /// State of a researched nominee profile.
    pub enum NomineeStatus: "nominee status" {
        Draft => "draft",
        Submitted => "submitted",
        Approved => "approved",
        Rejected => "rejected",
    }
}

impl NomineeStatus {
    /// Validates a transition from this status to `next`.
    ///
    /// Allowed: draft → submitted, submitted → approved | rejected.
    ///
    /// # Errors
    ///
    /// Returns an error for any other transition.
    pub fn validate_transition(&self, next: Self) -> Result<(), DomainError> {
        let valid: bool = matches!(
            (self, next),
            (Self::Draft, Self::Submitted)
                | (Self::Submitted, Self::Approved | Self::Rejected)
        );
        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                entity: "nominee profile",
                from: self.as_str().to_string(),
                to: next.as_str().to_string(),
            })
        }
    }
}

string_enum! {
    /// Whether a volunteer is currently researching.
    pub enum VolunteerStatus: "volunteer status" {
        Active => "active",
        Inactive => "inactive",
    }
}

string_enum! {
    /// A reviewer's verdict.
    pub enum ReviewDecision: "review decision" {
        Approve => "approve",
        Reject => "reject",
    }
}

impl ReviewDecision {
    /// The application status this decision leads to.
    #[must_use]
    pub const fn application_status(&self) -> ApplicationStatus {
        match self {
            Self::Approve => ApplicationStatus::Approved,
            Self::Reject => ApplicationStatus::Rejected,
        }
    }

    /// The nominee status this decision leads to.
    #[must_use]
    pub const fn nominee_status(&self) -> NomineeStatus {
        match self {
            Self::Approve => NomineeStatus::Approved,
            Self::Reject => NomineeStatus::Rejected,
        }
    }
}

/// Validated answers of the volunteer application form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: String,
    pub education_background: String,
    pub motivation: String,
    pub hours_per_week: String,
    pub expertise_categories: Vec<AwardCategory>,
}

impl ApplicationInput {
    /// Validates an application form and builds the input.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the application schema rejects the data.
    pub fn from_form(data: &FormData) -> Result<Self, ValidationErrors> {
        nrc_application_schema().validate(data).into_result()?;

        let mut errors: ValidationErrors = ValidationErrors::new();
        let input: Self = Self {
            first_name: required_text(data, fields::FIRST_NAME, &mut errors),
            last_name: required_text(data, fields::LAST_NAME, &mut errors),
            email: required_text(data, fields::EMAIL, &mut errors).to_lowercase(),
            phone: optional_text(data, fields::PHONE),
            country: required_text(data, fields::COUNTRY, &mut errors),
            education_background: required_text(data, fields::EDUCATION_BACKGROUND, &mut errors),
            motivation: required_text(data, fields::MOTIVATION, &mut errors),
            hours_per_week: required_text(data, fields::HOURS_PER_WEEK, &mut errors),
            expertise_categories: parse_list(data, fields::EXPERTISE_CATEGORIES, &mut errors),
        };
        errors.into_result()?;
        Ok(input)
    }
}

/// A volunteer application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: String,
    pub education_background: String,
    pub motivation: String,
    pub hours_per_week: String,
    pub expertise_categories: Vec<AwardCategory>,
    pub status: ApplicationStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub submitted_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub reviewed_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub review_notes: Option<String>,
}

impl Application {
    /// Creates a pending application.
    #[must_use]
    pub fn new(id: String, input: ApplicationInput, submitted_at: OffsetDateTime) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            country: input.country,
            education_background: input.education_background,
            motivation: input.motivation,
            hours_per_week: input.hours_per_week,
            expertise_categories: input.expertise_categories,
            status: ApplicationStatus::Pending,
            submitted_at,
            reviewed_at: None,
            reviewed_by: None,
            review_notes: None,
        }
    }

    /// The applicant's display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Applies a review decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the application has already been reviewed.
    pub fn review(
        &mut self,
        decision: ReviewDecision,
        reviewer: &str,
        notes: Option<String>,
        at: OffsetDateTime,
    ) -> Result<(), DomainError> {
        let next: ApplicationStatus = decision.application_status();
        self.status.validate_transition(next)?;
        self.status = next;
        self.reviewed_at = Some(at);
        self.reviewed_by = Some(reviewer.to_string());
        self.review_notes = notes;
        Ok(())
    }
}

/// An approved Nominee Research Corps volunteer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub application_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub status: VolunteerStatus,
    pub target_nominees: u32,
    pub nominees_uploaded: u32,
    /// `nominees_uploaded / target_nominees`, between 0 and 1 until the target is passed.
    pub completion_rate: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub joined_at: OffsetDateTime,
}

impl Volunteer {
    /// Creates the volunteer record for an approved application.
    #[must_use]
    pub fn from_application(id: String, application: &Application, joined_at: OffsetDateTime) -> Self {
        Self {
            id,
            application_id: application.id.clone(),
            email: application.email.clone(),
            first_name: application.first_name.clone(),
            last_name: application.last_name.clone(),
            country: application.country.clone(),
            status: VolunteerStatus::Active,
            target_nominees: DEFAULT_TARGET_NOMINEES,
            nominees_uploaded: 0,
            completion_rate: 0.0,
            joined_at,
        }
    }

    /// The volunteer's display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Counts one more submitted nominee profile.
    pub fn record_submission(&mut self) {
        self.nominees_uploaded = self.nominees_uploaded.saturating_add(1);
        self.completion_rate = if self.target_nominees == 0 {
            0.0
        } else {
            f64::from(self.nominees_uploaded) / f64::from(self.target_nominees)
        };
    }
}

/// Validated answers of the nominee profile form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NomineeInput {
    pub nominee_name: String,
    pub nominee_email: Option<String>,
    pub school: String,
    pub country: String,
    pub category: AwardCategory,
    pub subcategory: Option<String>,
    pub justification: String,
}

impl NomineeInput {
    /// Validates a nominee profile form and builds the input.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the nominee profile schema rejects the data.
    pub fn from_form(data: &FormData) -> Result<Self, ValidationErrors> {
        nominee_profile_schema().validate(data).into_result()?;

        let mut errors: ValidationErrors = ValidationErrors::new();
        let Some(category) = parse_option::<AwardCategory>(data, fields::CATEGORY, &mut errors)
        else {
            errors.add(fields::CATEGORY, "Award category is required");
            return Err(errors);
        };
        let input: Self = Self {
            nominee_name: required_text(data, fields::NOMINEE_NAME, &mut errors),
            nominee_email: optional_text(data, fields::NOMINEE_EMAIL).map(|e| e.to_lowercase()),
            school: required_text(data, fields::SCHOOL, &mut errors),
            country: required_text(data, fields::COUNTRY, &mut errors),
            category,
            subcategory: optional_text(data, fields::SUBCATEGORY),
            justification: required_text(data, fields::JUSTIFICATION, &mut errors),
        };
        errors.into_result()?;
        Ok(input)
    }
}

/// A nominee researched by a volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NomineeProfile {
    pub id: String,
    pub volunteer_id: String,
    pub nominee_name: String,
    pub nominee_email: Option<String>,
    pub school: String,
    pub country: String,
    pub category: AwardCategory,
    pub subcategory: Option<String>,
    pub justification: String,
    pub status: NomineeStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub review_notes: Option<String>,
}

impl NomineeProfile {
    /// Creates a draft profile owned by `volunteer_id`.
    #[must_use]
    pub fn draft(
        id: String,
        volunteer_id: String,
        input: NomineeInput,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            volunteer_id,
            nominee_name: input.nominee_name,
            nominee_email: input.nominee_email,
            school: input.school,
            country: input.country,
            category: input.category,
            subcategory: input.subcategory,
            justification: input.justification,
            status: NomineeStatus::Draft,
            created_at,
            updated_at: created_at,
            submitted_at: None,
            review_notes: None,
        }
    }

    /// Moves the profile to `next`, stamping the relevant timestamps.
    ///
    /// # Errors
    ///
    /// Returns an error if the lifecycle does not allow the transition.
    pub fn transition(&mut self, next: NomineeStatus, at: OffsetDateTime) -> Result<(), DomainError> {
        self.status.validate_transition(next)?;
        self.status = next;
        self.updated_at = at;
        if next == NomineeStatus::Submitted {
            self.submitted_at = Some(at);
        }
        Ok(())
    }
}

/// Aggregate counts for the NRC dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NrcStats {
    pub total_applications: usize,
    pub pending_applications: usize,
    pub approved_applications: usize,
    pub rejected_applications: usize,
    pub active_volunteers: usize,
    pub nominee_profiles: usize,
    pub submitted_profiles: usize,
    pub approved_profiles: usize,
}
