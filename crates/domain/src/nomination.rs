// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nomination and sponsorship payloads.

use crate::form::{FieldValue, FileRef, FormData};
use crate::forms::{fields, nomination_schema, sponsorship_inquiry_schema};
use crate::registration::{optional_text, parse_option, required_text};
use crate::schema::ValidationErrors;
use serde::Serialize;

string_enum! {
    /// The award categories educators can be nominated in.
    pub enum AwardCategory: "award category" {
        StemExcellence => "stem_excellence",
        ArtsAndHumanities => "arts_and_humanities",
        InclusiveEducation => "inclusive_education",
        EducationTechnology => "education_technology",
        Leadership => "leadership",
        CommunityImpact => "community_impact",
    }
}

string_enum! {
    /// Sponsorship packages.
    pub enum SponsorTier: "sponsorship tier" {
        Bronze => "bronze",
        Silver => "silver",
        Gold => "gold",
        Platinum => "platinum",
    }
}

/// A public nomination of an educator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nomination {
    pub nominee_name: String,
    pub nominee_email: String,
    pub school: String,
    pub country: String,
    pub category: AwardCategory,
    pub subcategory: String,
    pub justification: String,
    pub nominator_name: String,
    pub nominator_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_document: Option<FileRef>,
}

impl Nomination {
    /// Validates a nomination form and builds the payload.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the nomination schema rejects the data.
    pub fn from_form(data: &FormData) -> Result<Self, ValidationErrors> {
        nomination_schema().validate(data).into_result()?;

        let mut errors: ValidationErrors = ValidationErrors::new();
        let Some(category) = parse_option::<AwardCategory>(data, fields::CATEGORY, &mut errors)
        else {
            errors.add(fields::CATEGORY, "Award category is required");
            return Err(errors);
        };
        let nomination: Self = Self {
            nominee_name: required_text(data, fields::NOMINEE_NAME, &mut errors),
            nominee_email: required_text(data, fields::NOMINEE_EMAIL, &mut errors).to_lowercase(),
            school: required_text(data, fields::SCHOOL, &mut errors),
            country: required_text(data, fields::COUNTRY, &mut errors),
            category,
            subcategory: required_text(data, fields::SUBCATEGORY, &mut errors),
            justification: required_text(data, fields::JUSTIFICATION, &mut errors),
            nominator_name: required_text(data, fields::NOMINATOR_NAME, &mut errors),
            nominator_email: required_text(data, fields::NOMINATOR_EMAIL, &mut errors)
                .to_lowercase(),
            supporting_document: match data.get(fields::SUPPORTING_DOCUMENT) {
                Some(FieldValue::File(file)) => Some(file.clone()),
                _ => None,
            },
        };
        errors.into_result()?;
        Ok(nomination)
    }
}

/// An organization's request to hear about sponsorship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SponsorshipInquiry {
    pub organization_name: String,
    pub contact_name: String,
    pub email: String,
    pub tier: SponsorTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SponsorshipInquiry {
    /// Validates a sponsorship inquiry form and builds the payload.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the inquiry schema rejects the data.
    pub fn from_form(data: &FormData) -> Result<Self, ValidationErrors> {
        sponsorship_inquiry_schema().validate(data).into_result()?;

        let mut errors: ValidationErrors = ValidationErrors::new();
        let tier: Option<SponsorTier> = parse_option(data, fields::TIER, &mut errors);
        let organization_name: String =
            required_text(data, fields::ORGANIZATION_NAME, &mut errors);
        let contact_name: String = required_text(data, fields::CONTACT_NAME, &mut errors);
        let email: String = required_text(data, fields::EMAIL, &mut errors).to_lowercase();

        let Some(tier) = tier else {
            errors.add(fields::TIER, "Sponsorship tier is required");
            return Err(errors);
        };
        errors.into_result()?;

        Ok(Self {
            organization_name,
            contact_name,
            email,
            tier,
            message: optional_text(data, fields::MESSAGE),
        })
    }
}
