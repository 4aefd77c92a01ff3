// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The typed signup payload.
//!
//! The wizard collects a loosely typed `FormData`. At submission it is
//! validated once against every step on the selected path and converted into
//! a `Registration`, whose `Account` variant makes organization data present
//! exactly when the account type requires it.

use crate::form::FormData;
use crate::forms::{fields, signup_schema};
use crate::nomination::SponsorTier;
use crate::schema::ValidationErrors;
use serde::Serialize;
use std::str::FromStr;

string_enum! {
    /// Who is signing up.
    pub enum AccountType: "account type" {
        Individual => "individual",
        School => "school",
        Company => "company",
        Nonprofit => "nonprofit",
    }
}

impl AccountType {
    /// Returns true for every account type that represents an organization.
    #[must_use]
    pub const fn is_organization(&self) -> bool {
        !matches!(self, Self::Individual)
    }
}

string_enum! {
    /// What a new member wants to do in the program.
    pub enum Intent: "participation intent" {
        /// Vote for and nominate educators.
        VoteNominate => "vote_nominate",
        /// Sponsor an award.
        Sponsor => "sponsor",
        /// Serve on a judging panel.
        Judge => "judge",
        /// Volunteer with the Nominee Research Corps.
        NrcVolunteer => "nrc_volunteer",
        /// Be considered as a nominee.
        BeNominated => "be_nominated",
    }
}

impl Intent {
    /// Returns true if choosing this intent adds the role details step.
    #[must_use]
    pub const fn requires_role_details(&self) -> bool {
        matches!(self, Self::Sponsor | Self::Judge)
    }
}

/// Contact fields common to every account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub country: String,
}

/// Organization fields, present only for organization accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Organization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

/// The account variant, tagged by account type on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "account_type", rename_all = "snake_case")]
pub enum Account {
    Individual,
    School { organization: Organization },
    Company { organization: Organization },
    Nonprofit { organization: Organization },
}

impl Account {
    /// The account type this variant represents.
    #[must_use]
    pub const fn account_type(&self) -> AccountType {
        match self {
            Self::Individual => AccountType::Individual,
            Self::School { .. } => AccountType::School,
            Self::Company { .. } => AccountType::Company,
            Self::Nonprofit { .. } => AccountType::Nonprofit,
        }
    }

    /// The organization details, if this is an organization account.
    #[must_use]
    pub const fn organization(&self) -> Option<&Organization> {
        match self {
            Self::Individual => None,
            Self::School { organization }
            | Self::Company { organization }
            | Self::Nonprofit { organization } => Some(organization),
        }
    }
}

/// Extra details for intents that need them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsorship_tier: Option<SponsorTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub judge_expertise: Option<String>,
}

/// A complete, validated signup.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    #[serde(flatten)]
    pub account: Account,
    pub contact: Contact,
    pub intents: Vec<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_details: Option<RoleDetails>,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_bonus: Option<i64>,
    pub marketing_opt_in: bool,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("account", &self.account)
            .field("contact", &self.contact)
            .field("intents", &self.intents)
            .field("role_details", &self.role_details)
            .field("password", &"<redacted>")
            .field("referral_code", &self.referral_code)
            .field("wallet_bonus", &self.wallet_bonus)
            .field("marketing_opt_in", &self.marketing_opt_in)
            .finish()
    }
}

/// Reads a required text field, recording an error if it is missing.
pub(crate) fn required_text(data: &FormData, field: &str, errors: &mut ValidationErrors) -> String {
    data.text(field).map_or_else(
        || {
            errors.add(field, format!("{field} is required"));
            String::new()
        },
        String::from,
    )
}

/// Reads an optional text field.
pub(crate) fn optional_text(data: &FormData, field: &str) -> Option<String> {
    data.text(field).map(String::from)
}

/// Parses a text field into a closed option set, recording an error if it fails.
pub(crate) fn parse_option<T: FromStr>(
    data: &FormData,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let text: &str = data.text(field)?;
    match text.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            errors.add(field, err.to_string());
            None
        }
    }
}

/// Parses every item of a list field, recording an error on the first bad item.
pub(crate) fn parse_list<T: FromStr>(
    data: &FormData,
    field: &str,
    errors: &mut ValidationErrors,
) -> Vec<T>
where
    T::Err: std::fmt::Display,
{
    let mut parsed: Vec<T> = Vec::new();
    for item in data.list(field) {
        match item.parse::<T>() {
            Ok(value) => parsed.push(value),
            Err(err) => {
                errors.add(field, err.to_string());
                break;
            }
        }
    }
    parsed
}

impl Registration {
    /// Validates the collected answers and builds the typed payload.
    ///
    /// Every step on the selected path is validated, so a payload is only
    /// produced from data the wizard would have let through.
    ///
    /// # Errors
    ///
    /// Returns the field errors if any step schema rejects the data.
    pub fn from_form(data: &FormData) -> Result<Self, ValidationErrors> {
        signup_schema(data).validate(data).into_result()?;

        let mut errors: ValidationErrors = ValidationErrors::new();

        let account_type: Option<AccountType> =
            parse_option(data, fields::ACCOUNT_TYPE, &mut errors);

        let contact: Contact = Contact {
            first_name: required_text(data, fields::FIRST_NAME, &mut errors),
            last_name: required_text(data, fields::LAST_NAME, &mut errors),
            email: required_text(data, fields::EMAIL, &mut errors).to_lowercase(),
            phone: optional_text(data, fields::PHONE),
            country: required_text(data, fields::COUNTRY, &mut errors),
        };

        let account: Option<Account> = account_type.map(|account_type| {
            if !account_type.is_organization() {
                return Account::Individual;
            }
            let organization: Organization = Organization {
                name: required_text(data, fields::ORGANIZATION_NAME, &mut errors),
                website: optional_text(data, fields::ORGANIZATION_WEBSITE),
                size: required_text(data, fields::ORGANIZATION_SIZE, &mut errors),
                job_title: optional_text(data, fields::JOB_TITLE),
            };
            match account_type {
                AccountType::School => Account::School { organization },
                AccountType::Company => Account::Company { organization },
                AccountType::Nonprofit | AccountType::Individual => {
                    Account::Nonprofit { organization }
                }
            }
        });

        let intents: Vec<Intent> = parse_list(data, fields::INTENTS, &mut errors);
        let role_details: Option<RoleDetails> = if intents
            .iter()
            .any(Intent::requires_role_details)
        {
            Some(RoleDetails {
                sponsorship_tier: parse_option(data, fields::SPONSORSHIP_TIER, &mut errors),
                judge_expertise: optional_text(data, fields::JUDGE_EXPERTISE),
            })
        } else {
            None
        };

        let password: String = data
            .get(fields::PASSWORD)
            .and_then(|value| value.as_text())
            .map(String::from)
            .unwrap_or_default();

        let Some(account) = account else {
            errors.add(fields::ACCOUNT_TYPE, "Account type is required");
            return Err(errors);
        };
        errors.into_result()?;

        Ok(Self {
            account,
            contact,
            intents,
            role_details,
            password,
            referral_code: optional_text(data, fields::REFERRAL_CODE),
            wallet_bonus: data.number(fields::WALLET_BONUS),
            marketing_opt_in: data.flag(fields::MARKETING_OPT_IN),
        })
    }
}
