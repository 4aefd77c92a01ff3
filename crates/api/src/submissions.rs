// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed calls for each backend form endpoint.

use awards::{RegistrationSink, SubmitFailure, SubmitReceipt};
use awards_domain::{
    ApiResponse, Contact, Intent, Nomination, Registration, SponsorshipInquiry, WaitlistInput,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::client::SubmissionClient;
use crate::error::ClientError;

pub const REGISTER_PATH: &str = "/auth/register";
pub const WAITLIST_PATH: &str = "/waitlist";
pub const NOMINATIONS_PATH: &str = "/nominations";
pub const SPONSOR_INQUIRIES_PATH: &str = "/sponsors/inquiries";
pub const JUDGE_APPLICATIONS_PATH: &str = "/judges/applications";

/// A request to join a judging panel, derived from a registration that
/// selected the judge intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeApplication {
    pub contact: Contact,
    pub expertise: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl JudgeApplication {
    /// Returns `None` unless the registration chose to judge and described
    /// its expertise.
    #[must_use]
    pub fn from_registration(registration: &Registration) -> Option<Self> {
        if !registration.intents.contains(&Intent::Judge) {
            return None;
        }
        let expertise: String = registration
            .role_details
            .as_ref()?
            .judge_expertise
            .clone()?;
        Some(Self {
            contact: registration.contact.clone(),
            expertise,
            organization: registration
                .account
                .organization()
                .map(|organization| organization.name.clone()),
        })
    }
}

impl SubmissionClient {
    /// # Errors
    ///
    /// Returns the client error if the backend did not accept the signup.
    pub async fn register(&self, registration: &Registration) -> Result<ApiResponse<Value>, ClientError> {
        self.post_json(REGISTER_PATH, registration).await
    }

    /// # Errors
    ///
    /// Returns the client error if the backend did not accept the signup.
    pub async fn join_waitlist(&self, input: &WaitlistInput) -> Result<ApiResponse<Value>, ClientError> {
        self.post_json(WAITLIST_PATH, input).await
    }

    /// # Errors
    ///
    /// Returns the client error if the backend did not accept the nomination.
    pub async fn nominate(&self, nomination: &Nomination) -> Result<ApiResponse<Value>, ClientError> {
        self.post_json(NOMINATIONS_PATH, nomination).await
    }

    /// # Errors
    ///
    /// Returns the client error if the backend did not accept the inquiry.
    pub async fn send_sponsorship_inquiry(
        &self,
        inquiry: &SponsorshipInquiry,
    ) -> Result<ApiResponse<Value>, ClientError> {
        self.post_json(SPONSOR_INQUIRIES_PATH, inquiry).await
    }

    /// # Errors
    ///
    /// Returns the client error if the backend did not accept the application.
    pub async fn apply_as_judge(
        &self,
        application: &JudgeApplication,
    ) -> Result<ApiResponse<Value>, ClientError> {
        self.post_json(JUDGE_APPLICATIONS_PATH, application).await
    }
}

/// Delivers wizard registrations through the backend client.
#[derive(Debug)]
pub struct RegistrationClient {
    client: SubmissionClient,
}

impl RegistrationClient {
    #[must_use]
    pub const fn new(client: SubmissionClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub const fn client(&self) -> &SubmissionClient {
        &self.client
    }
}

impl RegistrationSink for RegistrationClient {
    async fn register(&self, registration: &Registration) -> Result<SubmitReceipt, SubmitFailure> {
        match self.client.register(registration).await {
            Ok(response) => {
                info!(email = %registration.contact.email, "Registration accepted");
                Ok(SubmitReceipt {
                    message: response.message,
                })
            }
            Err(err) => Err(SubmitFailure {
                message: err.user_message(),
            }),
        }
    }
}
