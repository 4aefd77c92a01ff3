// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Nominee Research Corps demo service.
//!
//! Applications, volunteers and nominee profiles live in three separate
//! collections. An operation that touches two of them performs two
//! independent writes; the volunteer side is always written first so a
//! retried review can never create a second volunteer.

use awards_domain::{
    ApiResponse, Application, ApplicationInput, ApplicationStatus, FormData, NomineeInput,
    NomineeProfile, NomineeStatus, NotificationType, NrcStats, ReviewDecision, Volunteer,
    VolunteerStatus,
};
use time::OffsetDateTime;
use tracing::{info, warn};

use super::{LOAD_FAILED, NotificationService, ServiceOptions, invalid_form_message, new_id};
use crate::collections::{
    APPLICATIONS_KEY, NOMINEE_PROFILES_KEY, VOLUNTEERS_KEY, read_collection, write_collection,
};
use crate::error::PersistenceError;
use crate::storage::Storage;

const SAVE_FAILED: &str = "Could not save your changes. Please try again.";

/// Volunteer applications, volunteers and their nominee research.
#[derive(Debug, Clone)]
pub struct NrcService<S: Storage + Clone> {
    storage: S,
    options: ServiceOptions,
    notifications: NotificationService<S>,
}

impl<S: Storage + Clone> NrcService<S> {
    pub fn new(storage: S, options: ServiceOptions) -> Self {
        Self {
            notifications: NotificationService::new(storage.clone(), options),
            storage,
            options,
        }
    }

    fn applications(&self) -> Result<Vec<Application>, PersistenceError> {
        read_collection(&self.storage, APPLICATIONS_KEY)
    }

    fn volunteers(&self) -> Result<Vec<Volunteer>, PersistenceError> {
        read_collection(&self.storage, VOLUNTEERS_KEY)
    }

    fn profiles(&self) -> Result<Vec<NomineeProfile>, PersistenceError> {
        read_collection(&self.storage, NOMINEE_PROFILES_KEY)
    }

    fn save<T: serde::Serialize>(&self, key: &str, items: &[T]) -> Result<(), PersistenceError> {
        write_collection(&self.storage, key, items).inspect_err(|err| {
            warn!(key, error = %err, "Failed to save collection");
        })
    }

    // ========================================================================
    // Applications
    // ========================================================================

    /// Files a volunteer application. Each email may apply once.
    pub async fn submit_application(&self, form: &FormData) -> ApiResponse<Application> {
        self.options.simulate_latency().await;

        let input: ApplicationInput = match ApplicationInput::from_form(form) {
            Ok(input) => input,
            Err(errors) => return ApiResponse::failure(invalid_form_message(&errors)),
        };

        let Ok(mut applications) = self.applications() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        if applications.iter().any(|app| app.email == input.email) {
            return ApiResponse::failure("An application with this email already exists");
        }

        let application: Application =
            Application::new(new_id(), input, OffsetDateTime::now_utc());
        applications.push(application.clone());
        if self.save(APPLICATIONS_KEY, &applications).is_err() {
            return ApiResponse::failure(SAVE_FAILED);
        }

        self.notifications.push(
            &application.email,
            NotificationType::ApplicationSubmitted,
            "Application received",
            &format!(
                "Thanks, {}! We will review your application shortly.",
                application.first_name
            ),
        );
        info!(id = %application.id, "NRC application submitted");
        ApiResponse::ok(application, "Application submitted successfully")
    }

    /// Applications, newest first, optionally limited to one status.
    pub async fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> ApiResponse<Vec<Application>> {
        self.options.simulate_latency().await;
        let Ok(applications) = self.applications() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let mut applications: Vec<Application> = applications
            .into_iter()
            .filter(|app| status.is_none_or(|status| app.status == status))
            .collect();
        applications.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        let count: usize = applications.len();
        ApiResponse::ok(applications, format!("{count} application(s)"))
    }

    pub async fn get_application(&self, id: &str) -> ApiResponse<Application> {
        self.options.simulate_latency().await;
        let Ok(applications) = self.applications() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        applications
            .into_iter()
            .find(|app| app.id == id)
            .map_or_else(
                || ApiResponse::failure("Application not found"),
                |app| ApiResponse::ok(app, "Application found"),
            )
    }

    /// Approves or rejects a pending application.
    ///
    /// Approval creates the applicant's volunteer record.
    pub async fn review_application(
        &self,
        id: &str,
        decision: ReviewDecision,
        reviewer: &str,
        notes: Option<String>,
    ) -> ApiResponse<Application> {
        self.options.simulate_latency().await;

        let Ok(mut applications) = self.applications() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let Some(application) = applications.iter_mut().find(|app| app.id == id) else {
            return ApiResponse::failure("Application not found");
        };
        let now: OffsetDateTime = OffsetDateTime::now_utc();
        if let Err(err) = application.review(decision, reviewer, notes, now) {
            return ApiResponse::failure(err.to_string());
        }
        let reviewed: Application = application.clone();

        if decision == ReviewDecision::Approve {
            let Ok(mut volunteers) = self.volunteers() else {
                return ApiResponse::failure(LOAD_FAILED);
            };
            if !volunteers.iter().any(|v| v.application_id == reviewed.id) {
                volunteers.push(Volunteer::from_application(new_id(), &reviewed, now));
                if self.save(VOLUNTEERS_KEY, &volunteers).is_err() {
                    return ApiResponse::failure(SAVE_FAILED);
                }
            }
        }
        if self.save(APPLICATIONS_KEY, &applications).is_err() {
            return ApiResponse::failure(SAVE_FAILED);
        }

        let (notification_type, title, message, reply): (NotificationType, &str, String, &str) =
            match decision {
                ReviewDecision::Approve => (
                    NotificationType::ApplicationApproved,
                    "Welcome to the Nominee Research Corps",
                    format!(
                        "Congratulations, {}! Your application has been approved.",
                        reviewed.first_name
                    ),
                    "Application approved",
                ),
                ReviewDecision::Reject => (
                    NotificationType::ApplicationRejected,
                    "Application update",
                    String::from("Thank you for applying. We are unable to accept your application at this time."),
                    "Application rejected",
                ),
            };
        self.notifications
            .push(&reviewed.email, notification_type, title, &message);
        info!(id = %reviewed.id, status = %reviewed.status, reviewer, "NRC application reviewed");
        ApiResponse::ok(reviewed, reply)
    }

    // ========================================================================
    // Volunteers
    // ========================================================================

    pub async fn list_volunteers(&self) -> ApiResponse<Vec<Volunteer>> {
        self.options.simulate_latency().await;
        let Ok(volunteers) = self.volunteers() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let count: usize = volunteers.len();
        ApiResponse::ok(volunteers, format!("{count} volunteer(s)"))
    }

    pub async fn get_volunteer_by_email(&self, email: &str) -> ApiResponse<Volunteer> {
        self.options.simulate_latency().await;
        let email: String = email.trim().to_lowercase();
        let Ok(volunteers) = self.volunteers() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        volunteers
            .into_iter()
            .find(|v| v.email == email)
            .map_or_else(
                || ApiResponse::failure("Volunteer not found"),
                |v| ApiResponse::ok(v, "Volunteer found"),
            )
    }

    // ========================================================================
    // Nominee profiles
    // ========================================================================

    /// Saves a new draft nominee profile for an active volunteer.
    pub async fn save_nominee_draft(
        &self,
        volunteer_id: &str,
        form: &FormData,
    ) -> ApiResponse<NomineeProfile> {
        self.options.simulate_latency().await;

        let Ok(volunteers) = self.volunteers() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        match volunteers.iter().find(|v| v.id == volunteer_id) {
            None => return ApiResponse::failure("Volunteer not found"),
            Some(v) if v.status != VolunteerStatus::Active => {
                return ApiResponse::failure("Volunteer is not active");
            }
            Some(_) => {}
        }

        let input: NomineeInput = match NomineeInput::from_form(form) {
            Ok(input) => input,
            Err(errors) => return ApiResponse::failure(invalid_form_message(&errors)),
        };

        let profile: NomineeProfile = NomineeProfile::draft(
            new_id(),
            volunteer_id.to_string(),
            input,
            OffsetDateTime::now_utc(),
        );
        let Ok(mut profiles) = self.profiles() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        profiles.push(profile.clone());
        if self.save(NOMINEE_PROFILES_KEY, &profiles).is_err() {
            return ApiResponse::failure(SAVE_FAILED);
        }
        ApiResponse::ok(profile, "Nominee draft saved")
    }

    /// Submits a draft profile and credits the volunteer.
    pub async fn submit_nominee_profile(&self, profile_id: &str) -> ApiResponse<NomineeProfile> {
        self.options.simulate_latency().await;

        let Ok(mut profiles) = self.profiles() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let Some(profile) = profiles.iter_mut().find(|p| p.id == profile_id) else {
            return ApiResponse::failure("Nominee profile not found");
        };
        if let Err(err) = profile.transition(NomineeStatus::Submitted, OffsetDateTime::now_utc()) {
            return ApiResponse::failure(err.to_string());
        }
        let submitted: NomineeProfile = profile.clone();

        let Ok(mut volunteers) = self.volunteers() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let Some(volunteer) = volunteers
            .iter_mut()
            .find(|v| v.id == submitted.volunteer_id)
        else {
            return ApiResponse::failure("Volunteer not found");
        };
        volunteer.record_submission();
        let volunteer: Volunteer = volunteer.clone();

        if self.save(NOMINEE_PROFILES_KEY, &profiles).is_err()
            || self.save(VOLUNTEERS_KEY, &volunteers).is_err()
        {
            return ApiResponse::failure(SAVE_FAILED);
        }

        self.notifications.push(
            &volunteer.email,
            NotificationType::NomineeSubmitted,
            "Nominee submitted",
            &format!(
                "{} has been submitted for review ({} of {}).",
                submitted.nominee_name, volunteer.nominees_uploaded, volunteer.target_nominees
            ),
        );
        info!(
            id = %submitted.id,
            volunteer = %volunteer.id,
            uploaded = volunteer.nominees_uploaded,
            "Nominee profile submitted"
        );
        ApiResponse::ok(submitted, "Nominee profile submitted")
    }

    /// Approves or rejects a submitted profile.
    pub async fn review_nominee_profile(
        &self,
        profile_id: &str,
        decision: ReviewDecision,
        notes: Option<String>,
    ) -> ApiResponse<NomineeProfile> {
        self.options.simulate_latency().await;

        let Ok(mut profiles) = self.profiles() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let Some(profile) = profiles.iter_mut().find(|p| p.id == profile_id) else {
            return ApiResponse::failure("Nominee profile not found");
        };
        if let Err(err) = profile.transition(decision.nominee_status(), OffsetDateTime::now_utc()) {
            return ApiResponse::failure(err.to_string());
        }
        profile.review_notes = notes;
        let reviewed: NomineeProfile = profile.clone();
        if self.save(NOMINEE_PROFILES_KEY, &profiles).is_err() {
            return ApiResponse::failure(SAVE_FAILED);
        }

        if let Some(volunteer) = self
            .volunteers()
            .unwrap_or_default()
            .into_iter()
            .find(|v| v.id == reviewed.volunteer_id)
        {
            let (notification_type, verdict): (NotificationType, &str) = match decision {
                ReviewDecision::Approve => (NotificationType::NomineeApproved, "approved"),
                ReviewDecision::Reject => (NotificationType::NomineeRejected, "not approved"),
            };
            self.notifications.push(
                &volunteer.email,
                notification_type,
                "Nominee reviewed",
                &format!("{} was {verdict}.", reviewed.nominee_name),
            );
        }
        ApiResponse::ok(reviewed, format!("Nominee profile {}", decision.nominee_status()))
    }

    /// Profiles, optionally limited to one volunteer.
    pub async fn list_nominee_profiles(
        &self,
        volunteer_id: Option<&str>,
    ) -> ApiResponse<Vec<NomineeProfile>> {
        self.options.simulate_latency().await;
        let Ok(profiles) = self.profiles() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let profiles: Vec<NomineeProfile> = profiles
            .into_iter()
            .filter(|p| volunteer_id.is_none_or(|id| p.volunteer_id == id))
            .collect();
        let count: usize = profiles.len();
        ApiResponse::ok(profiles, format!("{count} nominee profile(s)"))
    }

    /// Aggregate counts across the three collections.
    pub async fn stats(&self) -> ApiResponse<NrcStats> {
        self.options.simulate_latency().await;
        let (Ok(applications), Ok(volunteers), Ok(profiles)) =
            (self.applications(), self.volunteers(), self.profiles())
        else {
            return ApiResponse::failure(LOAD_FAILED);
        };

        let count_apps = |status: ApplicationStatus| {
            applications.iter().filter(|a| a.status == status).count()
        };
        let count_profiles =
            |status: NomineeStatus| profiles.iter().filter(|p| p.status == status).count();

        let stats: NrcStats = NrcStats {
            total_applications: applications.len(),
            pending_applications: count_apps(ApplicationStatus::Pending),
            approved_applications: count_apps(ApplicationStatus::Approved),
            rejected_applications: count_apps(ApplicationStatus::Rejected),
            active_volunteers: volunteers
                .iter()
                .filter(|v| v.status == VolunteerStatus::Active)
                .count(),
            nominee_profiles: profiles.len(),
            submitted_profiles: count_profiles(NomineeStatus::Submitted),
            approved_profiles: count_profiles(NomineeStatus::Approved),
        };
        ApiResponse::ok(stats, "NRC statistics")
    }
}
