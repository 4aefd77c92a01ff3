// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The demo's commands. Each returns the text to print.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use awards::{FormStore, RegistrationSink, SubmitFailure, SubmitOutcome, SubmitReceipt};
use awards_api::{
    ExportFile, ExportFilter, ExportFormat, Exportable, JudgeApplication, RegistrationClient,
    export,
};
use awards_domain::{
    ApiResponse, Application, FormData, NomineeProfile, NotificationType, Registration,
    ReviewDecision, Volunteer, WaitlistEntry, WaitlistInput,
};
use awards_persistence::{
    APPLICATIONS_KEY, NOMINEE_PROFILES_KEY, NotificationService, SnapshotRepository, Storage,
    VOLUNTEERS_KEY, WAITLIST_KEY, read_collection,
};
use tracing::{info, warn};

use crate::config::{Context, LocalStorage};
use crate::error::CliError;

/// Unwraps a successful service response, turning a failure into an error.
fn accepted<T>(response: ApiResponse<T>) -> Result<(T, String), CliError> {
    let message: String = response.message_or_default().to_string();
    match response {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok((data, message)),
        _ => Err(CliError::Rejected(message)),
    }
}

// ============================================================================
// Signup
// ============================================================================

/// Accepts every registration locally and leaves a welcome notification.
struct LocalRegistrations<S: Storage> {
    notifications: NotificationService<S>,
}

impl<S: Storage> RegistrationSink for LocalRegistrations<S> {
    async fn register(&self, registration: &Registration) -> Result<SubmitReceipt, SubmitFailure> {
        let response: ApiResponse<_> = self
            .notifications
            .notify(
                &registration.contact.email,
                NotificationType::System,
                "Welcome to the Awards Portal",
                "Your account is ready. You can now vote, nominate and follow the awards.",
            )
            .await;
        if response.success {
            Ok(SubmitReceipt {
                message: Some(String::from("Registration received")),
            })
        } else {
            Err(SubmitFailure {
                message: response.message_or_default().to_string(),
            })
        }
    }
}

/// Walks the signup wizard over `answers` and submits it.
///
/// A snapshot left by an earlier run is resumed unless `reset` is set.
///
/// # Errors
///
/// Returns the first step's validation errors, or the submission failure.
pub async fn signup(ctx: &Context, answers: FormData, reset: bool) -> Result<String, CliError> {
    let snapshots: SnapshotRepository<LocalStorage> = SnapshotRepository::new(Arc::clone(&ctx.storage));
    let mut store: FormStore<SnapshotRepository<LocalStorage>> = FormStore::open(snapshots);
    if reset {
        store.reset();
    }
    store.update_form_data(answers);

    while store.advance_validated()? {}
    info!(step = %store.current_step(), progress = store.progress().progress_percentage, "Wizard walked");

    let judge: Option<JudgeApplication> = Registration::from_form(store.form_data())
        .ok()
        .as_ref()
        .and_then(JudgeApplication::from_registration);

    let outcome: SubmitOutcome = if ctx.flags.mock_backend {
        let sink: LocalRegistrations<LocalStorage> = LocalRegistrations {
            notifications: ctx.notifications(),
        };
        store.submit(&sink).await
    } else {
        let sink: RegistrationClient = RegistrationClient::new(ctx.submission_client()?);
        let outcome: SubmitOutcome = store.submit(&sink).await;
        if let (true, Some(application)) = (outcome.is_success(), judge.as_ref()) {
            match sink.client().apply_as_judge(application).await {
                Ok(_) => info!("Judge application sent"),
                Err(err) => warn!(error = %err, "Judge application was not accepted"),
            }
        }
        outcome
    };

    match outcome {
        SubmitOutcome::Submitted(receipt) => Ok(receipt
            .message
            .unwrap_or_else(|| String::from("Registration submitted"))),
        SubmitOutcome::Incomplete { errors, .. } => Err(CliError::Invalid(errors)),
        SubmitOutcome::Failed { message } => Err(CliError::Rejected(message)),
    }
}

// ============================================================================
// Waitlist
// ============================================================================

/// Adds a waitlist signup, locally or through the backend.
///
/// # Errors
///
/// Returns an error if the waitlist is disabled or the signup is refused.
pub async fn join_waitlist(ctx: &Context, form: FormData) -> Result<String, CliError> {
    let waitlist = ctx.waitlist()?;
    if ctx.flags.mock_backend {
        let (entry, message): (WaitlistEntry, String) = accepted(waitlist.join(&form).await)?;
        return Ok(format!("{message} ({})", entry.email));
    }
    let input: WaitlistInput = WaitlistInput::from_form(&form)?;
    let response: ApiResponse<serde_json::Value> =
        ctx.submission_client()?.join_waitlist(&input).await?;
    Ok(response
        .message
        .unwrap_or_else(|| String::from("You have joined the waitlist")))
}

// ============================================================================
// Nominee Research Corps
// ============================================================================

/// Files a volunteer application.
///
/// # Errors
///
/// Returns an error if the NRC is disabled or the application is refused.
pub async fn apply(ctx: &Context, form: FormData) -> Result<String, CliError> {
    let (application, message): (Application, String) =
        accepted(ctx.nrc()?.submit_application(&form).await)?;
    Ok(format!("{message}: {}", application.id))
}

/// Approves or rejects an application.
///
/// # Errors
///
/// Returns an error if the NRC is disabled or the review is refused.
pub async fn review(
    ctx: &Context,
    id: &str,
    decision: ReviewDecision,
    reviewer: &str,
    notes: Option<String>,
) -> Result<String, CliError> {
    let (application, message): (Application, String) =
        accepted(ctx.nrc()?.review_application(id, decision, reviewer, notes).await)?;
    Ok(format!("{message}: {} is {}", application.full_name(), application.status))
}

/// Saves a nominee profile for the volunteer with `email`, optionally submitting it.
///
/// # Errors
///
/// Returns an error if the NRC is disabled or any step is refused.
pub async fn research_nominee(
    ctx: &Context,
    email: &str,
    form: FormData,
    submit: bool,
) -> Result<String, CliError> {
    let nrc = ctx.nrc()?;
    let (volunteer, _): (Volunteer, String) = accepted(nrc.get_volunteer_by_email(email).await)?;
    let (draft, message): (NomineeProfile, String) =
        accepted(nrc.save_nominee_draft(&volunteer.id, &form).await)?;
    if !submit {
        return Ok(format!("{message}: {}", draft.id));
    }
    let (profile, message): (NomineeProfile, String) =
        accepted(nrc.submit_nominee_profile(&draft.id).await)?;
    Ok(format!("{message}: {} ({})", profile.nominee_name, profile.id))
}

/// Summarizes the NRC dashboard counts.
///
/// # Errors
///
/// Returns an error if the NRC is disabled.
pub async fn stats(ctx: &Context) -> Result<String, CliError> {
    let (stats, _) = accepted(ctx.nrc()?.stats().await)?;
    Ok(serde_json::to_string_pretty(&stats)?)
}

// ============================================================================
// Notifications
// ============================================================================

/// Lists a user's notifications, newest first.
///
/// # Errors
///
/// Returns an error if the notifications cannot be listed.
pub async fn notifications(ctx: &Context, email: &str, mark_read: bool) -> Result<String, CliError> {
    let service: NotificationService<LocalStorage> = ctx.notifications();
    let (items, _) = accepted(service.list_for_user(email).await)?;

    let mut out: String = String::new();
    for item in &items {
        let marker: &str = if item.read { " " } else { "*" };
        let _ = writeln!(out, "{marker} [{}] {}: {}", item.notification_type, item.title, item.message);
    }
    if mark_read {
        let (count, _) = accepted(service.mark_all_read(email).await)?;
        let _ = writeln!(out, "Marked {count} as read");
    }
    if items.is_empty() {
        out.push_str("No notifications\n");
    }
    Ok(out)
}

// ============================================================================
// Export
// ============================================================================

/// The stored collections that can be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportEntity {
    Applications,
    Volunteers,
    NomineeProfiles,
    Waitlist,
}

fn export_collection<T>(
    ctx: &Context,
    key: &str,
    filter: &ExportFilter,
    format: ExportFormat,
) -> Result<ExportFile, CliError>
where
    T: Exportable + serde::de::DeserializeOwned,
{
    let items: Vec<T> = read_collection(&ctx.storage, key)?;
    Ok(export(&items, filter, format, ctx.today)?)
}

/// Exports a collection into `dir` and returns the written path.
///
/// # Errors
///
/// Returns an error if the export cannot be produced or written.
pub fn export_to_dir(
    ctx: &Context,
    entity: ExportEntity,
    filter: &ExportFilter,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, CliError> {
    let file: ExportFile = match entity {
        ExportEntity::Applications => {
            export_collection::<Application>(ctx, APPLICATIONS_KEY, filter, format)?
        }
        ExportEntity::Volunteers => export_collection::<Volunteer>(ctx, VOLUNTEERS_KEY, filter, format)?,
        ExportEntity::NomineeProfiles => {
            export_collection::<NomineeProfile>(ctx, NOMINEE_PROFILES_KEY, filter, format)?
        }
        ExportEntity::Waitlist => export_collection::<WaitlistEntry>(ctx, WAITLIST_KEY, filter, format)?,
    };
    let path: PathBuf = dir.join(&file.filename);
    std::fs::write(&path, file.content.as_bytes())?;
    info!(path = %path.display(), mime_type = file.mime_type, "Export written");
    Ok(path)
}
