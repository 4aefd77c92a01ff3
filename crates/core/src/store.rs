// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The signup wizard's form state.
//!
//! `FormStore` owns the answers collected so far, the progress metadata and
//! the history of visited steps. Every committed change is written through a
//! `SnapshotStore` so a reload can pick up where the user left off. Snapshot
//! I/O is best-effort: failures are logged and never surface to the caller.

use std::future::Future;

use awards_domain::{
    FieldValue, FormData, Registration, Step, StepProgress, ValidationErrors, fields,
};
use awards_domain::forms::signup_step_schema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::sequencer::{active_path, next_step, previous_step};

/// Fields that must be present before a submission is attempted at all.
pub const REQUIRED_FOR_SUBMIT: &[&str] = &[
    fields::ACCOUNT_TYPE,
    fields::EMAIL,
    fields::FIRST_NAME,
    fields::LAST_NAME,
    fields::PASSWORD,
];

/// Durable storage for a single serialized snapshot.
pub trait SnapshotStore {
    /// Reads the stored snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self) -> Result<Option<String>, CoreError>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&self, contents: &str) -> Result<(), CoreError>;

    /// Removes the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn clear(&self) -> Result<(), CoreError>;
}

/// The persisted shape of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub form_data: FormData,
    pub step_progress: StepProgress,
    /// Older snapshots carry no history; back navigation then falls back to
    /// the sequencer.
    #[serde(default)]
    pub history: Vec<Step>,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Snapshot {
    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::SnapshotUnavailable(e.to_string()))
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CorruptSnapshot` if the text is not a valid snapshot.
    pub fn from_json(contents: &str) -> Result<Self, CoreError> {
        serde_json::from_str(contents).map_err(|e| CoreError::CorruptSnapshot(e.to_string()))
    }
}

/// Side effects the presentation layer should run after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    ScrollToTop,
}

/// What the backend said about an accepted registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: Option<String>,
}

/// A rejected or failed registration, already phrased for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure {
    pub message: String,
}

/// Where validated registrations are sent.
pub trait RegistrationSink {
    /// Delivers a registration.
    ///
    /// # Errors
    ///
    /// Returns a user-facing failure if the registration was not accepted.
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<SubmitReceipt, SubmitFailure>> + Send;
}

/// The result of `FormStore::submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; the wizard is now on `Step::Complete`.
    Submitted(SubmitReceipt),
    /// Not sent because the answers are incomplete or invalid.
    Incomplete {
        message: String,
        errors: ValidationErrors,
    },
    /// Sent but not accepted.
    Failed { message: String },
}

impl SubmitOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }

    /// The message to show the user, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Submitted(receipt) => receipt.message.as_deref(),
            Self::Incomplete { message, .. } | Self::Failed { message } => Some(message),
        }
    }
}

/// In-memory wizard state backed by a snapshot store.
#[derive(Debug)]
pub struct FormStore<P: SnapshotStore> {
    snapshots: P,
    form_data: FormData,
    progress: StepProgress,
    history: Vec<Step>,
    last_error: Option<String>,
    effects: Vec<UiEffect>,
}

impl<P: SnapshotStore> FormStore<P> {
    /// Creates a store in the initial state without reading the snapshot.
    pub fn new(snapshots: P) -> Self {
        Self {
            snapshots,
            form_data: FormData::new(),
            progress: StepProgress::initial(),
            history: Vec::new(),
            last_error: None,
            effects: Vec::new(),
        }
    }

    /// Creates a store and restores the latest snapshot, if one is readable.
    pub fn open(snapshots: P) -> Self {
        let mut store: Self = Self::new(snapshots);
        store.restore();
        store
    }

    #[must_use]
    pub const fn form_data(&self) -> &FormData {
        &self.form_data
    }

    #[must_use]
    pub const fn progress(&self) -> &StepProgress {
        &self.progress
    }

    #[must_use]
    pub const fn current_step(&self) -> Step {
        self.progress.current_step
    }

    /// Steps visited on the way to the current one, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub const fn snapshot_store(&self) -> &P {
        &self.snapshots
    }

    /// The steps the current answers select.
    #[must_use]
    pub fn active_path(&self) -> Vec<Step> {
        active_path(&self.form_data)
    }

    /// Shallow-merges `partial` into the answers.
    pub fn update_form_data(&mut self, partial: FormData) {
        self.form_data.merge(partial);
        self.last_error = None;
        self.persist();
    }

    /// Sets a single answer.
    pub fn set_field(&mut self, field: &str, value: impl Into<FieldValue>) {
        let mut partial: FormData = FormData::new();
        partial.set(field, value);
        self.update_form_data(partial);
    }

    /// Moves to the next step on the path.
    ///
    /// Returns false, leaving everything untouched, if there is no next step.
    pub fn advance(&mut self) -> bool {
        let current: Step = self.progress.current_step;
        let Some(next) = next_step(current, &self.form_data) else {
            debug!(step = %current, "No next step; advance ignored");
            return false;
        };

        self.progress.mark_completed(current);
        self.history.push(current);
        self.progress.current_step = next;
        self.progress.refresh();
        self.effects.push(UiEffect::ScrollToTop);
        debug!(from = %current, to = %next, "Advanced");
        self.persist();
        true
    }

    /// Validates the current step and advances only if it passes.
    ///
    /// # Errors
    ///
    /// Returns the current step's field errors; the state is unchanged.
    pub fn advance_validated(&mut self) -> Result<bool, ValidationErrors> {
        let errors: ValidationErrors =
            signup_step_schema(self.progress.current_step).validate(&self.form_data);
        errors.into_result()?;
        Ok(self.advance())
    }

    /// Moves back to the step visited before the current one.
    ///
    /// The step being left, and anything completed after it, is no longer
    /// completed. The step returned to keeps its completion. Returns false if
    /// there is nowhere to go back to.
    pub fn retreat(&mut self) -> bool {
        let current: Step = self.progress.current_step;
        if current == Step::Complete {
            return false;
        }
        let target: Option<Step> = self
            .history
            .pop()
            .or_else(|| previous_step(current, &self.form_data));
        let Some(target) = target else {
            debug!(step = %current, "No previous step; retreat ignored");
            return false;
        };

        self.progress.truncate_from(current);
        self.progress.current_step = target;
        self.progress.refresh();
        self.effects.push(UiEffect::ScrollToTop);
        debug!(from = %current, to = %target, "Retreated");
        self.persist();
        true
    }

    /// Jumps directly to a step on the active path.
    ///
    /// Every earlier step on the path counts as completed. Steps already
    /// completed stay completed, even when jumping backwards.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StepNotOnPath` if the answers do not select `step`.
    pub fn go_to(&mut self, step: Step) -> Result<(), CoreError> {
        let path: Vec<Step> = self.active_path();
        let Some(index) = path.iter().position(|candidate| *candidate == step) else {
            return Err(CoreError::StepNotOnPath(step));
        };

        let before: &[Step] = &path[..index];
        for done in before {
            self.progress.mark_completed(*done);
        }
        self.progress.current_step = step;
        self.progress.refresh();
        self.history = before.to_vec();
        self.effects.push(UiEffect::ScrollToTop);
        debug!(to = %step, "Jumped");
        self.persist();
        Ok(())
    }

    /// The current state as a snapshot stamped now.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            form_data: self.form_data.clone(),
            step_progress: self.progress.clone(),
            history: self.history.clone(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Writes the current state to the snapshot store.
    ///
    /// A completed wizard is never written.
    pub fn persist(&self) {
        if self.progress.current_step == Step::Complete {
            debug!("Wizard is complete; snapshot not written");
            return;
        }
        let result: Result<(), CoreError> = self
            .snapshot()
            .to_json()
            .and_then(|json| self.snapshots.write(&json));
        if let Err(err) = result {
            warn!(error = %err, "Failed to persist wizard snapshot");
        }
    }

    /// Replaces the in-memory state with the stored snapshot.
    ///
    /// Returns true if a snapshot was applied. An unreadable snapshot is
    /// removed and the current state is kept.
    pub fn restore(&mut self) -> bool {
        let contents: Option<String> = match self.snapshots.read() {
            Ok(contents) => contents,
            Err(err) => {
                warn!(error = %err, "Failed to read wizard snapshot");
                return false;
            }
        };
        let Some(contents) = contents else {
            return false;
        };

        let snapshot: Snapshot = match Snapshot::from_json(&contents) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "Discarding wizard snapshot");
                if let Err(err) = self.snapshots.clear() {
                    warn!(error = %err, "Failed to remove wizard snapshot");
                }
                return false;
            }
        };

        self.form_data = snapshot.form_data;
        self.progress = snapshot.step_progress;
        self.progress.total_steps = Step::NAVIGABLE.len();
        self.progress.refresh();
        self.history = snapshot.history;
        self.last_error = None;
        info!(
            step = %self.progress.current_step,
            saved_at = %snapshot.timestamp,
            "Restored wizard snapshot"
        );
        true
    }

    /// Returns to the initial state and removes the stored snapshot.
    pub fn reset(&mut self) {
        self.form_data = FormData::new();
        self.progress = StepProgress::initial();
        self.history.clear();
        self.last_error = None;
        self.effects.clear();
        if let Err(err) = self.snapshots.clear() {
            warn!(error = %err, "Failed to remove wizard snapshot");
        }
    }

    /// Clears the stored error message.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Drains the queued presentation effects.
    pub fn take_effects(&mut self) -> Vec<UiEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Validates the answers and hands the registration to `sink`.
    ///
    /// Never fails: problems are recorded in `last_error` and reported in the
    /// outcome. The answers and progress are kept unless the sink accepts the
    /// registration, in which case the answers and the snapshot are removed
    /// and the wizard moves to `Step::Complete`.
    pub async fn submit<S: RegistrationSink>(&mut self, sink: &S) -> SubmitOutcome {
        if self.progress.current_step == Step::Complete {
            let message: String = String::from("This registration has already been submitted");
            self.last_error = Some(message.clone());
            return SubmitOutcome::Failed { message };
        }

        let mut missing: ValidationErrors = ValidationErrors::new();
        for field in REQUIRED_FOR_SUBMIT {
            if !self.form_data.has_value(field) {
                missing.add(field, format!("{field} is required"));
            }
        }
        if !missing.is_empty() {
            let message: String = format!(
                "Please complete all required fields: {}",
                missing.fields().join(", ")
            );
            warn!(fields = ?missing.fields(), "Submission blocked by missing fields");
            self.last_error = Some(message.clone());
            return SubmitOutcome::Incomplete {
                message,
                errors: missing,
            };
        }

        let registration: Registration = match Registration::from_form(&self.form_data) {
            Ok(registration) => registration,
            Err(errors) => {
                let message: String = errors.to_string();
                warn!(fields = ?errors.fields(), "Submission blocked by invalid answers");
                self.last_error = Some(message.clone());
                return SubmitOutcome::Incomplete { message, errors };
            }
        };

        match sink.register(&registration).await {
            Ok(receipt) => {
                let current: Step = self.progress.current_step;
                self.progress.mark_completed(current);
                self.progress.current_step = Step::Complete;
                self.progress.refresh();
                self.form_data = FormData::new();
                self.history.clear();
                self.last_error = None;
                self.effects.push(UiEffect::ScrollToTop);
                if let Err(err) = self.snapshots.clear() {
                    warn!(error = %err, "Failed to remove wizard snapshot");
                }
                info!(
                    account_type = %registration.account.account_type(),
                    "Registration submitted"
                );
                SubmitOutcome::Submitted(receipt)
            }
            Err(failure) => {
                warn!(message = %failure.message, "Registration rejected");
                self.last_error = Some(failure.message.clone());
                SubmitOutcome::Failed {
                    message: failure.message,
                }
            }
        }
    }
}
