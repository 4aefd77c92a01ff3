// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup wizard steps and progress bookkeeping.
//!
//! The steps are declared in canonical order. Two of them are conditional:
//! `Organization` applies only to non-individual accounts and `RoleDetails`
//! only when a selected intent needs extra detail. `Complete` is terminal and
//! is reached by submitting, never by navigation.

use crate::form::FormData;
use crate::forms::fields;
use crate::registration::{AccountType, Intent};
use serde::{Deserialize, Serialize};

string_enum! {
    /// A named screen of the signup wizard.
    pub enum Step: "wizard step" {
        /// Choose individual, school, company or nonprofit.
        AccountType => "account_type",
        /// Name, email, phone, country.
        Contact => "contact",
        /// Organization details (non-individual accounts only).
        Organization => "organization",
        /// What the user wants to do in the program.
        Intents => "intents",
        /// Sponsorship tier or judging expertise (only when needed).
        RoleDetails => "role_details",
        /// Password and terms.
        Security => "security",
        /// Final review before submission.
        Review => "review",
        /// Shown after a successful submission.
        Complete => "complete",
    }
}

impl Step {
    /// The navigable steps in canonical order (excludes `Complete`).
    pub const NAVIGABLE: &'static [Self] = &[
        Self::AccountType,
        Self::Contact,
        Self::Organization,
        Self::Intents,
        Self::RoleDetails,
        Self::Security,
        Self::Review,
    ];

    /// The first step of the wizard.
    pub const FIRST: Self = Self::AccountType;

    /// Zero-based position in the canonical order.
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|step| *step == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Returns true if this step is part of the path the given answers select.
    #[must_use]
    pub fn is_on_path(self, data: &FormData) -> bool {
        match self {
            Self::Organization => {
                data.has_value(fields::ACCOUNT_TYPE)
                    && !data.selects(fields::ACCOUNT_TYPE, AccountType::Individual.as_str())
            }
            Self::RoleDetails => Intent::ALL
                .iter()
                .filter(|intent| intent.requires_role_details())
                .any(|intent| data.selects(fields::INTENTS, intent.as_str())),
            Self::Complete => false,
            Self::AccountType | Self::Contact | Self::Intents | Self::Security | Self::Review => {
                true
            }
        }
    }
}

/// Where the user is in the wizard and what they have already done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProgress {
    /// The step currently shown.
    pub current_step: Step,
    /// Steps already passed, each at most once, in the order they were completed.
    pub completed_steps: Vec<Step>,
    /// Number of navigable steps in the canonical order.
    pub total_steps: usize,
    /// Derived from `current_step` and `completed_steps`; see `compute_percentage`.
    pub progress_percentage: u8,
}

impl StepProgress {
    /// Progress at the first step with nothing completed.
    #[must_use]
    pub fn initial() -> Self {
        let mut progress: Self = Self {
            current_step: Step::FIRST,
            completed_steps: Vec::new(),
            total_steps: Step::NAVIGABLE.len(),
            progress_percentage: 0,
        };
        progress.refresh();
        progress
    }

    /// The percentage shown for a position and completion count.
    ///
    /// `Complete` is always 100. Otherwise the larger of the current position
    /// and the number of completed steps, over the total, capped at 100.
    #[must_use]
    pub fn compute_percentage(current: Step, completed: usize, total: usize) -> u8 {
        if current == Step::Complete || total == 0 {
            return 100;
        }
        let done: usize = completed.max(current.position());
        let percent: usize = (done * 100 / total).min(100);
        u8::try_from(percent).unwrap_or(100)
    }

    /// Recomputes `progress_percentage` from the other fields.
    pub fn refresh(&mut self) {
        self.progress_percentage =
            Self::compute_percentage(self.current_step, self.completed_steps.len(), self.total_steps);
    }

    /// Returns true if the step has been completed.
    #[must_use]
    pub fn is_completed(&self, step: Step) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Records a step as completed if it is not already.
    pub fn mark_completed(&mut self, step: Step) {
        if !self.is_completed(step) {
            self.completed_steps.push(step);
        }
    }

    /// Drops every completed step at or after `step` in canonical order.
    pub fn truncate_from(&mut self, step: Step) {
        let limit: usize = step.position();
        self.completed_steps.retain(|done| done.position() < limit);
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::initial()
    }
}
