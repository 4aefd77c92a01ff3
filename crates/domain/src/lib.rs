// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the Awards Portal.
//!
//! Form data and its validation rules, the signup wizard's steps, the typed
//! payloads sent to the backend, and the participation entities kept by the
//! local demo services. Everything here is pure: no I/O, no clocks.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

#[macro_use]
mod macros;

mod error;
mod form;
pub mod forms;
mod nomination;
mod notification;
mod nrc;
mod registration;
mod response;
mod schema;
mod waitlist;
mod wizard;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use form::{FieldValue, FileRef, FormData};
pub use forms::fields;
pub use nomination::{AwardCategory, Nomination, SponsorTier, SponsorshipInquiry};
pub use notification::{Notification, NotificationType};
pub use nrc::{
    Application, ApplicationInput, ApplicationStatus, DEFAULT_TARGET_NOMINEES,
    HOURS_PER_WEEK_OPTIONS, NomineeInput, NomineeProfile, NomineeStatus, NrcStats,
    ReviewDecision, Volunteer, VolunteerStatus,
};
pub use registration::{Account, AccountType, Contact, Intent, Organization, Registration, RoleDetails};
pub use response::ApiResponse;
pub use schema::{CrossRule, FieldSchema, PatternKind, Rule, Schema, ValidationErrors};
pub use waitlist::{WaitlistCategory, WaitlistEntry, WaitlistInput};
pub use wizard::{Step, StepProgress};
