// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound boundary of the Awards Portal.
//!
//! `SubmissionClient` carries completed forms to the participation backend
//! with a per-attempt timeout and a retry policy for transient failures.
//! `RegistrationClient` plugs it into the wizard's submit step. The export
//! module turns locally stored records into CSV or JSON files.

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
#![allow(clippy::multiple_crate_versions)]

mod client;
mod error;
pub mod export;
mod retry;
mod submissions;
mod token;

#[cfg(test)]
mod tests;

pub use client::{ClientConfig, DEFAULT_TIMEOUT, SubmissionClient};
pub use error::ClientError;
pub use export::{DateRange, ExportError, ExportFile, ExportFilter, ExportFormat, Exportable, export};
pub use retry::RetryPolicy;
pub use submissions::{
    JUDGE_APPLICATIONS_PATH, JudgeApplication, NOMINATIONS_PATH, REGISTER_PATH, RegistrationClient,
    SPONSOR_INQUIRIES_PATH, WAITLIST_PATH,
};
pub use token::{StaticToken, StoredToken, TokenSource};
