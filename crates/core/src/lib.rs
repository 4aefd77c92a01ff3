// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Signup wizard state for the Awards Portal.
//!
//! The sequencer decides which step follows which; the form store holds the
//! answers and progress, persists them through a `SnapshotStore`, and hands a
//! validated `Registration` to a `RegistrationSink` on submit. Storage and
//! HTTP live behind those two ports.

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

mod error;
mod sequencer;
mod store;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use sequencer::{active_path, next_step, previous_step};
pub use store::{
    FormStore, REQUIRED_FOR_SUBMIT, RegistrationSink, Snapshot, SnapshotStore, SubmitFailure,
    SubmitOutcome, SubmitReceipt, UiEffect,
};
