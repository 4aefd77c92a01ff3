// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_domain::{DomainError, Step};

/// Errors raised by the form store and its ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// Navigation targeted a step the current answers do not select.
    StepNotOnPath(Step),
    /// The snapshot backend could not be read or written.
    SnapshotUnavailable(String),
    /// A stored snapshot could not be decoded.
    CorruptSnapshot(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::StepNotOnPath(step) => {
                write!(f, "Step '{step}' is not on the path for the current answers")
            }
            Self::SnapshotUnavailable(msg) => write!(f, "Snapshot storage unavailable: {msg}"),
            Self::CorruptSnapshot(msg) => write!(f, "Stored snapshot is unreadable: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
