// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_api::{ClientError, ExportError};
use awards_domain::ValidationErrors;
use awards_persistence::PersistenceError;

/// Errors reported by the demo commands.
#[derive(Debug)]
pub enum CliError {
    /// The feature is switched off by a flag.
    Disabled(&'static str),
    /// The answers failed validation.
    Invalid(ValidationErrors),
    /// A service or the backend declined the request.
    Rejected(String),
    InvalidArgument(String),
    Client(ClientError),
    Export(ExportError),
    Persistence(PersistenceError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disabled(feature) => write!(f, "{feature} is disabled"),
            Self::Invalid(errors) => write!(f, "Invalid answers: {errors}"),
            Self::Rejected(message) => write!(f, "{message}"),
            Self::InvalidArgument(message) => write!(f, "Invalid argument: {message}"),
            Self::Client(err) => write!(f, "{}", err.user_message()),
            Self::Export(err) => write!(f, "Export failed: {err}"),
            Self::Persistence(err) => write!(f, "Storage error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "Invalid JSON: {err}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ValidationErrors> for CliError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Invalid(errors)
    }
}

impl From<ClientError> for CliError {
    fn from(err: ClientError) -> Self {
        Self::Client(err)
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        Self::Export(err)
    }
}

impl From<PersistenceError> for CliError {
    fn from(err: PersistenceError) -> Self {
        Self::Persistence(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
