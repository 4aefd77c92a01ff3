// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::schema::ValidationErrors;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more form fields failed their schema rules.
    Validation(ValidationErrors),
    /// A string did not name any known option.
    InvalidOption {
        /// The kind of option being parsed (e.g. "account type").
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A status change is not permitted by the entity's lifecycle.
    InvalidStatusTransition {
        /// The entity whose status was changing.
        entity: &'static str,
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "Validation failed: {errors}"),
            Self::InvalidOption { kind, value } => write!(f, "Invalid {kind}: '{value}'"),
            Self::InvalidStatusTransition { entity, from, to } => {
                write!(f, "Cannot move {entity} from '{from}' to '{to}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
