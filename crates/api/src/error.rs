// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Errors surfaced by the submission client.

use std::time::Duration;
use thiserror::Error;

/// Why a backend call failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The exchange failed in transport, before a usable response arrived.
    /// Every reqwest failure other than a timeout or a decode error lands here.
    #[error("Network error: {0}")]
    Network(String),
    /// The request did not complete within the configured deadline.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// The backend answered with a non-2xx status or an unsuccessful envelope.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(String),
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl ClientError {
    /// Returns true for failures worth retrying.
    ///
    /// Only transport failures and timeouts qualify. Anything the backend
    /// answered, including 5xx, is treated as final.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// The backend status code, if there was one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// A message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => {
                String::from("Unable to reach the server. Check your connection and try again.")
            }
            Self::Timeout(_) => String::from("The server took too long to respond. Please try again."),
            Self::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Api { .. } => String::from("The server could not process this request."),
            Self::Decode(_) => {
                String::from("The server sent a response we could not understand. Please try again later.")
            }
            Self::Unknown(_) => String::from("Something went wrong. Please try again."),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            // The client sets no reqwest timeout, so the deadline is unknown here.
            Self::Timeout(Duration::ZERO)
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
