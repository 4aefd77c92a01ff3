// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use awards_api::{ClientConfig, StoredToken, SubmissionClient};
use awards_persistence::{
    NotificationService, NrcService, ServiceOptions, SqliteStorage, WaitlistService,
};
use time::Date;

use crate::error::CliError;

/// Shared handle to the demo's local storage.
pub type LocalStorage = Arc<SqliteStorage>;

/// Switches for optional parts of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Nominee Research Corps applications, reviews and research.
    pub nrc: bool,
    pub waitlist: bool,
    /// Answer submissions locally instead of calling the backend.
    pub mock_backend: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            nrc: true,
            waitlist: true,
            mock_backend: false,
        }
    }
}

/// Everything a command needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct Context {
    pub storage: LocalStorage,
    pub flags: FeatureFlags,
    pub client: ClientConfig,
    pub options: ServiceOptions,
    /// The date stamped on export file names.
    pub today: Date,
}

impl Context {
    /// # Errors
    ///
    /// Returns an error if the NRC is disabled.
    pub fn nrc(&self) -> Result<NrcService<LocalStorage>, CliError> {
        if !self.flags.nrc {
            return Err(CliError::Disabled("The Nominee Research Corps"));
        }
        Ok(NrcService::new(Arc::clone(&self.storage), self.options))
    }

    /// # Errors
    ///
    /// Returns an error if the waitlist is disabled.
    pub fn waitlist(&self) -> Result<WaitlistService<LocalStorage>, CliError> {
        if !self.flags.waitlist {
            return Err(CliError::Disabled("The waitlist"));
        }
        Ok(WaitlistService::new(Arc::clone(&self.storage), self.options))
    }

    #[must_use]
    pub fn notifications(&self) -> NotificationService<LocalStorage> {
        NotificationService::new(Arc::clone(&self.storage), self.options)
    }

    /// A backend client that sends the stored auth token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn submission_client(&self) -> Result<SubmissionClient, CliError> {
        let token: StoredToken<LocalStorage> = StoredToken::new(Arc::clone(&self.storage));
        Ok(SubmissionClient::new(self.client.clone())?.with_token_source(Arc::new(token)))
    }
}
