// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_domain::{
    ApiResponse, FormData, NotificationType, WaitlistEntry, WaitlistInput,
};
use time::OffsetDateTime;
use tracing::{info, warn};

use super::{LOAD_FAILED, NotificationService, ServiceOptions, invalid_form_message, new_id};
use crate::collections::{WAITLIST_KEY, read_collection, write_collection};
use crate::error::PersistenceError;
use crate::storage::Storage;

/// Pre-launch waitlist signups.
#[derive(Debug, Clone)]
pub struct WaitlistService<S: Storage + Clone> {
    storage: S,
    options: ServiceOptions,
    notifications: NotificationService<S>,
}

impl<S: Storage + Clone> WaitlistService<S> {
    pub fn new(storage: S, options: ServiceOptions) -> Self {
        Self {
            notifications: NotificationService::new(storage.clone(), options),
            storage,
            options,
        }
    }

    fn load(&self) -> Result<Vec<WaitlistEntry>, PersistenceError> {
        read_collection(&self.storage, WAITLIST_KEY)
    }

    /// Adds a signup. Each email may join once.
    pub async fn join(&self, form: &FormData) -> ApiResponse<WaitlistEntry> {
        self.options.simulate_latency().await;

        let input: WaitlistInput = match WaitlistInput::from_form(form) {
            Ok(input) => input,
            Err(errors) => return ApiResponse::failure(invalid_form_message(&errors)),
        };

        let Ok(mut entries) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        if entries.iter().any(|entry| entry.email == input.email) {
            return ApiResponse::failure("This email is already on the waitlist");
        }

        let entry: WaitlistEntry = WaitlistEntry::new(new_id(), input, OffsetDateTime::now_utc());
        entries.push(entry.clone());
        if let Err(err) = write_collection(&self.storage, WAITLIST_KEY, &entries) {
            warn!(error = %err, "Failed to save waitlist entry");
            return ApiResponse::failure("Could not join the waitlist. Please try again.");
        }

        self.notifications.push(
            &entry.email,
            NotificationType::WaitlistJoined,
            "You're on the list",
            "We'll let you know as soon as participation opens.",
        );
        info!(id = %entry.id, categories = entry.categories.len(), "Waitlist entry created");
        ApiResponse::ok(entry, "You have joined the waitlist")
    }

    /// Every signup, oldest first.
    pub async fn list(&self) -> ApiResponse<Vec<WaitlistEntry>> {
        self.options.simulate_latency().await;
        let Ok(entries) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let count: usize = entries.len();
        ApiResponse::ok(entries, format!("{count} waitlist entr(ies)"))
    }

    /// Flags the given entries as copied to the shared spreadsheet.
    ///
    /// Returns how many entries changed. Unknown ids are ignored.
    pub async fn mark_synced(&self, ids: &[String]) -> ApiResponse<usize> {
        self.options.simulate_latency().await;
        let Ok(mut entries) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let mut changed: usize = 0;
        for entry in entries
            .iter_mut()
            .filter(|entry| !entry.synced_to_sheets && ids.contains(&entry.id))
        {
            entry.synced_to_sheets = true;
            changed += 1;
        }
        let saved: Result<(), PersistenceError> = if changed > 0 {
            write_collection(&self.storage, WAITLIST_KEY, &entries)
        } else {
            Ok(())
        };
        if let Err(err) = saved {
            warn!(error = %err, "Failed to save waitlist sync state");
            return ApiResponse::failure("Could not update the waitlist");
        }
        ApiResponse::ok(changed, format!("{changed} entr(ies) marked as synced"))
    }
}
