// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local stand-ins for the participation backend.
//!
//! Every operation answers with an `ApiResponse` instead of an error so the
//! demo layer can never crash its caller. An optional delay emulates network
//! latency.

mod notifications;
mod nrc;
mod waitlist;

use std::time::Duration;

use awards_domain::ValidationErrors;

pub use notifications::NotificationService;
pub use nrc::NrcService;
pub use waitlist::WaitlistService;

/// Settings shared by the demo services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Artificial delay applied before every operation.
    pub latency: Duration,
}

impl ServiceOptions {
    #[must_use]
    pub const fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn invalid_form_message(errors: &ValidationErrors) -> String {
    format!("Please correct the highlighted fields: {errors}")
}

/// Reply when a collection cannot be read. Nothing is written in that case.
const LOAD_FAILED: &str = "Could not load saved data. Please try again.";
