// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

string_enum! {
    /// What triggered a notification.
    pub enum NotificationType: "notification type" {
        ApplicationSubmitted => "application_submitted",
        ApplicationApproved => "application_approved",
        ApplicationRejected => "application_rejected",
        NomineeSubmitted => "nominee_submitted",
        NomineeApproved => "nominee_approved",
        NomineeRejected => "nominee_rejected",
        WaitlistJoined => "waitlist_joined",
        System => "system",
    }
}

/// A message for a user, created as a side effect of a state change.
///
/// `read` stays false until the user marks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// The recipient's email address.
    pub user_id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Creates an unread notification.
    #[must_use]
    pub fn new(
        id: String,
        user_id: &str,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            user_id: user_id.to_lowercase(),
            notification_type,
            title: title.into(),
            message: message.into(),
            timestamp,
            read: false,
        }
    }
}
