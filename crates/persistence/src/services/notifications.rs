// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_domain::{ApiResponse, Notification, NotificationType};
use time::OffsetDateTime;
use tracing::{debug, warn};

use super::{LOAD_FAILED, ServiceOptions, new_id};
use crate::collections::{NOTIFICATIONS_KEY, read_collection, write_collection};
use crate::error::PersistenceError;
use crate::storage::Storage;

/// Per-user notifications, newest first.
#[derive(Debug, Clone)]
pub struct NotificationService<S: Storage> {
    storage: S,
    options: ServiceOptions,
}

impl<S: Storage> NotificationService<S> {
    pub const fn new(storage: S, options: ServiceOptions) -> Self {
        Self { storage, options }
    }

    fn load(&self) -> Result<Vec<Notification>, PersistenceError> {
        read_collection(&self.storage, NOTIFICATIONS_KEY)
    }

    fn save(&self, notifications: &[Notification]) -> bool {
        match write_collection(&self.storage, NOTIFICATIONS_KEY, notifications) {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "Failed to save notifications");
                false
            }
        }
    }

    /// Records a notification for `user_id` without the artificial delay.
    ///
    /// Used for side effects of other operations.
    pub(crate) fn push(
        &self,
        user_id: &str,
        notification_type: NotificationType,
        title: &str,
        message: &str,
    ) -> Option<Notification> {
        let notification: Notification = Notification::new(
            new_id(),
            user_id,
            notification_type,
            title,
            message,
            OffsetDateTime::now_utc(),
        );
        let mut notifications: Vec<Notification> = self.load().ok()?;
        notifications.insert(0, notification.clone());
        if !self.save(&notifications) {
            return None;
        }
        debug!(user = %notification.user_id, kind = %notification_type, "Notification created");
        Some(notification)
    }

    /// Creates a notification.
    pub async fn notify(
        &self,
        user_id: &str,
        notification_type: NotificationType,
        title: &str,
        message: &str,
    ) -> ApiResponse<Notification> {
        self.options.simulate_latency().await;
        self.push(user_id, notification_type, title, message).map_or_else(
            || ApiResponse::failure("Could not save the notification"),
            |notification| ApiResponse::ok(notification, "Notification created"),
        )
    }

    /// The user's notifications, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> ApiResponse<Vec<Notification>> {
        self.options.simulate_latency().await;
        let user_id: String = user_id.to_lowercase();
        let Ok(notifications) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let mut mine: Vec<Notification> = notifications
            .into_iter()
            .filter(|notification| notification.user_id == user_id)
            .collect();
        mine.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let count: usize = mine.len();
        ApiResponse::ok(mine, format!("{count} notification(s)"))
    }

    /// Number of unread notifications for the user.
    pub async fn unread_count(&self, user_id: &str) -> ApiResponse<usize> {
        self.options.simulate_latency().await;
        let user_id: String = user_id.to_lowercase();
        let Ok(notifications) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let unread: usize = notifications
            .iter()
            .filter(|notification| notification.user_id == user_id && !notification.read)
            .count();
        ApiResponse::ok(unread, format!("{unread} unread"))
    }

    /// Marks one notification as read.
    pub async fn mark_read(&self, id: &str) -> ApiResponse<Notification> {
        self.options.simulate_latency().await;
        let Ok(mut notifications) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return ApiResponse::failure("Notification not found");
        };
        notification.read = true;
        let updated: Notification = notification.clone();
        if !self.save(&notifications) {
            return ApiResponse::failure("Could not update the notification");
        }
        ApiResponse::ok(updated, "Notification marked as read")
    }

    /// Marks every notification of the user as read, returning how many changed.
    pub async fn mark_all_read(&self, user_id: &str) -> ApiResponse<usize> {
        self.options.simulate_latency().await;
        let user_id: String = user_id.to_lowercase();
        let Ok(mut notifications) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let mut changed: usize = 0;
        for notification in notifications
            .iter_mut()
            .filter(|n| n.user_id == user_id && !n.read)
        {
            notification.read = true;
            changed += 1;
        }
        if changed > 0 && !self.save(&notifications) {
            return ApiResponse::failure("Could not update notifications");
        }
        ApiResponse::ok(changed, format!("{changed} notification(s) marked as read"))
    }

    /// Deletes a notification.
    pub async fn delete(&self, id: &str) -> ApiResponse<()> {
        self.options.simulate_latency().await;
        let Ok(mut notifications) = self.load() else {
            return ApiResponse::failure(LOAD_FAILED);
        };
        let before: usize = notifications.len();
        notifications.retain(|n| n.id != id);
        if notifications.len() == before {
            return ApiResponse::failure("Notification not found");
        }
        if !self.save(&notifications) {
            return ApiResponse::failure("Could not delete the notification");
        }
        ApiResponse::ok((), "Notification deleted")
    }
}
