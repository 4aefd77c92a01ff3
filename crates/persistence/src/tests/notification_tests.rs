// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use awards_domain::{ApiResponse, Notification, NotificationType};

use crate::{MemoryStorage, NotificationService};

use super::{FlakyStorage, ReadOnlyStorage, create_test_options};

fn create_service() -> NotificationService<MemoryStorage> {
    NotificationService::new(MemoryStorage::new(), create_test_options())
}

#[tokio::test]
async fn test_notifications_are_listed_newest_first() {
    let service = create_service();
    for title in ["first", "second", "third"] {
        let response = service
            .notify("jane@x.com", NotificationType::System, title, "body")
            .await;
        assert!(response.success);
    }

    let listed: Vec<Notification> = service.list_for_user("jane@x.com").await.data.unwrap();
    let titles: Vec<&str> = listed.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
    assert!(listed.iter().all(|n| !n.read));
}

#[tokio::test]
async fn test_notifications_are_scoped_to_their_user() {
    let service = create_service();
    service
        .notify("jane@x.com", NotificationType::System, "hi", "jane")
        .await;
    service
        .notify("Omar@X.com", NotificationType::System, "hi", "omar")
        .await;

    let omar: Vec<Notification> = service.list_for_user("omar@x.com").await.data.unwrap();
    assert_eq!(omar.len(), 1);
    assert_eq!(omar[0].message, "omar");
}

#[tokio::test]
async fn test_read_state_management() {
    let service = create_service();
    let first: Notification = service
        .notify("jane@x.com", NotificationType::System, "one", "body")
        .await
        .data
        .unwrap();
    service
        .notify("jane@x.com", NotificationType::System, "two", "body")
        .await;
    assert_eq!(service.unread_count("jane@x.com").await.data, Some(2));

    let marked: ApiResponse<Notification> = service.mark_read(&first.id).await;
    assert!(marked.data.unwrap().read);
    assert_eq!(service.unread_count("jane@x.com").await.data, Some(1));

    assert_eq!(service.mark_all_read("jane@x.com").await.data, Some(1));
    assert_eq!(service.unread_count("jane@x.com").await.data, Some(0));
    assert_eq!(service.mark_all_read("jane@x.com").await.data, Some(0));
}

#[tokio::test]
async fn test_delete_notification() {
    let service = create_service();
    let created: Notification = service
        .notify("jane@x.com", NotificationType::System, "one", "body")
        .await
        .data
        .unwrap();

    assert!(service.delete(&created.id).await.success);
    let again = service.delete(&created.id).await;
    assert!(!again.success);
    assert_eq!(again.message_or_default(), "Notification not found");
    assert!(service.list_for_user("jane@x.com").await.data.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_notification_cannot_be_marked() {
    let service = create_service();
    let response = service.mark_read("missing").await;
    assert!(!response.success);
    assert!(response.data.is_none());
}

#[tokio::test]
async fn test_write_failure_is_reported_not_raised() {
    let service = NotificationService::new(ReadOnlyStorage, create_test_options());
    let response = service
        .notify("jane@x.com", NotificationType::System, "one", "body")
        .await;
    assert!(!response.success);
    assert_eq!(response.message_or_default(), "Could not save the notification");
}

#[tokio::test]
async fn test_failed_read_keeps_existing_notifications() {
    let storage: FlakyStorage = FlakyStorage::new();
    let service = NotificationService::new(storage.clone(), create_test_options());
    service
        .notify("jane@x.com", NotificationType::System, "one", "body")
        .await;

    storage.fail_reads(true);
    let second = service
        .notify("jane@x.com", NotificationType::System, "two", "body")
        .await;
    assert!(!second.success);
    assert!(!service.mark_all_read("jane@x.com").await.success);
    assert!(!service.unread_count("jane@x.com").await.success);

    storage.fail_reads(false);
    let listed: Vec<Notification> = service.list_for_user("jane@x.com").await.data.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "one");
    assert!(!listed[0].read);
}
