/*!
 * Integration tests for message access operations
 */

use polymsg::{MessageError, MessageStatus, NewMessage, SearchRequest};

use crate::common;

#[tokio::test]
async fn test_createMessage_shouldAssignIncreasingIds() {
    let service = common::create_test_service();

    let first = service.create_message(NewMessage::new("one")).await.unwrap();
    let second = service.create_message(NewMessage::new("two")).await.unwrap();

    assert!(second.id > first.id);
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn test_createThenGet_shouldRoundTripExceptTranslations() {
    let service = common::create_test_service();
    let record = service.create_message(common::hello_message()).await.unwrap();

    let summary = service.get_message(record.id).await.unwrap();

    assert_eq!(summary.id, record.id);
    assert_eq!(summary.message, "Hello, I'm a message");
    assert_eq!(summary.status, MessageStatus::Active);
    assert_eq!(summary.created_at, record.created_at);

    let json = serde_json::to_value(&summary).unwrap();
    assert!(json.get("translations").is_none());
    assert!(json.get("createdAt").is_some());
}

#[tokio::test]
async fn test_getTranslation_shouldReturnEachStoredLanguage() {
    let service = common::create_test_service();
    let record = service.create_message(common::hello_message()).await.unwrap();

    assert_eq!(
        service.get_translation(record.id, "fr").await.unwrap(),
        "Bonjour, je suis un message"
    );
    assert_eq!(
        service.get_translation(record.id, "es").await.unwrap(),
        "Hola, soy un mensaje"
    );

    let err = service.get_translation(record.id, "de").await.unwrap_err();
    assert!(matches!(err, MessageError::NotFound(_)));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_setStatus_shouldRefreshUpdatedAtOnly() {
    let service = common::create_test_service();
    let record = service.create_message(NewMessage::new("moderate me")).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = service.set_status(record.id, MessageStatus::Active).await.unwrap();

    assert_eq!(updated.status, MessageStatus::Active);
    assert_eq!(updated.created_at, record.created_at);
    assert!(updated.updated_at > record.updated_at);
    assert_eq!(updated.message, record.message);
}

#[tokio::test]
async fn test_setStatus_shouldMoveMessageBetweenStatusFilters() {
    let service = common::create_test_service();
    let record = service.create_message(NewMessage::new("flagged")).await.unwrap();

    let pending = service
        .search_messages(&SearchRequest::new().status("pending"))
        .await
        .unwrap();
    assert_eq!(pending.meta.total, 1);

    service.set_status(record.id, MessageStatus::Spam).await.unwrap();

    let pending = service
        .search_messages(&SearchRequest::new().status("pending"))
        .await
        .unwrap();
    let spam = service
        .search_messages(&SearchRequest::new().status("spam"))
        .await
        .unwrap();
    assert_eq!(pending.meta.total, 0);
    assert_eq!(spam.meta.total, 1);
}

#[tokio::test]
async fn test_createMessage_withInvalidInput_shouldNotStoreAnything() {
    let service = common::create_test_service();

    let err = service.create_message(NewMessage::new("")).await.unwrap_err();
    assert_eq!(err.invalid_field(), Some("message"));

    let err = service
        .create_message(NewMessage::new("Hi").with_translation("english", "Hi"))
        .await
        .unwrap_err();
    assert_eq!(err.invalid_field(), Some("translations"));

    let all = service.search_messages(&SearchRequest::new()).await.unwrap();
    assert_eq!(all.meta.total, 0);
}

#[tokio::test]
async fn test_sortByUpdatedAt_shouldFollowLatestStatusChange() {
    let service = common::create_test_service();
    let seeded = common::seed_numbered(&service, 3).await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    service.set_status(seeded[0].id, MessageStatus::Active).await.unwrap();

    let result = service
        .search_messages(&SearchRequest::new().sort_by("updatedAt").sort_order("DESC"))
        .await
        .unwrap();

    assert_eq!(result.items[0].id, seeded[0].id);
}
