/*!
 * Tests for the message error taxonomy
 */

use std::error::Error;

use anyhow::anyhow;
use polymsg::{MessageError, StoreOperation};

#[test]
fn test_invalidArgument_shouldDisplayFieldAndReason() {
    let error = MessageError::invalid("sortBy", "unknown sort field 'id'");
    let display = format!("{}", error);
    assert!(display.contains("sortBy"));
    assert!(display.contains("unknown sort field 'id'"));
}

#[test]
fn test_notFound_shouldDisplayWhatIsMissing() {
    let error = MessageError::NotFound("message with id 42".to_string());
    assert_eq!(format!("{}", error), "Not found: message with id 42");
}

#[test]
fn test_storeUnavailable_shouldDisplayOperationAndKeepSource() {
    let error = MessageError::store(StoreOperation::Items, anyhow!("database is locked"));
    let display = format!("{}", error);
    assert!(display.contains("items"));
    assert!(display.contains("database is locked"));

    let source = error.source().expect("source should be preserved");
    assert_eq!(source.to_string(), "database is locked");
}

#[test]
fn test_storeOperation_shouldDisplayLowercaseNames() {
    let names: Vec<String> = [
        StoreOperation::Insert,
        StoreOperation::Lookup,
        StoreOperation::Update,
        StoreOperation::Items,
        StoreOperation::Count,
    ]
    .iter()
    .map(|op| op.to_string())
    .collect();
    assert_eq!(names, vec!["insert", "lookup", "update", "items", "count"]);
}

#[test]
fn test_isClientError_shouldSeparateCallerAndBackendFailures() {
    assert!(MessageError::invalid("page", "must be at least 1").is_client_error());
    assert!(MessageError::NotFound("x".to_string()).is_client_error());
    assert!(!MessageError::store(StoreOperation::Count, anyhow!("boom")).is_client_error());
}

#[test]
fn test_invalidField_shouldOnlyNameValidationFailures() {
    assert_eq!(MessageError::invalid("limit", "bad").invalid_field(), Some("limit"));
    assert_eq!(MessageError::NotFound("x".to_string()).invalid_field(), None);
    assert_eq!(
        MessageError::store(StoreOperation::Lookup, anyhow!("gone")).invalid_field(),
        None
    );
}

#[test]
fn test_messageError_intoAnyhow_shouldKeepMessage() {
    let error: anyhow::Error = MessageError::invalid("status", "unknown status 'archived'").into();
    assert!(error.to_string().contains("archived"));
    assert!(error.downcast_ref::<MessageError>().is_some());
}
