/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use polymsg::app_config::Config;
use polymsg::app_controller::{Command, Controller};
use polymsg::{MessageStatus, SearchRequest};
use tempfile::TempDir;

use crate::common;

fn file_backed_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.database.path = Some(dir.path().join("data").join("messages.db").display().to_string());
    config
}

/// Test the controller initialization with the in-memory store
#[test]
fn test_controller_initialization_withTestConfig_shouldSucceed() -> Result<()> {
    common::init_logging();
    let controller = Controller::new_for_test()?;
    assert_eq!(controller.config().database.path.as_deref(), Some(":memory:"));
    Ok(())
}

#[tokio::test]
async fn test_controller_fullWorkflow_shouldCreateReadTranslateAndSearch() -> Result<()> {
    common::init_logging();
    let dir = TempDir::new()?;
    let controller = Controller::with_config(file_backed_config(&dir))?;

    let created = controller
        .run(Command::Create {
            message: "Hello, I'm a message".to_string(),
            status: Some(MessageStatus::Active),
            translations: vec![
                ("fr".to_string(), "Bonjour, je suis un message".to_string()),
                ("es".to_string(), "Hola, soy un mensaje".to_string()),
            ],
        })
        .await?;
    let id = created["id"].as_i64().expect("id should be a number");

    let fetched = controller.run(Command::Get { id }).await?;
    assert_eq!(fetched["message"], "Hello, I'm a message");
    assert_eq!(fetched["status"], "active");

    let translation = controller
        .run(Command::Translation {
            id,
            language: "fr".to_string(),
        })
        .await?;
    assert_eq!(translation, "Bonjour, je suis un message");

    let found = controller
        .run(Command::Search(SearchRequest::new().query("HELLO")))
        .await?;
    assert_eq!(found["meta"]["total"], 1);
    assert_eq!(found["meta"]["totalPages"], 1);
    assert_eq!(found["items"][0]["translations"]["es"], "Hola, soy un mensaje");

    let updated = controller
        .run(Command::SetStatus {
            id,
            status: MessageStatus::Deleted,
        })
        .await?;
    assert_eq!(updated["status"], "deleted");

    Ok(())
}

#[tokio::test]
async fn test_controller_reopen_shouldSeePersistedMessages() -> Result<()> {
    let dir = TempDir::new()?;

    {
        let controller = Controller::with_config(file_backed_config(&dir))?;
        controller
            .run(Command::Create {
                message: "kept on disk".to_string(),
                status: None,
                translations: Vec::new(),
            })
            .await?;
    }

    let controller = Controller::with_config(file_backed_config(&dir))?;
    let found = controller
        .run(Command::Search(SearchRequest::new().status("pending")))
        .await?;
    assert_eq!(found["meta"]["total"], 1);
    assert_eq!(found["items"][0]["message"], "kept on disk");
    assert_eq!(found["items"][0]["translations"], serde_json::json!({}));

    Ok(())
}

#[test]
fn test_controller_invalidSearch_shouldSurfaceMessageError() -> Result<()> {
    let controller = Controller::new_for_test()?;

    let result = tokio_test::block_on(
        controller.run(Command::Search(SearchRequest::new().sort_by("status"))),
    );

    let err = result.unwrap_err();
    let message_error = err
        .downcast_ref::<polymsg::MessageError>()
        .expect("should be a MessageError");
    assert_eq!(message_error.invalid_field(), Some("sortBy"));
    Ok(())
}

#[tokio::test]
async fn test_controller_missingMessage_shouldFail() -> Result<()> {
    let controller = Controller::new_for_test()?;
    let err = controller.run(Command::Get { id: 404 }).await.unwrap_err();
    assert!(err.to_string().contains("message with id 404"));
    Ok(())
}
