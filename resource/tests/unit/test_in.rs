//! In command tests

use deployment_resource::commands::in_command::{InCommand, DEPLOYMENT_JSON_FILE};
use deployment_resource::errors::ResourceError;
use deployment_resource::models::metadata::MetadataPair;
use deployment_resource::models::request::InRequest;
use deployment_resource::models::version::Version;
use github_models::Deployment;
use serde_json::json;

use crate::fakes::{full_deployment, source, status, FakeGitHub};

fn request(id: &str) -> InRequest {
    InRequest {
        source: source(json!({})),
        version: Version {
            id: id.to_string(),
            status: None,
        },
        params: serde_json::Value::Null,
    }
}

fn found() -> FakeGitHub {
    FakeGitHub {
        deployment: Some(full_deployment(1, "master", "production", "deploy", "One more")),
        statuses: vec![status(1, "success")],
        ..Default::default()
    }
}

async fn read(dir: &std::path::Path, name: &str) -> String {
    tokio::fs::read_to_string(dir.join(name)).await.unwrap()
}

#[tokio::test]
async fn test_provider_error_is_returned() {
    let github = FakeGitHub {
        failure: Some("no deployment".to_string()),
        ..Default::default()
    };
    let tmp = tempfile::tempdir().unwrap();

    let result = InCommand::new(&github)
        .run(&tmp.path().join("destination"), &request("1"))
        .await;

    match result {
        Err(ResourceError::ProviderError(message)) => assert_eq!(message, "no deployment"),
        other => panic!("expected provider error, got {:?}", other),
    }
    assert!(github.calls().list_deployment_statuses.is_empty());
}

#[tokio::test]
async fn test_creates_the_data_files() {
    let github = found();
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("destination");

    InCommand::new(&github).run(&dest, &request("1")).await.unwrap();

    assert_eq!(read(&dest, "id").await, "1");
    assert_eq!(read(&dest, "ref").await, "master");
    assert_eq!(read(&dest, "sha").await, "12345");
    assert_eq!(read(&dest, "task").await, "deploy");
    assert_eq!(read(&dest, "environment").await, "production");
    assert_eq!(read(&dest, "description").await, "One more");

    let saved: Deployment = serde_json::from_str(&read(&dest, DEPLOYMENT_JSON_FILE).await).unwrap();
    assert_eq!(saved, full_deployment(1, "master", "production", "deploy", "One more"));

    assert_eq!(github.calls().get_deployment, vec![1]);
    assert_eq!(github.calls().list_deployment_statuses, vec![1]);
}

#[tokio::test]
async fn test_skips_absent_optional_files() {
    let github = FakeGitHub {
        deployment: Some(crate::fakes::deployment(7, None)),
        ..Default::default()
    };
    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("destination");

    InCommand::new(&github).run(&dest, &request("7")).await.unwrap();

    assert_eq!(read(&dest, "id").await, "7");
    assert!(!dest.join("task").exists());
    assert!(!dest.join("environment").exists());
    assert!(!dest.join("description").exists());
}

#[tokio::test]
async fn test_outputs_version_and_metadata() {
    let github = found();
    let tmp = tempfile::tempdir().unwrap();

    let response = InCommand::new(&github)
        .run(&tmp.path().join("destination"), &request("1"))
        .await
        .unwrap();

    assert_eq!(response.version, Version::with_status(1, Some("success".to_string())));
    assert_eq!(
        response.metadata,
        vec![
            MetadataPair::new("id", "1"),
            MetadataPair::new("ref", "master"),
            MetadataPair::new("sha", "12345"),
            MetadataPair::new("task", "deploy"),
            MetadataPair::new("environment", "production"),
            MetadataPair::new("description", "One more"),
            MetadataPair::new("creator", "theboss"),
            MetadataPair::new("created_at", "2016-01-20 15:15:15"),
            MetadataPair::new("status_id", "1"),
            MetadataPair::new("status", "success"),
            MetadataPair::new("status_created_at", "2016-01-20 15:15:15"),
            MetadataPair::new("status_count", "1"),
        ]
    );
}

#[tokio::test]
async fn test_invalid_version_id() {
    let github = found();
    let tmp = tempfile::tempdir().unwrap();

    let result = InCommand::new(&github)
        .run(&tmp.path().join("destination"), &request("latest"))
        .await;

    assert!(matches!(result, Err(ResourceError::InvalidParameter(field)) if field == "version.id"));
    assert_eq!(github.calls().total(), 0);
}
