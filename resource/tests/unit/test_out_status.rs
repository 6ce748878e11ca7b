//! Out command tests for deployment statuses

use deployment_resource::commands::out::OutCommand;
use deployment_resource::errors::ResourceError;
use deployment_resource::models::metadata::MetadataPair;
use deployment_resource::models::request::OutRequest;
use deployment_resource::models::version::Version;
use deployment_resource::params::provenance::BuildMetadata;
use github_models::DeploymentStatusRequest;
use serde_json::json;

use crate::fakes::{deployment, source, status, FakeGitHub};

fn request(params: serde_json::Value) -> OutRequest {
    OutRequest {
        source: source(json!({})),
        params: serde_json::from_value(params).unwrap(),
    }
}

fn existing() -> FakeGitHub {
    FakeGitHub {
        deployment: Some(deployment(12, Some("production"))),
        statuses: vec![status(3, "success"), status(2, "pending")],
        created_status: Some(status(3, "success")),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_creates_status_from_literals() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let response = OutCommand::new(&github, BuildMetadata::default())
        .run(
            sources.path(),
            &request(json!({"id": "12", "state": "success", "description": "shipped"})),
        )
        .await
        .unwrap();

    let calls = github.calls();
    assert_eq!(calls.get_deployment, vec![12]);
    assert_eq!(
        calls.create_deployment_status,
        vec![(
            12,
            DeploymentStatusRequest {
                state: "success".to_string(),
                description: Some("shipped".to_string()),
            }
        )]
    );
    assert_eq!(calls.list_deployment_statuses, vec![12]);

    assert_eq!(response.version, Version::with_status(12, Some("success".to_string())));
    assert_eq!(
        response.metadata,
        vec![
            MetadataPair::new("id", "12"),
            MetadataPair::new("ref", "master"),
            MetadataPair::new("sha", "12345"),
            MetadataPair::new("environment", "production"),
            MetadataPair::new("status_id", "3"),
            MetadataPair::new("status", "success"),
            MetadataPair::new("status_created_at", "2016-01-20 15:15:15"),
            MetadataPair::new("status_count", "2"),
        ]
    );
}

#[tokio::test]
async fn test_creates_status_from_files() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();
    std::fs::create_dir(sources.path().join("deployment")).unwrap();
    std::fs::write(sources.path().join("deployment/id"), "12\n").unwrap();
    std::fs::write(sources.path().join("state"), "failure").unwrap();

    OutCommand::new(&github, BuildMetadata::default())
        .run(
            sources.path(),
            &request(json!({
                "type": "status",
                "id": {"file": "deployment/id"},
                "state": {"file": "state"},
            })),
        )
        .await
        .unwrap();

    let calls = github.calls();
    assert_eq!(calls.create_deployment_status.len(), 1);
    let (id, sent) = &calls.create_deployment_status[0];
    assert_eq!(*id, 12);
    assert_eq!(sent.state, "failure");
    assert_eq!(sent.description, None);
}

#[tokio::test]
async fn test_missing_id_fails_before_provider_calls() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(sources.path(), &request(json!({"state": "success"})))
        .await;

    assert!(matches!(result, Err(ResourceError::MissingParameter(field)) if field == "id"));
    assert_eq!(github.calls().total(), 0);
}

#[tokio::test]
async fn test_missing_state_fails_before_provider_calls() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(sources.path(), &request(json!({"id": "12"})))
        .await;

    assert!(matches!(result, Err(ResourceError::MissingParameter(field)) if field == "state"));
    assert_eq!(github.calls().total(), 0);
}

#[tokio::test]
async fn test_non_numeric_id_is_invalid() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(sources.path(), &request(json!({"id": "twelve", "state": "success"})))
        .await;

    assert!(matches!(result, Err(ResourceError::InvalidParameter(field)) if field == "id"));
    assert_eq!(github.calls().total(), 0);
}

#[tokio::test]
async fn test_unknown_shape_is_invalid() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(sources.path(), &request(json!({"id": 12, "state": "success"})))
        .await;

    assert!(matches!(result, Err(ResourceError::InvalidParameter(field)) if field == "id"));
}

#[tokio::test]
async fn test_unknown_type_is_invalid() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(sources.path(), &request(json!({"type": "release", "id": "12", "state": "success"})))
        .await;

    assert!(matches!(result, Err(ResourceError::InvalidParameter(field)) if field == "type"));
    assert_eq!(github.calls().total(), 0);
}

#[tokio::test]
async fn test_missing_file_is_reported() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(
            sources.path(),
            &request(json!({"id": {"file": "missing/id"}, "state": "success"})),
        )
        .await;

    match result {
        Err(ResourceError::FileNotFound(path)) => assert!(path.ends_with("missing/id")),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
    assert_eq!(github.calls().total(), 0);
}

#[tokio::test]
async fn test_file_outside_sources_is_rejected() {
    let github = existing();
    let sources = tempfile::tempdir().unwrap();
    let outside = tempfile::tempdir().unwrap();
    std::fs::write(outside.path().join("description"), "outside-the-workspace").unwrap();

    let result = OutCommand::new(&github, BuildMetadata::default())
        .run(
            sources.path(),
            &request(json!({
                "id": "12",
                "state": "success",
                "description": {"file": outside.path().join("description")},
            })),
        )
        .await;

    assert!(matches!(result, Err(ResourceError::InvalidParameter(field)) if field == "description"));
    assert_eq!(github.calls().total(), 0);
}
