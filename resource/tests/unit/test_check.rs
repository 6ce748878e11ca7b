//! Check command tests

use deployment_resource::commands::check::CheckCommand;
use deployment_resource::errors::ResourceError;
use deployment_resource::models::request::CheckRequest;
use deployment_resource::models::version::Version;
use serde_json::json;

use crate::fakes::{deployment, source, FakeGitHub};

fn request(source_extra: serde_json::Value, version: Option<&str>) -> CheckRequest {
    CheckRequest {
        source: source(source_extra),
        version: version.map(|id| Version {
            id: id.to_string(),
            status: None,
        }),
    }
}

fn ids(versions: &[Version]) -> Vec<&str> {
    versions.iter().map(|v| v.id.as_str()).collect()
}

fn production_and_dev() -> FakeGitHub {
    FakeGitHub {
        deployments: vec![
            deployment(5, Some("dev")),
            deployment(4, Some("production")),
            deployment(3, Some("production")),
            deployment(2, Some("production")),
            deployment(1, Some("dev")),
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_no_deployments_returns_no_versions() {
    let github = FakeGitHub::default();
    let command = CheckCommand::new(&github);

    let versions = command.run(&request(json!({}), None)).await.unwrap();
    assert!(versions.is_empty());

    let versions = command.run(&request(json!({}), Some("3"))).await.unwrap();
    assert!(versions.is_empty());
    assert_eq!(github.calls().list_deployments, 2);
}

#[tokio::test]
async fn test_first_run_outputs_most_recent() {
    let github = FakeGitHub {
        deployments: vec![deployment(3, None), deployment(2, None), deployment(1, None)],
        ..Default::default()
    };

    let versions = CheckCommand::new(&github)
        .run(&request(json!({}), None))
        .await
        .unwrap();

    assert_eq!(versions, vec![Version::new(3)]);
}

#[tokio::test]
async fn test_outputs_current_and_later_versions() {
    let github = FakeGitHub {
        deployments: vec![deployment(3, None), deployment(2, None), deployment(1, None)],
        ..Default::default()
    };
    let command = CheckCommand::new(&github);

    let versions = command.run(&request(json!({}), Some("3"))).await.unwrap();
    assert_eq!(ids(&versions), vec!["3"]);

    let versions = command.run(&request(json!({}), Some("2"))).await.unwrap();
    assert_eq!(ids(&versions), vec!["2", "3"]);
}

#[tokio::test]
async fn test_ids_past_single_digits_order_numerically() {
    let github = FakeGitHub {
        deployments: (1..=12).rev().map(|id| deployment(id, None)).collect(),
        ..Default::default()
    };

    let versions = CheckCommand::new(&github)
        .run(&request(json!({}), Some("9")))
        .await
        .unwrap();

    assert_eq!(ids(&versions), vec!["9", "10", "11", "12"]);
}

#[tokio::test]
async fn test_environment_filter_without_matches() {
    let github = FakeGitHub {
        deployments: vec![
            deployment(3, Some("dev")),
            deployment(2, Some("dev")),
            deployment(1, Some("dev")),
        ],
        ..Default::default()
    };

    let versions = CheckCommand::new(&github)
        .run(&request(json!({"environments": ["production"]}), None))
        .await
        .unwrap();

    assert!(versions.is_empty());
}

#[tokio::test]
async fn test_environment_filter_first_run() {
    let github = production_and_dev();

    let versions = CheckCommand::new(&github)
        .run(&request(json!({"environments": ["production"]}), None))
        .await
        .unwrap();

    assert_eq!(ids(&versions), vec!["4"]);
}

#[tokio::test]
async fn test_environment_filter_with_current_version() {
    let github = production_and_dev();
    let command = CheckCommand::new(&github);

    let versions = command
        .run(&request(json!({"environments": ["production"]}), Some("4")))
        .await
        .unwrap();
    assert_eq!(ids(&versions), vec!["4"]);

    let versions = command
        .run(&request(json!({"environments": ["production"]}), Some("3")))
        .await
        .unwrap();
    assert_eq!(ids(&versions), vec!["3", "4"]);
}

#[tokio::test]
async fn test_legacy_environment_field_filters() {
    let github = production_and_dev();

    let versions = CheckCommand::new(&github)
        .run(&request(json!({"environment": "dev"}), None))
        .await
        .unwrap();

    assert_eq!(ids(&versions), vec!["5"]);
}

#[tokio::test]
async fn test_provider_failure_is_returned() {
    let github = FakeGitHub {
        failure: Some("401 Unauthorized".to_string()),
        ..Default::default()
    };

    let result = CheckCommand::new(&github).run(&request(json!({}), None)).await;

    match result {
        Err(err @ ResourceError::ProviderError(_)) => assert!(err.is_provider_error()),
        other => panic!("expected provider error, got {:?}", other),
    }
}
