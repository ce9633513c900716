//! Integration tests for the read-only role and metrics repositories

use doccano_client::{MetricsRepository, RoleRepository, Session};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Roles decode from a bare JSON array, element by element
#[tokio::test]
async fn test_role_list_decodes_bare_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "project_admin" },
            { "id": 2, "name": "annotator" },
            { "id": 3, "name": "annotation_approver" }
        ])))
        .mount(&server)
        .await;

    let session = Session::new(&server.uri()).expect("valid base URL");
    let roles = RoleRepository::new(&session).list().await.expect("roles");

    assert_eq!(roles.len(), 3);
    assert_eq!(roles[1].name, "annotator");
}

/// Progress decodes as a single aggregate record
#[tokio::test]
async fn test_get_progress() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/16/metrics/progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 100,
            "remaining": 40,
            "complete": 60
        })))
        .mount(&server)
        .await;

    let session = Session::new(&server.uri()).expect("valid base URL");
    let progress = MetricsRepository::new(&session)
        .get_progress(16)
        .await
        .expect("progress");

    assert_eq!(progress.total, 100);
    assert_eq!(progress.remaining, 40);
    assert_eq!(progress.complete, 60);
}

/// Member progress is unwrapped from its envelope
#[tokio::test]
async fn test_get_members_progress() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/16/metrics/member-progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 100,
            "progress": [
                { "user": "admin", "done": 60 },
                { "user": "annotator", "done": 25 }
            ]
        })))
        .mount(&server)
        .await;

    let session = Session::new(&server.uri()).expect("valid base URL");
    let progress = MetricsRepository::new(&session)
        .get_members_progress(16)
        .await
        .expect("member progress");

    assert_eq!(progress.len(), 2);
    assert_eq!(progress[0].user, "admin");
    assert_eq!(progress[0].done, 60);
}

/// Distribution mappings flatten into one record per member
#[tokio::test]
async fn test_get_category_distribution() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/16/metrics/category-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "admin": { "positive": 3, "negative": 2 },
            "annotator": { "positive": 1 }
        })))
        .mount(&server)
        .await;

    let session = Session::new(&server.uri()).expect("valid base URL");
    let distribution = MetricsRepository::new(&session)
        .get_category_distribution(16)
        .await
        .expect("distribution");

    assert_eq!(distribution.len(), 2);
    assert_eq!(distribution[0].username, "admin");
    assert_eq!(distribution[0].counts["negative"], 2);
    assert_eq!(distribution[1].username, "annotator");
    assert_eq!(distribution[1].counts["positive"], 1);
}

/// Span and relation distributions hit their own endpoints
#[tokio::test]
async fn test_span_and_relation_distribution_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/16/metrics/span-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/projects/16/metrics/relation-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::new(&server.uri()).expect("valid base URL");
    let metrics = MetricsRepository::new(&session);

    assert!(metrics.get_span_distribution(16).await.expect("span").is_empty());
    assert!(metrics
        .get_relation_distribution(16)
        .await
        .expect("relation")
        .is_empty());
}
