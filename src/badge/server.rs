//! HTTP routes serving release badges

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::badge::project::Project;
use crate::badge::template::{
    NOT_FOUND_BADGE, Version, render_project_badge, render_version_badge,
};
use crate::platform::{GitPlatform, RepoReference};
use crate::version::classifier::{ErrorCategory, classify};
use crate::version::engine::VersionInferenceEngine;

#[derive(Clone)]
pub struct AppState {
    engine: Arc<VersionInferenceEngine>,
}

#[derive(Debug, Deserialize)]
pub struct VersionBadgeQuery {
    /// Project directory; present selects the manifest strategy
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectBadgeQuery {
    /// Present (with any value) marks the project as an MVP
    mvp: Option<String>,
}

/// Build the badge router around an inference engine
pub fn create_router(engine: Arc<VersionInferenceEngine>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(|| async { "Hello World!" }))
        .route(
            "/badge/version/{git_provider}/{user}/{repo}",
            get(version_badge),
        )
        .route("/badge/project/{project}", get(project_badge))
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { engine })
}

async fn version_badge(
    State(state): State<AppState>,
    Path((git_provider, user, repo)): Path<(String, String, String)>,
    Query(query): Query<VersionBadgeQuery>,
) -> Response {
    let platform = match git_provider.parse::<GitPlatform>() {
        Ok(platform) => platform,
        Err(message) => return error_response(StatusCode::BAD_REQUEST, &message),
    };

    let repo = match RepoReference::new(platform, &user, &repo, query.path.as_deref()) {
        Ok(repo) => repo,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    respond_version_badge(&state.engine, &repo).await
}

async fn respond_version_badge(engine: &VersionInferenceEngine, repo: &RepoReference) -> Response {
    let badge = match engine.infer_version(repo).await {
        Ok(version) => Version::parse(&version)
            .map(|version| render_version_badge(&version))
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match badge {
        Ok(badge) => {
            info!("Served version badge for {}", repo.url());
            svg_response(badge)
        }
        Err(message) => match classify(&message) {
            ErrorCategory::NotFound => {
                info!("No version for {}: {}", repo.url(), message);
                svg_response(NOT_FOUND_BADGE.to_string())
            }
            category => {
                warn!("Version badge for {} failed: {}", repo.url(), message);
                error_response(category.status_code(), &message)
            }
        },
    }
}

async fn project_badge(
    Path(project): Path<String>,
    Query(query): Query<ProjectBadgeQuery>,
) -> Response {
    match project.parse::<Project>() {
        Ok(project) => {
            info!("Served project badge for {}", project.as_str());
            svg_response(render_project_badge(
                &project.badge_name(query.mvp.is_some()),
            ))
        }
        Err(message) => error_response(StatusCode::BAD_REQUEST, &message),
    }
}

fn svg_response(badge: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], badge).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "status": status.as_u16(),
            "error": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::types::FileListing;
    use crate::version::client::{MockRepoFileClient, Tag};
    use crate::version::error::InferenceError;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn call(client: MockRepoFileClient, uri: &str) -> (StatusCode, String, String) {
        let engine = VersionInferenceEngine::with_default_branch(Arc::new(client));
        let router = create_router(Arc::new(engine));

        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_badge_for_latest_tag() {
        let mut client = MockRepoFileClient::new();
        client
            .expect_list_tags()
            .times(1)
            .returning(|_| Ok(vec![Tag::new("v1.2.3")]));

        let (status, content_type, body) = call(client, "/badge/version/github/some/repo").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "image/svg+xml");
        assert!(body.contains("release v1.2.3"));
    }

    #[tokio::test]
    async fn serves_badge_for_manifest_under_path() {
        let mut client = MockRepoFileClient::new();
        client
            .expect_list_files()
            .withf(|_, subpath| subpath == "lib")
            .times(1)
            .returning(|_, _| {
                Ok(FileListing::new(vec![
                    "package.json".to_string(),
                    "package-lock.json".to_string(),
                ]))
            });
        client
            .expect_read_raw_file()
            .withf(|_, _, path| path == "lib/package.json")
            .times(1)
            .returning(|_, _, _| Ok(r#"{"version":"3.1.0"}"#.to_string()));

        let (status, _, body) = call(client, "/badge/version/github/some/repo?path=lib").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("release v3.1.0"));
    }

    #[tokio::test]
    async fn serves_not_found_badge_without_tags() {
        let mut client = MockRepoFileClient::new();
        client.expect_list_tags().returning(|_| Ok(vec![]));

        let (status, content_type, body) = call(client, "/badge/version/github/some/repo").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "image/svg+xml");
        assert_eq!(body, NOT_FOUND_BADGE);
    }

    #[tokio::test]
    async fn rejects_unknown_platform() {
        let client = MockRepoFileClient::new();

        let (status, _, body) = call(client, "/badge/version/bitbucket/some/repo").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid Git Platform."));
    }

    #[tokio::test]
    async fn maps_upstream_failure_to_bad_gateway() {
        let mut client = MockRepoFileClient::new();
        client
            .expect_list_tags()
            .returning(|_| Err(InferenceError::ApiStatus("Service Unavailable".to_string())));

        let (status, _, body) = call(client, "/badge/version/github/some/repo").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], 502);
        assert_eq!(json["error"], "GitHub API error: Service Unavailable");
    }

    #[tokio::test]
    async fn rejects_version_that_is_not_semantic() {
        let mut client = MockRepoFileClient::new();
        client
            .expect_list_tags()
            .returning(|_| Ok(vec![Tag::new("v1.0")]));

        let (status, _, body) = call(client, "/badge/version/github/some/repo").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Invalid version 1.0."));
    }

    #[tokio::test]
    async fn serves_project_badge() {
        let (status, content_type, body) =
            call(MockRepoFileClient::new(), "/badge/project/mathswe-ops").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "image/svg+xml");
        assert!(body.contains("<title>MathSwe Ops</title>"));
    }

    #[tokio::test]
    async fn project_badge_prefixes_mvp() {
        let (status, _, body) = call(MockRepoFileClient::new(), "/badge/project/repsymo?mvp").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>MVP: Repsymo</title>"));
    }

    #[tokio::test]
    async fn project_badge_ignores_other_query_params() {
        let (status, _, body) =
            call(MockRepoFileClient::new(), "/badge/project/repsymo?other=1").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Repsymo</title>"));
    }

    #[tokio::test]
    async fn rejects_unknown_project() {
        let (status, _, body) = call(MockRepoFileClient::new(), "/badge/project/unknown").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Invalid project.");
    }

    #[tokio::test]
    async fn root_responds_with_greeting() {
        let client = MockRepoFileClient::new();

        let (status, _, body) = call(client, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello World!");
    }
}
