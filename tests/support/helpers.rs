// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::Value;

use overflow_core::application::dto::AuthenticatedUser;
use overflow_core::application::services::{ApplicationServices, Repositories, ServicePolicies};
use overflow_core::domain::answer::AcceptancePolicy;
use overflow_core::domain::post::CascadePolicy;
use overflow_core::domain::user::User;
use overflow_core::presentation::http::routes::build_router;
use overflow_core::presentation::http::state::HttpState;

use super::mocks::{DummyPasswordHasher, DummyTokenManager, FixedClock, MemoryStore, fixed_now};

/// Services wired to a shared in-memory store.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_policies(ServicePolicies::default())
    }

    pub fn exclusive() -> Self {
        Self::with_policies(ServicePolicies {
            acceptance: AcceptancePolicy::Exclusive,
            ..ServicePolicies::default()
        })
    }

    pub fn transitive() -> Self {
        Self::with_policies(ServicePolicies {
            cascade: CascadePolicy::Transitive,
            ..ServicePolicies::default()
        })
    }

    pub fn with_policies(policies: ServicePolicies) -> Self {
        let store = Arc::new(MemoryStore::new());
        let repos = Repositories {
            users: store.clone(),
            question_write: store.clone(),
            question_read: store.clone(),
            answer_write: store.clone(),
            answer_read: store.clone(),
            tags: store.clone(),
            votes: store.clone(),
            comments: store.clone(),
        };
        let services = Arc::new(ApplicationServices::new(
            repos,
            Arc::new(DummyPasswordHasher),
            Arc::new(DummyTokenManager),
            Arc::new(FixedClock),
            policies,
        ));
        Self { store, services }
    }

    pub fn router(&self) -> axum::Router {
        build_router(HttpState::new(Arc::clone(&self.services)))
    }

    pub fn user(&self, username: &str) -> User {
        self.store.add_user(username, 0)
    }
}

/// The principal a bearer token for `user` resolves to.
pub fn actor(user: &User) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: user.id,
        username: user.username.to_string(),
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

pub fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request")
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert an `ErrorResponse` body with the expected status and reason.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = json_body(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
