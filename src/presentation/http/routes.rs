// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{answers, comments, questions, tags, users, votes},
    middleware::rate_limit::write_rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, patch, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Router knobs taken from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty or `*` allows any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, RouterOptions::default())
}

pub fn build_router_with(state: HttpState, options: RouterOptions) -> Router {
    let reads = Router::new()
        .route("/health", get(health))
        .route("/api/v1/question", get(questions::list_questions))
        .route("/api/v1/question/{id}", get(questions::get_question))
        .route(
            "/api/v1/question/tag/{tag_id}",
            get(questions::list_questions_by_tag),
        )
        .route(
            "/api/v1/question/user/{user_id}",
            get(questions::list_questions_by_owner),
        )
        .route("/api/v1/answer/single/{id}", get(answers::get_answer))
        .route(
            "/api/v1/answer/user/{user_id}",
            get(answers::list_answers_by_owner),
        )
        .route("/api/v1/tag", get(tags::list_tags))
        .route("/api/v1/auth/me", get(users::profile))
        .route("/api/v1/user", get(users::list_users))
        .route("/api/v1/user/{id}", get(users::get_user));

    let mut writes = Router::new()
        .route("/api/v1/auth/register", post(users::register))
        .route("/api/v1/auth/login", post(users::login))
        .route("/api/v1/question/new", post(questions::create_question))
        .route(
            "/api/v1/question/update/{id}",
            put(questions::update_question),
        )
        .route(
            "/api/v1/question/delete/{id}",
            axum::routing::delete(questions::delete_question),
        )
        .route(
            "/api/v1/answer/{question_id}",
            get(answers::list_answers).post(answers::create_answer),
        )
        .route("/api/v1/answer/accept/{id}", patch(answers::toggle_accept))
        .route("/api/v1/answer/update/{id}", put(answers::update_answer))
        .route(
            "/api/v1/answer/delete/{id}",
            axum::routing::delete(answers::delete_answer),
        )
        .route(
            "/api/v1/vote/{kind}/{id}",
            get(votes::get_tally)
                .put(votes::cast_vote)
                .delete(votes::retract_vote),
        )
        .route(
            "/api/v1/comment/{kind}/{id}",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/v1/tag/{id}",
            get(tags::get_tag).put(tags::update_tag),
        );

    if options.rate_limit {
        if let Some(layer) = write_rate_limit_layer() {
            writes = writes.layer(layer);
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .merge(reads)
        .merge(writes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
