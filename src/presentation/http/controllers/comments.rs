// src/presentation/http/controllers/comments.rs
use crate::application::{commands::comments::CreateCommentCommand, dto::CommentDto};
use crate::domain::post::PostKind;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    pub content: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/comment/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`question` or `answer`"),
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Comments, oldest first.", body = [CommentDto]),
        (status = 400, description = "Unknown post kind.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Path((kind, id)): Path<(String, i64)>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    let kind = kind.parse::<PostKind>()?;
    state
        .services
        .comment_queries
        .list_comments(kind, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/comment/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`question` or `answer`"),
        ("id" = i64, Path, description = "Post id")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentDto),
        (status = 400, description = "Empty or oversized comment.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((kind, id)): Path<(String, i64)>,
    Json(payload): Json<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let command = CreateCommentCommand {
        kind: kind.parse::<PostKind>()?,
        post_id: id,
        content: payload.content,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}
