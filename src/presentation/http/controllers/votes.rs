// src/presentation/http/controllers/votes.rs
use crate::application::{
    commands::votes::{CastVoteCommand, RetractVoteCommand},
    dto::VoteTallyDto,
    queries::votes::GetTallyQuery,
};
use crate::domain::post::PostKind;
use crate::presentation::http::controllers::ViewerParams;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CastVoteRequest {
    /// `1` or `-1`.
    pub vote: i64,
}

fn target(kind: &str, id: i64) -> HttpResult<(PostKind, i64)> {
    Ok((kind.parse::<PostKind>()?, id))
}

#[utoipa::path(
    get,
    path = "/api/v1/vote/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`question` or `answer`"),
        ("id" = i64, Path, description = "Post id"),
        ViewerParams
    ),
    responses(
        (status = 200, description = "Vote count, score and the viewer's vote.", body = VoteTallyDto),
        (status = 400, description = "Unknown post kind.", body = ErrorResponse)
    ),
    tag = "Votes"
)]
pub async fn get_tally(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path((kind, id)): Path<(String, i64)>,
    Query(viewer): Query<ViewerParams>,
) -> HttpResult<Json<VoteTallyDto>> {
    let (kind, target_id) = target(&kind, id)?;
    state
        .services
        .vote_queries
        .get_tally(GetTallyQuery {
            kind,
            target_id,
            viewer: viewer.user_id.or(actor.user_id()),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/vote/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`question` or `answer`"),
        ("id" = i64, Path, description = "Post id")
    ),
    request_body = CastVoteRequest,
    responses(
        (status = 200, description = "Vote recorded; tally after the change.", body = VoteTallyDto),
        (status = 400, description = "Vote value other than 1 or -1.", body = ErrorResponse),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Votes"
)]
pub async fn cast_vote(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((kind, id)): Path<(String, i64)>,
    Json(payload): Json<CastVoteRequest>,
) -> HttpResult<Json<VoteTallyDto>> {
    let (kind, target_id) = target(&kind, id)?;
    state
        .services
        .vote_commands
        .cast_vote(
            &user,
            CastVoteCommand {
                kind,
                target_id,
                value: payload.vote,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/vote/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "`question` or `answer`"),
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Vote removed; tally after the change.", body = VoteTallyDto),
        (status = 404, description = "Post not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Votes"
)]
pub async fn retract_vote(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((kind, id)): Path<(String, i64)>,
) -> HttpResult<Json<VoteTallyDto>> {
    let (kind, target_id) = target(&kind, id)?;
    state
        .services
        .vote_commands
        .retract_vote(&user, RetractVoteCommand { kind, target_id })
        .await
        .into_http()
        .map(Json)
}
