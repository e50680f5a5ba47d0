// src/presentation/http/controllers/answers.rs
use crate::application::{
    commands::answers::{
        CreateAnswerCommand, DeleteAnswerCommand, ToggleAcceptCommand, UpdateAnswerCommand,
    },
    dto::{AnswerDto, AnswerListDto, PageParams},
    queries::answers::{GetAnswerQuery, ListAnswersByOwnerQuery, ListAnswersQuery},
};
use crate::presentation::http::controllers::{DeletedResponse, LimitParams, ViewerParams};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAnswerRequest {
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAnswerRequest {
    /// Omitted or blank leaves the answer untouched.
    pub content: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/answer/{question_id}",
    params(("question_id" = i64, Path, description = "Question id"), PageParams, ViewerParams),
    responses(
        (status = 200, description = "Answers, oldest first.", body = AnswerListDto),
        (status = 404, description = "Question not found.", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn list_answers(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(question_id): Path<i64>,
    Query(page): Query<PageParams>,
    Query(viewer): Query<ViewerParams>,
) -> HttpResult<Json<AnswerListDto>> {
    state
        .services
        .answer_queries
        .list_answers(ListAnswersQuery {
            question_id,
            page: page.into(),
            viewer: viewer.user_id.or(actor.user_id()),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/answer/{question_id}",
    params(("question_id" = i64, Path, description = "Question id")),
    request_body = CreateAnswerRequest,
    responses(
        (status = 201, description = "Answer created.", body = AnswerDto),
        (status = 400, description = "Empty content or unknown question.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Answers"
)]
pub async fn create_answer(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(question_id): Path<i64>,
    Json(payload): Json<CreateAnswerRequest>,
) -> HttpResult<(StatusCode, Json<AnswerDto>)> {
    let command = CreateAnswerCommand {
        question_id,
        content: payload.content,
    };

    let answer = state
        .services
        .answer_commands
        .create_answer(&user, command)
        .await
        .missing_as_bad_request()?;

    Ok((StatusCode::CREATED, Json(answer)))
}

#[utoipa::path(
    patch,
    path = "/api/v1/answer/accept/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 204, description = "Acceptance toggled."),
        (status = 400, description = "Answer, question or author missing.", body = ErrorResponse),
        (status = 401, description = "Not the question owner.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Answers"
)]
pub async fn toggle_accept(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .answer_commands
        .toggle_accept(&user, ToggleAcceptCommand { id })
        .await
        .missing_as_bad_request()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v1/answer/update/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    request_body = UpdateAnswerRequest,
    responses(
        (status = 204, description = "Answer updated."),
        (status = 401, description = "Not the answer owner.", body = ErrorResponse),
        (status = 404, description = "Answer not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Answers"
)]
pub async fn update_answer(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAnswerRequest>,
) -> HttpResult<StatusCode> {
    state
        .services
        .answer_commands
        .update_answer(
            &user,
            UpdateAnswerCommand {
                id,
                content: payload.content,
            },
        )
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/answer/delete/{id}",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer removed with its comments and votes.", body = DeletedResponse),
        (status = 401, description = "Not the answer owner.", body = ErrorResponse),
        (status = 404, description = "Answer not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Answers"
)]
pub async fn delete_answer(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    let deleted = state
        .services
        .answer_commands
        .delete_answer(&user, DeleteAnswerCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse {
        id: deleted.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/answer/single/{id}",
    params(("id" = i64, Path, description = "Answer id"), ViewerParams),
    responses(
        (status = 200, description = "One answer with its author.", body = AnswerDto),
        (status = 404, description = "Answer not found.", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn get_answer(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Query(viewer): Query<ViewerParams>,
) -> HttpResult<Json<AnswerDto>> {
    state
        .services
        .answer_queries
        .get_answer(GetAnswerQuery {
            id,
            viewer: viewer.user_id.or(actor.user_id()),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/answer/user/{user_id}",
    params(("user_id" = i64, Path, description = "Author id"), LimitParams),
    responses(
        (status = 200, description = "Latest answers by the user.", body = [AnswerDto])
    ),
    tag = "Answers"
)]
pub async fn list_answers_by_owner(
    Extension(state): Extension<HttpState>,
    Path(owner_id): Path<i64>,
    Query(params): Query<LimitParams>,
) -> HttpResult<Json<Vec<AnswerDto>>> {
    state
        .services
        .answer_queries
        .list_answers_by_owner(ListAnswersByOwnerQuery {
            owner_id,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
