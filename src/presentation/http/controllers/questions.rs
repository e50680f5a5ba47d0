// src/presentation/http/controllers/questions.rs
use crate::application::{
    commands::questions::{CreateQuestionCommand, DeleteQuestionCommand, UpdateQuestionCommand},
    dto::{PageParams, QuestionDto, QuestionListDto},
    queries::questions::{
        GetQuestionQuery, ListQuestionsByOwnerQuery, ListQuestionsByTagQuery, ListQuestionsQuery,
    },
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
pub struct CreateQuestionRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuestionRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Omit to keep the current tags.
    pub tags: Option<Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/api/v1/question",
    params(PageParams),
    responses(
        (status = 200, description = "Questions, newest first.", body = QuestionListDto)
    ),
    tag = "Questions"
)]
pub async fn list_questions(
    Extension(state): Extension<HttpState>,
    Query(page): Query<PageParams>,
) -> HttpResult<Json<QuestionListDto>> {
    state
        .services
        .question_queries
        .list_questions(ListQuestionsQuery { page: page.into() })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/question/{id}",
    params(("id" = i64, Path, description = "Question id"), ViewerParams),
    responses(
        (status = 200, description = "Question with vote tally.", body = QuestionDto),
        (status = 404, description = "Question not found.", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn get_question(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
    Query(viewer): Query<ViewerParams>,
) -> HttpResult<Json<QuestionDto>> {
    state
        .services
        .question_queries
        .get_question(GetQuestionQuery {
            id,
            viewer: viewer.user_id.or(actor.user_id()),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/question/new",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created.", body = QuestionDto),
        (status = 400, description = "Invalid title, content or tag.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Questions"
)]
pub async fn create_question(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateQuestionRequest>,
) -> HttpResult<(StatusCode, Json<QuestionDto>)> {
    let command = CreateQuestionCommand {
        title: payload.title,
        content: payload.content,
        tags: payload.tags,
    };

    let question = state
        .services
        .question_commands
        .create_question(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    put,
    path = "/api/v1/question/update/{id}",
    params(("id" = i64, Path, description = "Question id")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "Question updated.", body = QuestionDto),
        (status = 401, description = "Not the question owner.", body = ErrorResponse),
        (status = 404, description = "Question not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Questions"
)]
pub async fn update_question(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> HttpResult<Json<QuestionDto>> {
    let command = UpdateQuestionCommand {
        id,
        title: payload.title,
        content: payload.content,
        tags: payload.tags,
    };

    state
        .services
        .question_commands
        .update_question(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/question/delete/{id}",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question and its answers removed.", body = DeletedResponse),
        (status = 401, description = "Not the question owner.", body = ErrorResponse),
        (status = 404, description = "Question not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Questions"
)]
pub async fn delete_question(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedResponse>> {
    let deleted = state
        .services
        .question_commands
        .delete_question(&user, DeleteQuestionCommand { id })
        .await
        .into_http()?;

    Ok(Json(DeletedResponse {
        id: deleted.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/question/tag/{tag_id}",
    params(("tag_id" = i64, Path, description = "Tag id"), PageParams),
    responses(
        (status = 200, description = "Questions carrying the tag.", body = QuestionListDto),
        (status = 404, description = "Tag not found.", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn list_questions_by_tag(
    Extension(state): Extension<HttpState>,
    Path(tag_id): Path<i64>,
    Query(page): Query<PageParams>,
) -> HttpResult<Json<QuestionListDto>> {
    state
        .services
        .question_queries
        .list_questions_by_tag(ListQuestionsByTagQuery {
            tag_id,
            page: page.into(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/question/user/{user_id}",
    params(("user_id" = i64, Path, description = "Author id"), LimitParams),
    responses(
        (status = 200, description = "Latest questions by the user.", body = [QuestionDto])
    ),
    tag = "Questions"
)]
pub async fn list_questions_by_owner(
    Extension(state): Extension<HttpState>,
    Path(owner_id): Path<i64>,
    Query(params): Query<LimitParams>,
) -> HttpResult<Json<Vec<QuestionDto>>> {
    state
        .services
        .question_queries
        .list_questions_by_owner(ListQuestionsByOwnerQuery {
            owner_id,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
