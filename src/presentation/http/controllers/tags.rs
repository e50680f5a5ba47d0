// src/presentation/http/controllers/tags.rs
use crate::application::{
    commands::tags::UpdateTagInfoCommand,
    dto::{PageParams, TagDto, TagListDto},
    queries::tags::ListTagsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TagSearchParams {
    /// Name prefix filter.
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTagRequest {
    pub info_tag: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/tag",
    params(PageParams, TagSearchParams),
    responses(
        (status = 200, description = "Tags ordered by name.", body = TagListDto)
    ),
    tag = "Tags"
)]
pub async fn list_tags(
    Extension(state): Extension<HttpState>,
    Query(page): Query<PageParams>,
    Query(search): Query<TagSearchParams>,
) -> HttpResult<Json<TagListDto>> {
    state
        .services
        .tag_queries
        .list_tags(ListTagsQuery {
            page: page.into(),
            prefix: search.q,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/tag/{id}",
    params(("id" = i64, Path, description = "Tag id")),
    responses(
        (status = 200, description = "Tag with its question count.", body = TagDto),
        (status = 404, description = "Tag not found.", body = ErrorResponse)
    ),
    tag = "Tags"
)]
pub async fn get_tag(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .tag_queries
        .get_tag(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/tag/{id}",
    params(("id" = i64, Path, description = "Tag id")),
    request_body = UpdateTagRequest,
    responses(
        (status = 200, description = "Tag description updated.", body = TagDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Tag not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Tags"
)]
pub async fn update_tag(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTagRequest>,
) -> HttpResult<Json<TagDto>> {
    state
        .services
        .tag_commands
        .update_info(
            &user,
            UpdateTagInfoCommand {
                id,
                info: payload.info_tag,
            },
        )
        .await
        .into_http()
        .map(Json)
}
