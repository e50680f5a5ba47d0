// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, PageParams, UserDto, UserListDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created.", body = UserDto),
        (status = 400, description = "Username or password rejected.", body = ErrorResponse),
        (status = 409, description = "Username taken.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let command = RegisterUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let user = state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Bearer token issued.", body = LoginResponse),
        (status = 401, description = "Invalid credentials.", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "The authenticated user.", body = UserDto),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/user",
    params(PageParams),
    responses(
        (status = 200, description = "Users, highest reputation first.", body = UserListDto)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Query(page): Query<PageParams>,
) -> HttpResult<Json<UserListDto>> {
    state
        .services
        .user_queries
        .list_users(page.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Public user record.", body = UserDto),
        (status = 404, description = "User not found.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(id)
        .await
        .into_http()
        .map(Json)
}
