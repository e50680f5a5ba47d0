// src/presentation/http/openapi.rs
use crate::application::dto::{
    AnswerDto, AnswerListDto, AuthTokenDto, CommentDto, PageParams, PostRefDto, QuestionDto,
    QuestionListDto, TagDto, TagListDto, UserDto, UserListDto, UserSummaryDto, VoteDto,
    VoteTallyDto,
};
use crate::presentation::http::controllers::{
    DeletedResponse, answers, comments, questions, tags, users, votes,
};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::register,
        users::login,
        users::profile,
        users::list_users,
        users::get_user,
        questions::list_questions,
        questions::get_question,
        questions::create_question,
        questions::update_question,
        questions::delete_question,
        questions::list_questions_by_tag,
        questions::list_questions_by_owner,
        answers::list_answers,
        answers::create_answer,
        answers::toggle_accept,
        answers::update_answer,
        answers::delete_answer,
        answers::get_answer,
        answers::list_answers_by_owner,
        votes::get_tally,
        votes::cast_vote,
        votes::retract_vote,
        comments::list_comments,
        comments::create_comment,
        tags::list_tags,
        tags::get_tag,
        tags::update_tag,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            DeletedResponse,
            ErrorResponse,
            PageParams,
            users::RegisterRequest,
            users::LoginRequest,
            users::LoginResponse,
            questions::CreateQuestionRequest,
            questions::UpdateQuestionRequest,
            answers::CreateAnswerRequest,
            answers::UpdateAnswerRequest,
            votes::CastVoteRequest,
            comments::CreateCommentRequest,
            tags::UpdateTagRequest,
            AuthTokenDto,
            UserDto,
            UserSummaryDto,
            UserListDto,
            QuestionDto,
            QuestionListDto,
            AnswerDto,
            AnswerListDto,
            TagDto,
            TagListDto,
            VoteDto,
            VoteTallyDto,
            PostRefDto,
            CommentDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration and bearer tokens"),
        (name = "Users", description = "Public user records"),
        (name = "Questions", description = "Questions and their tags"),
        (name = "Answers", description = "Answers and acceptance"),
        (name = "Votes", description = "Up and down votes on questions and answers"),
        (name = "Comments", description = "Comments on questions and answers"),
        (name = "Tags", description = "Tag catalogue"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Overflow API",
        description = "Question and answer backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let url = env::var("PUBLIC_API_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        servers.push(Server::new(url));
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default
/// [`DEFAULT_SNAPSHOT_PATH`]) and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
