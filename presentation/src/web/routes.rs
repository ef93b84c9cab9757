//! HTTP routes for the web surface

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use qa_application::{AskQuestionUseCase, NoProgress};
use qa_domain::{Answer, Credential, DomainError, NormalizedQuestion, Question};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Shared, read-only state for every request
pub struct AppState {
    use_case: AskQuestionUseCase,
    credential: Option<Credential>,
}

impl AppState {
    pub fn new(use_case: AskQuestionUseCase, credential: Option<Credential>) -> Self {
        Self {
            use_case,
            credential,
        }
    }
}

type AppStateArc = Arc<AppState>;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub success: bool,
    pub preprocessing: NormalizedQuestion,
    pub answer: Answer,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error returned from a handler as `{"error": "..."}`
struct ApiError(StatusCode, String);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let status = match e {
            DomainError::EmptyQuestion => StatusCode::BAD_REQUEST,
            DomainError::MissingCredential | DomainError::UnknownProvider(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        ApiError(status, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(ErrorResponse { error: self.1 })).into_response()
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn ask(
    State(state): State<AppStateArc>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!("  Rejected /ask body: {}", rejection.body_text());
        ApiError(StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text())
    })?;

    let question = Question::try_new(request.question.trim()).ok_or(DomainError::EmptyQuestion)?;

    let credential = state.credential.as_ref().ok_or_else(|| {
        warn!("  /ask called but no API key is configured");
        DomainError::MissingCredential
    })?;

    let output = state
        .use_case
        .execute(&question, credential, &NoProgress)
        .await;

    info!(
        tokens = output.preprocessing.tokens.len(),
        failed = output.answer.is_failure(),
        "  Answered /ask"
    );

    Ok(Json(AskResponse {
        success: true,
        preprocessing: output.preprocessing,
        answer: output.answer,
    }))
}
