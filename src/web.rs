use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use handlebars::Handlebars;
use serde::Deserialize;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::server_config::ServerConfig;
use crate::tasks::repository::{TaskRepository, TaskRepositoryError};

#[derive(Clone)]
pub struct AppState {
    repository: Arc<dyn TaskRepository>,
    templates: Arc<Handlebars<'static>>,
}

impl AppState {
    pub fn new(repository: Arc<dyn TaskRepository>, templates: Handlebars<'static>) -> Self {
        Self {
            repository,
            templates: Arc::new(templates),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("title must not be empty")]
    MissingTitle,
    #[error("spreadsheet request failed")]
    Repository(error_stack::Report<TaskRepositoryError>),
    #[error("failed to render the task list")]
    Render(#[from] handlebars::RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingTitle => {
                (StatusCode::BAD_REQUEST, "title must not be empty".to_string()).into_response()
            }
            AppError::Repository(report) => {
                tracing::error!("spreadsheet request failed: {report:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("spreadsheet request failed: {report}"),
                )
                    .into_response()
            }
            AppError::Render(err) => {
                tracing::error!("template rendering failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to render the task list: {err}"),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct NewTaskForm {
    // An absent field behaves exactly like an empty one.
    #[serde(default)]
    title: String,
}

async fn list_tasks(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let tasks = state
        .repository
        .list_tasks()
        .await
        .map_err(AppError::Repository)?;

    tracing::debug!(count = tasks.len(), "rendering task list");

    let body = state
        .templates
        .render("index", &serde_json::json!({ "tasks": tasks }))?;

    Ok(Html(body))
}

async fn create_task(
    State(state): State<AppState>,
    Form(form): Form<NewTaskForm>,
) -> Result<Response, AppError> {
    if form.title.is_empty() {
        return Err(AppError::MissingTitle);
    }

    state
        .repository
        .append_task(&form.title)
        .await
        .map_err(AppError::Repository)?;

    // The list view recomputes the new row's id on the next load.
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_tasks))
        .route("/new", post(create_task))
        .with_state(state)
}

pub async fn run(
    repository: Arc<dyn TaskRepository>,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut templates = Handlebars::new();
    templates.register_templates_directory(".html", config.templates_dir.as_ref())?;

    let app = router(AppState::new(repository, templates));

    let listener = TcpListener::bind(config.bind_addr.as_ref()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
