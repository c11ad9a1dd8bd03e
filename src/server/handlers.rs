use super::{
    page::{self, Outcome},
    types::{GenerateResponse, ModelResponse},
};
use crate::{
    Error, Result,
    form::FormInput,
    generation::{GeneratedContent, ResumeWriter},
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Either a writer bound to the resolved model, or why no model could be resolved.
pub enum Readiness {
    Ready(ResumeWriter),
    Halted(String),
}

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<Readiness>,
}

impl AppState {
    pub fn ready(writer: ResumeWriter) -> Self {
        Self {
            readiness: Arc::new(Readiness::Ready(writer)),
        }
    }

    pub fn halted(cause: impl Into<String>) -> Self {
        Self {
            readiness: Arc::new(Readiness::Halted(cause.into())),
        }
    }

    fn writer(&self) -> Result<&ResumeWriter> {
        match self.readiness.as_ref() {
            Readiness::Ready(writer) => Ok(writer),
            Readiness::Halted(cause) => Err(Error::no_model(cause.clone())),
        }
    }
}

fn halted_page(cause: &str) -> Response {
    let message = Error::no_model(cause).to_string();
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Html(page::render_halted(&message)),
    )
        .into_response()
}

pub async fn index(State(state): State<AppState>) -> Response {
    match state.readiness.as_ref() {
        Readiness::Ready(writer) => {
            Html(page::render_form(writer.model(), &FormInput::default(), None)).into_response()
        }
        Readiness::Halted(cause) => halted_page(cause),
    }
}

pub async fn submit(State(state): State<AppState>, Form(form): Form<FormInput>) -> Response {
    let writer = match state.readiness.as_ref() {
        Readiness::Ready(writer) => writer,
        Readiness::Halted(cause) => return halted_page(cause),
    };

    let outcome = match run_submission(writer, &form).await {
        Ok(content) => Outcome::Generated(content),
        Err(Error::Validation(message)) => Outcome::Warning(message),
        Err(e) => Outcome::Error(e.to_string()),
    };

    Html(page::render_form(writer.model(), &form, Some(&outcome))).into_response()
}

pub async fn generate(
    State(state): State<AppState>,
    Json(form): Json<FormInput>,
) -> Result<Json<GenerateResponse>> {
    let writer = state.writer()?;
    let content = run_submission(writer, &form).await?;

    Ok(Json(GenerateResponse {
        model: writer.model().to_string(),
        bullets: content.bullets,
        bio: content.bio,
        generated_at: chrono::Utc::now(),
    }))
}

pub async fn model(State(state): State<AppState>) -> Result<Json<ModelResponse>> {
    let writer = state.writer()?;
    Ok(Json(ModelResponse {
        model: writer.model().to_string(),
    }))
}

pub async fn health() -> &'static str {
    "ok"
}

async fn run_submission(
    writer: &ResumeWriter,
    form: &FormInput,
) -> Result<GeneratedContent> {
    let submission_id = Uuid::new_v4();

    let input = form.validate().inspect_err(|_| {
        warn!("Submission {} rejected: experience is empty", submission_id);
    })?;

    info!(
        "Submission {} generating with {} ({:?})",
        submission_id,
        writer.model(),
        writer.mode()
    );

    let content = writer.generate(&input).await?;
    info!("Submission {} completed", submission_id);

    Ok(content)
}
