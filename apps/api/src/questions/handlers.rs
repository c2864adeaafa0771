//! Axum route handler for the question-generation endpoint.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::extract_resume_text;
use crate::models::question::Question;
use crate::questions::chunker::chunk_text;
use crate::questions::parser::extract_questions;
use crate::questions::prompts::{compose_question_prompt, QUESTION_SYSTEM};
use crate::questions::scorer::select_relevant_chunks;
use crate::questions::validation::{
    validate_file_size, validate_job_description, validate_pdf_filename,
    validate_resume_text_length,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub questions: Vec<Question>,
}

struct UploadedForm {
    filename: String,
    resume_bytes: Vec<u8>,
    job_description: String,
}

/// POST /generate-questions
///
/// Multipart fields: `resume` (PDF) and `job_description` (text).
/// Pipeline per request, strictly linear:
/// validate → extract → chunk → select → compose → call model → parse.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let UploadedForm {
        filename,
        resume_bytes,
        job_description,
    } = read_form(multipart).await?;

    info!(
        "Received request: resume={}, job_desc_length={}",
        filename,
        job_description.len()
    );

    validate_pdf_filename(&filename)?;
    validate_file_size(resume_bytes.len(), &state.config.limits)?;
    validate_job_description(&job_description, &state.config.limits)?;

    // PDF extraction is CPU-bound; keep it off the async worker threads.
    let resume_text = tokio::task::spawn_blocking(move || extract_resume_text(&resume_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task panicked: {e}")))??;
    info!("Extracted {} characters from PDF", resume_text.len());

    validate_resume_text_length(&resume_text, &state.config.limits)?;

    let questions = run_pipeline(&state, &resume_text, &job_description).await?;
    info!("Successfully generated {} questions", questions.len());

    Ok(Json(GenerateQuestionsResponse { questions }))
}

/// The post-extraction pipeline: chunk → select → compose → call model →
/// parse. Split out so it can be exercised against a stubbed model.
async fn run_pipeline(
    state: &AppState,
    resume_text: &str,
    job_description: &str,
) -> Result<Vec<Question>, AppError> {
    let chunks = chunk_text(resume_text, &state.chunker);
    if chunks.is_empty() {
        return Err(AppError::Extraction(
            "resume text produced no chunks".to_string(),
        ));
    }
    info!("Created {} chunks", chunks.len());

    let selected = select_relevant_chunks(chunks, job_description, &state.selector);
    info!("Selected {} relevant chunks", selected.len());

    let chunk_texts: Vec<String> = selected.into_iter().map(|c| c.text).collect();
    let prompt = compose_question_prompt(job_description, &chunk_texts);

    let reply = state
        .llm
        .call(&prompt, QUESTION_SYSTEM)
        .await
        .map_err(|e| AppError::RemoteModel(e.to_string()))?;

    extract_questions(&reply)
}

/// Reads the two expected multipart fields. Missing or unreadable fields
/// are client errors.
async fn read_form(mut multipart: Multipart) -> Result<UploadedForm, AppError> {
    let mut filename = None;
    let mut resume_bytes = None;
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                filename = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                resume_bytes = Some(bytes.to_vec());
            }
            Some("job_description") => {
                let text = field.text().await.map_err(multipart_error)?;
                job_description = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    Ok(UploadedForm {
        filename: filename
            .ok_or_else(|| AppError::Validation("Missing 'resume' file field.".to_string()))?,
        resume_bytes: resume_bytes
            .ok_or_else(|| AppError::Validation("Missing 'resume' file field.".to_string()))?,
        job_description: job_description.ok_or_else(|| {
            AppError::Validation("Missing 'job_description' field.".to_string())
        })?,
    })
}

/// A body exceeding the transport-layer limit surfaces from the multipart
/// reader as a 413; everything else is a malformed form.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Request body exceeds the upload size limit.".to_string())
    } else {
        AppError::Validation(format!("invalid multipart form: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Limits};
    use crate::llm_client::LlmClient;
    use crate::questions::chunker::ChunkerConfig;
    use crate::questions::scorer::SelectorConfig;
    use httpmock::prelude::*;

    const RESUME_TEXT: &str = "Senior backend engineer with six years of experience building \
        distributed services in Rust and Go. Designed an event-driven ingestion pipeline \
        processing 40k messages per second. Led the migration of a monolith to microservices, \
        cutting deploy time from hours to minutes. Mentored four junior engineers.";

    const JOB_DESCRIPTION: &str =
        "We are hiring a senior Rust engineer to build distributed backend services.";

    fn state_for(server_url: String) -> AppState {
        let config = Config {
            groq_api_key: "test-key".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            llm_timeout_secs: 5,
            limits: Limits::default(),
        };
        AppState {
            llm: LlmClient::with_base_url(
                config.groq_api_key.clone(),
                config.llm_timeout_secs,
                server_url,
            ),
            config,
            chunker: ChunkerConfig::default(),
            selector: SelectorConfig::default(),
        }
    }

    fn chat_reply(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 100, "completion_tokens": 50}
        })
    }

    #[tokio::test]
    async fn test_pipeline_returns_stubbed_questions() {
        let server = MockServer::start();
        let stub = "```json\n[\
            {\"category\":\"Technical\",\"question\":\"How did you size the ingestion pipeline?\"},\
            {\"category\":\"Behavioral\",\"question\":\"Tell me about mentoring juniors.\"},\
            {\"category\":\"Role-Specific\",\"question\":\"Why Rust for this service?\"}\
        ]\n```";
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(chat_reply(stub));
        });

        let state = state_for(server.url("/"));
        let questions = run_pipeline(&state, RESUME_TEXT, JOB_DESCRIPTION)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].category, "Technical");
    }

    #[tokio::test]
    async fn test_pipeline_model_failure_is_remote_model_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(500).body("upstream exploded");
        });

        let state = state_for(server.url("/"));
        let err = run_pipeline(&state, RESUME_TEXT, JOB_DESCRIPTION)
            .await
            .unwrap_err();

        api_mock.assert();
        assert!(matches!(err, AppError::RemoteModel(_)));
    }

    #[tokio::test]
    async fn test_pipeline_unparsable_reply_is_malformed_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(chat_reply("Sorry, I cannot produce JSON today."));
        });

        let state = state_for(server.url("/"));
        let err = run_pipeline(&state, RESUME_TEXT, JOB_DESCRIPTION)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_pipeline_empty_resume_is_extraction_error() {
        let server = MockServer::start();
        let state = state_for(server.url("/"));
        let err = run_pipeline(&state, "   ", JOB_DESCRIPTION).await.unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
