// src/web/handlers.rs
//! Endpoint handlers for resume parsing and job matching

use crate::matching::engine::score_against;
use crate::matching::parser::parse_resume;
use crate::types::{ErrorDetail, MatchRequest, MatchResultModel, ResumeModel};
use crate::web::types::ResumeUploadForm;
use crate::workflow::ALLOWED_EXTENSIONS;
use rocket::form::Form;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use tracing::{error, info};

const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

type DetailError = Custom<Json<ErrorDetail>>;

fn bad_request(detail: impl Into<String>) -> DetailError {
    Custom(Status::BadRequest, Json(ErrorDetail::new(detail)))
}

fn internal_error(detail: impl Into<String>) -> DetailError {
    Custom(Status::InternalServerError, Json(ErrorDetail::new(detail)))
}

/// Accept an uploaded resume, extract its text, and answer with the
/// structured model. Non-2xx replies always carry a `detail` body.
pub async fn parse_resume_handler(
    mut upload: Form<ResumeUploadForm<'_>>,
) -> Result<Json<ResumeModel>, DetailError> {
    // Acceptance follows the uploaded filename's extension. The raw name is
    // only inspected for its extension, never used as a path.
    let file_name = upload
        .file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string())
        .unwrap_or_default();
    let extension =
        accepted_extension(&file_name).ok_or_else(|| bad_request("Invalid file type"))?;

    if upload.file.len() > MAX_UPLOAD_BYTES {
        return Err(bad_request("File size exceeds 10MB limit"));
    }

    let temp_path =
        std::env::temp_dir().join(format!("resume_upload_{}.{extension}", uuid::Uuid::new_v4()));
    if let Err(e) = upload.file.persist_to(&temp_path).await {
        error!("Failed to save uploaded resume: {}", e);
        return Err(internal_error("Failed to process uploaded file"));
    }

    let bytes = tokio::fs::read(&temp_path).await;
    let _ = tokio::fs::remove_file(&temp_path).await;
    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to read uploaded resume: {}", e);
            return Err(internal_error("Failed to process uploaded file"));
        }
    };

    let text = extract_text(extension, bytes).map_err(internal_error)?;
    let resume = parse_resume(&text);
    info!(
        "Parsed .{} resume: {} skill(s) extracted",
        extension,
        resume.skills.len()
    );
    Ok(Json(resume))
}

/// Score the supplied resume against a job title/description.
pub async fn match_resume_handler(request: Json<MatchRequest>) -> Json<MatchResultModel> {
    let request = request.into_inner();
    let (match_score, matched_skills) = score_against(
        &request.resume.skills,
        &request.job_title,
        &request.job_description,
    );
    info!(
        "Matched resume against '{}': score {}",
        request.job_title, match_score
    );
    Json(MatchResultModel {
        match_score,
        matched_skills,
    })
}

/// Map the uploaded filename onto one of the accepted extensions.
fn accepted_extension(file_name: &str) -> Option<&'static str> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)?;
    ALLOWED_EXTENSIONS
        .iter()
        .find(|allowed| **allowed == extension)
        .copied()
}

/// Text extraction. Binary resume formats are accepted by the wire contract
/// but extraction for them lives outside this service.
fn extract_text(extension: &str, bytes: Vec<u8>) -> Result<String, String> {
    match extension {
        "txt" => String::from_utf8(bytes).map_err(|_| "resume file is not valid UTF-8 text".to_string()),
        _ => Err("unsupported file".to_string()),
    }
}
