// src/web/types.rs

use rocket::form::FromForm;
use rocket::fs::TempFile;
use serde::Serialize;

/// Multipart body of `POST /parse-resume`: a single file field.
#[derive(FromForm)]
pub struct ResumeUploadForm<'f> {
    pub file: TempFile<'f>,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}
