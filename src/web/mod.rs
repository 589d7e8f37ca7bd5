// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::types::{ErrorDetail, MatchRequest, MatchResultModel, ResumeModel};
use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[post("/parse-resume", data = "<upload>")]
pub async fn parse_resume(
    upload: Form<ResumeUploadForm<'_>>,
) -> Result<Json<ResumeModel>, Custom<Json<ErrorDetail>>> {
    handlers::parse_resume_handler(upload).await
}

#[post("/match-resume", data = "<request>")]
pub async fn match_resume(request: Json<MatchRequest>) -> Json<MatchResultModel> {
    handlers::match_resume_handler(request).await
}

#[get("/")]
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers keep the detail-bearing contract on framework-level failures.
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorDetail> {
    Json(ErrorDetail::new("Invalid request format"))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorDetail> {
    Json(ErrorDetail::new("Resource not found"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorDetail> {
    Json(ErrorDetail::new("Request body does not match the expected shape"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorDetail> {
    Json(ErrorDetail::new("Internal server error"))
}

pub fn build_rocket(port: u16) -> Rocket<Build> {
    let limits = Limits::default()
        .limit("file", 10.mebibytes())
        .limit("data-form", 12.mebibytes());
    let figment = rocket::Config::figment()
        .merge(("port", port))
        .merge(("address", "0.0.0.0"))
        .merge(("limits", limits));

    rocket::custom(figment)
        .attach(Cors)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount("/", routes![parse_resume, match_resume, health, options])
}

pub async fn start_web_server(port: u16) -> Result<()> {
    info!("Starting resume matching API server on port {}", port);
    let _rocket = build_rocket(port).launch().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;

    async fn client() -> Client {
        Client::tracked(build_rocket(0)).await.expect("valid rocket")
    }

    fn multipart_resume(content_type: &str, file_name: &str, body: &str) -> (ContentType, String) {
        let boundary = "X-RESUME-BOUNDARY";
        let payload = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {body}\r\n\
             --{boundary}--\r\n"
        );
        let header = ContentType::new("multipart", "form-data").with_params(("boundary", boundary));
        (header, payload)
    }

    #[rocket::async_test]
    async fn test_health_endpoint() {
        let client = client().await;
        let response = client.get("/").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().await.expect("body"),
            r#"{"status":"OK"}"#
        );
    }

    #[rocket::async_test]
    async fn test_parse_resume_from_text_upload() {
        let client = client().await;
        let (header, payload) = multipart_resume(
            "text/plain",
            "resume.txt",
            "Jane Doe\njane@x.com\nWorked with Python and SQL",
        );

        let response = client
            .post("/parse-resume")
            .header(header)
            .body(payload)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let resume: ResumeModel =
            serde_json::from_str(&response.into_string().await.expect("body")).expect("model");
        assert_eq!(resume.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(resume.contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(resume.skills, vec!["Python", "SQL"]);
    }

    #[rocket::async_test]
    async fn test_parse_resume_accepts_txt_with_generic_content_type() {
        let client = client().await;
        let (header, payload) = multipart_resume(
            "application/octet-stream",
            "resume.txt",
            "Jane Doe\njane@x.com\nWorked with Python and SQL",
        );

        let response = client
            .post("/parse-resume")
            .header(header)
            .body(payload)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let resume: ResumeModel =
            serde_json::from_str(&response.into_string().await.expect("body")).expect("model");
        assert_eq!(resume.skills, vec!["Python", "SQL"]);
    }

    #[rocket::async_test]
    async fn test_parse_resume_rejects_disallowed_extension() {
        let client = client().await;
        let (header, payload) = multipart_resume("text/plain", "resume.exe", "not a resume");

        let response = client
            .post("/parse-resume")
            .header(header)
            .body(payload)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let detail: ErrorDetail =
            serde_json::from_str(&response.into_string().await.expect("body")).expect("detail");
        assert_eq!(detail.detail, "Invalid file type");
    }

    #[rocket::async_test]
    async fn test_parse_resume_rejects_binary_formats_with_detail() {
        let client = client().await;
        let (header, payload) = multipart_resume("application/pdf", "resume.pdf", "%PDF-1.4");

        let response = client
            .post("/parse-resume")
            .header(header)
            .body(payload)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::InternalServerError);

        let detail: ErrorDetail =
            serde_json::from_str(&response.into_string().await.expect("body")).expect("detail");
        assert_eq!(detail.detail, "unsupported file");
    }

    #[rocket::async_test]
    async fn test_match_resume_endpoint() {
        let client = client().await;
        let body = serde_json::json!({
            "resume": {
                "contact": {"name": "Jane Doe", "email": "jane@x.com", "phone": ""},
                "skills": ["Python", "SQL"]
            },
            "job_title": "ML Engineer",
            "job_description": "Need Python and SQL"
        });

        let response = client
            .post("/match-resume")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let result: MatchResultModel =
            serde_json::from_str(&response.into_string().await.expect("body")).expect("model");
        assert!((0.0..=100.0).contains(&result.match_score));
        assert_eq!(result.matched_skills, vec!["Python", "SQL"]);
    }

    #[rocket::async_test]
    async fn test_unknown_route_carries_detail_body() {
        let client = client().await;
        let response = client.get("/nope").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);

        let detail: ErrorDetail =
            serde_json::from_str(&response.into_string().await.expect("body")).expect("detail");
        assert_eq!(detail.detail, "Resource not found");
    }
}
