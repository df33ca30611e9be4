pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé
        .route("/ml/parse-resume", post(handlers::handle_parse_resume))
        .route("/ml/analyze-text", post(handlers::handle_analyze_text))
        // Matching & classification
        .route("/ml/match-job", post(handlers::handle_match_job))
        .route(
            "/ml/match-job-description",
            post(handlers::handle_match_job_description),
        )
        .route("/ml/classify-role", post(handlers::handle_classify_role))
        // Interview
        .route(
            "/ml/generate-questions",
            post(handlers::handle_generate_questions),
        )
        .route("/ml/evaluate-answer", post(handlers::handle_evaluate_answer))
        .route(
            "/ml/interview-summary",
            post(handlers::handle_interview_summary),
        )
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::knowledge::KnowledgeBase;

    const BOUNDARY: &str = "skillscan-test-boundary";

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            knowledge: Arc::new(KnowledgeBase::builtin().unwrap()),
        })
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    async fn post_upload(field: &str, filename: &str, content: &str) -> (StatusCode, Value) {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/ml/parse-resume")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "skillscan-api");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_parse_resume_text_upload() {
        let (status, json) = post_upload(
            "file",
            "cv.txt",
            "Jane Doe\njane@example.com\nReact, TypeScript, HTML, CSS",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["extractedData"]["name"], "Jane Doe");
        assert_eq!(json["extractedData"]["email"], "jane@example.com");
        assert_eq!(json["classification"]["role"], "Frontend Developer");
    }

    #[tokio::test]
    async fn test_parse_resume_unreadable_upload_is_degenerate() {
        let (status, json) = post_upload("file", "cv.pdf", "definitely not a pdf").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["analysis"]["score"], 0);
        assert_eq!(
            json["extractedData"]["experience"],
            "Unable to extract text from resume"
        );
        assert_eq!(json["classification"]["role"], "General");
    }

    #[tokio::test]
    async fn test_parse_resume_requires_file_part() {
        let (status, json) = post_upload("attachment", "cv.txt", "Jane Doe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"]["message"], "file is required");
    }

    #[tokio::test]
    async fn test_analyze_text() {
        let (status, json) = post_json("/ml/analyze-text", json!({"text": ""})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["analysis"]["score"], 0);
        assert_eq!(json["extractedData"]["skills"], json!([]));
    }

    #[tokio::test]
    async fn test_match_job_by_role() {
        let (status, json) = post_json(
            "/ml/match-job",
            json!({"skills": ["React", "HTML", "CSS"], "role": "Frontend Developer"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["matchScore"].as_f64().unwrap() > 0.0);
        assert!(json["recommendations"].is_array());
        assert_eq!(json["missingSkills"].as_array().unwrap().len() as u64
            + json["totalMatching"].as_u64().unwrap(),
            json["totalRequired"].as_u64().unwrap());
    }

    #[tokio::test]
    async fn test_match_job_requires_target() {
        let (status, json) = post_json("/ml/match-job", json!({"skills": ["react"]})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["error"]["message"],
            "either role or jobDescription is required"
        );
    }

    #[tokio::test]
    async fn test_match_job_description() {
        let (status, json) = post_json(
            "/ml/match-job-description",
            json!({"resumeSkills": ["React", "Docker"], "jobDescription": "React, Docker and AWS"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["totalRequired"], 3);
        assert_eq!(json["totalMatching"], 2);
        assert_eq!(json["missingSkills"], json!(["aws"]));
        assert_eq!(json["matchScore"], 66.7);
    }

    #[tokio::test]
    async fn test_match_job_description_with_both_skill_keys() {
        let (status, json) = post_json(
            "/ml/match-job-description",
            json!({"skills": ["java"], "resumeSkills": ["React"], "jobDescription": "React"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matchScore"], 100.0);
    }

    #[tokio::test]
    async fn test_match_job_description_without_requirements() {
        let (status, json) = post_json(
            "/ml/match-job-description",
            json!({"resumeSkills": ["React"], "jobDescription": "Friendly team, nice office"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matchScore"], 0.0);
        assert_eq!(
            json["recommendations"],
            json!(["Unable to extract requirements from job description"])
        );
    }

    #[tokio::test]
    async fn test_classify_role() {
        let (status, json) =
            post_json("/ml/classify-role", json!({"skills": ["React", "Node.js"]})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["role"], "Full Stack Developer");
        assert_eq!(json["confidence"], 20.0);

        let (status, json) = post_json("/ml/classify-role", json!({"skills": []})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["role"], "General");
        assert_eq!(json["confidence"], 0.0);
    }

    #[tokio::test]
    async fn test_generate_questions() {
        let (status, json) = post_json(
            "/ml/generate-questions",
            json!({"role": "Backend Developer", "skills": ["python"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let total = json["totalQuestions"].as_u64().unwrap();
        assert!((10..=12).contains(&total));
        assert_eq!(json["questions"].as_array().unwrap().len() as u64, total);
        assert_eq!(json["role"], "Backend Developer");
    }

    #[tokio::test]
    async fn test_generate_questions_requires_role() {
        let (status, _) = post_json("/ml/generate-questions", json!({"role": "  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_evaluate_answer() {
        let (status, json) = post_json(
            "/ml/evaluate-answer",
            json!({"question": "Tell me about yourself", "answer": "short", "role": "Frontend Developer"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["score"], 0);
        assert_eq!(
            json["feedback"],
            "Answer is too short. Please provide more details."
        );

        let (status, _) =
            post_json("/ml/evaluate-answer", json!({"question": "q", "answer": ""})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_interview_summary() {
        let (status, json) = post_json(
            "/ml/interview-summary",
            json!({"evaluations": [
                {"score": 80, "feedback": "", "keywords": []},
                {"score": 65, "feedback": "", "keywords": []}
            ]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["answered"], 2);
        assert_eq!(json["overallScore"], 73);
    }
}
