//! Integration tests for resume upload and retrieval.

mod common;

use http::StatusCode;
use serde_json::json;

const MAX_SIZE: usize = 5 * 1024 * 1024;

#[tokio::test]
async fn test_upload_pdf_and_fetch_it_back() {
    let app = common::TestApp::new().await;

    let response = app
        .upload("resume", "cv.pdf", "application/pdf", b"%PDF-1.4 test")
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Resume uploaded successfully");
    assert_eq!(response.body["originalName"], "cv.pdf");
    assert_eq!(response.body["size"], 13);

    let url = response.body["url"].as_str().unwrap();
    let filename = response.body["filename"].as_str().unwrap();
    assert_eq!(url, format!("/uploads/{filename}"));
    assert_eq!(app.uploaded_file_count(), 1);

    let (status, content_type, bytes) = app.get_raw(url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/pdf"));
    assert_eq!(bytes, b"%PDF-1.4 test");
}

#[tokio::test]
async fn test_uploaded_url_round_trips_into_an_application() {
    let app = common::TestApp::new().await;
    let job = app.create_job().await;

    let upload = app
        .upload("resume", "cv.pdf", "application/pdf", b"%PDF-1.4")
        .await;
    let url = upload.body["url"].as_str().unwrap();

    let created = app
        .request(
            "POST",
            "/api/applications",
            Some(json!({
                "jobId": job["id"],
                "fullName": "A B",
                "email": "a@b.com",
                "phone": "1",
                "resumeUrl": url,
            })),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["resumeUrl"], url);
}

#[tokio::test]
async fn test_upload_wrong_declared_type_is_rejected() {
    let app = common::TestApp::new().await;

    let response = app
        .upload("resume", "cv.txt", "text/plain", b"plain text")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Only PDF, DOC, and DOCX files are allowed"
    );
    assert_eq!(response.body["allowedTypes"], json!(["PDF", "DOC", "DOCX"]));
    assert_eq!(app.uploaded_file_count(), 0);
}

#[tokio::test]
async fn test_upload_under_wrong_field_name_is_rejected() {
    let app = common::TestApp::new().await;

    let response = app
        .upload("attachment", "cv.pdf", "application/pdf", b"%PDF-1.4")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Unexpected field name. Use 'resume' as the field name"
    );
    assert_eq!(app.uploaded_file_count(), 0);
}

#[tokio::test]
async fn test_upload_of_exactly_five_mib_is_accepted() {
    let app = common::TestApp::new().await;

    let data = vec![0u8; MAX_SIZE];
    let response = app
        .upload("resume", "cv.pdf", "application/pdf", &data)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["size"], MAX_SIZE);
    assert_eq!(app.uploaded_file_count(), 1);
}

#[tokio::test]
async fn test_upload_one_byte_over_five_mib_is_rejected_with_no_file_on_disk() {
    let app = common::TestApp::new().await;

    let data = vec![0u8; MAX_SIZE + 1];
    let response = app
        .upload("resume", "cv.pdf", "application/pdf", &data)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "File too large. Maximum size is 5MB");
    assert_eq!(app.uploaded_file_count(), 0);
}

#[tokio::test]
async fn test_upload_past_the_transport_limit_still_reports_file_too_large() {
    let app = common::TestApp::new().await;

    // Large enough that the body limit trips while the field streams
    let data = vec![0u8; MAX_SIZE + 256 * 1024];
    let response = app
        .upload("resume", "cv.pdf", "application/pdf", &data)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "File too large. Maximum size is 5MB");
    assert_eq!(app.uploaded_file_count(), 0);
}

#[tokio::test]
async fn test_upload_with_interior_dots_in_name_serves_back() {
    let app = common::TestApp::new().await;

    let response = app
        .upload("resume", "my..cv.pdf", "application/pdf", b"%PDF-1.4")
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["originalName"], "my..cv.pdf");

    let url = response.body["url"].as_str().unwrap();
    let (status, content_type, bytes) = app.get_raw(url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/pdf"));
    assert_eq!(bytes, b"%PDF-1.4");
}

#[tokio::test]
async fn test_fetching_a_never_uploaded_file_is_not_found() {
    let app = common::TestApp::new().await;

    let (status, _, _) = app.get_raw("/uploads/nope.pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
