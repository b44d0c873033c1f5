//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance; they skip when
//! `DATABASE_URL` is not set. Auth and object storage are in-process fakes.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
    ADMIN_EMAIL, ADMIN_PASSWORD, MEMBER_EMAIL,
};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert!(response.headers().contains_key("x-request-id"));
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Admin Auth Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = LoginRequest {
        email: "Admin@LeoParadise.org".to_string(),
        password: ADMIN_PASSWORD.to_string(),
    };

    let response = server.post("/api/v1/admin/login", &request).await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(session.token_type, "Bearer");
    assert_eq!(session.user.email, ADMIN_EMAIL);

    let response = server
        .get_auth("/api/v1/admin/session", &session.access_token)
        .await
        .unwrap();
    let user: AdminUser = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.email, ADMIN_EMAIL);
    assert_eq!(user.id, session.user.id);
}

#[tokio::test]
async fn test_non_admin_login_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = LoginRequest {
        email: MEMBER_EMAIL.to_string(),
        password: ADMIN_PASSWORD.to_string(),
    };

    let response = server.post("/api/v1/admin/login", &request).await.unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "ACCOUNT_NOT_ALLOWED");
    assert_eq!(
        body.error.message,
        "This account is not allowed to access admin dashboard."
    );
}

#[tokio::test]
async fn test_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = LoginRequest {
        email: ADMIN_EMAIL.to_string(),
        password: "wrong".to_string(),
    };

    let response = server.post("/api/v1/admin/login", &request).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_admin_routes_require_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/admin/applications").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");

    let response = server
        .get_auth("/api/v1/admin/applications", &server.forged_token())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");

    let response = server
        .post_auth(
            "/api/v1/admin/projects",
            &server.member_token(),
            &project_body("Member Project"),
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body.error.code, "NOT_ADMIN");
    assert_eq!(
        body.error.message,
        "Only the configured admin account can perform this action."
    );
}

// ============================================================================
// Project Tests
// ============================================================================

#[tokio::test]
async fn test_project_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token();

    let response = server
        .post_auth("/api/v1/admin/projects", &token, &project_body("Elders Day"))
        .await
        .unwrap();
    let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(project.date, "July 2025");
    assert_eq!(project.gallery_images, vec!["3.jpg", "1.jpg", "2.jpg"]);
    assert!(!project.is_featured);
    assert_eq!(project.display_order, 0);

    let path = format!("/api/v1/projects/{}", project.id);
    let fetched: ProjectResponse = assert_json(server.get(&path).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(fetched.title, project.title);

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/projects/{}", project.id),
            &token,
            &json!({"completion_date": "2026-01-12", "category": ""}),
        )
        .await
        .unwrap();
    let updated: ProjectResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.date, "January 2026");
    assert_eq!(updated.category, None);

    let response = server
        .delete_auth(&format!("/api/v1/admin/projects/{}", project.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let code = assert_error(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(code, "UNKNOWN_PROJECT");
}

#[tokio::test]
async fn test_project_validation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token();

    let mut body = project_body("Bad Category");
    body["category"] = json!("Gardening");
    let response = server
        .post_auth("/api/v1/admin/projects", &token, &body)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let code = assert_error(
        server.get("/api/v1/projects/not-a-uuid").await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");

    let categories: Vec<String> = assert_json(
        server.get("/api/v1/project-categories").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(categories.iter().any(|c| c == "Fellowship"));
}

// ============================================================================
// Featured Tests
// ============================================================================

#[tokio::test]
async fn test_featured_projects() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token();

    let mut ids = Vec::new();
    for _ in 0..6 {
        let response = server
            .post_auth("/api/v1/admin/projects", &token, &project_body("Featured"))
            .await
            .unwrap();
        let project: ProjectResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(project.id);
    }

    let response = server
        .put_auth("/api/v1/admin/featured/projects", &token, &json!({ "ids": ids }))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "FEATURED_LIMIT_EXCEEDED");

    let chosen = vec![ids[3].clone(), ids[0].clone(), ids[5].clone()];
    let response = server
        .put_auth(
            "/api/v1/admin/featured/projects",
            &token,
            &json!({ "ids": chosen }),
        )
        .await
        .unwrap();
    let featured: Vec<FeaturedProjectResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let got: Vec<String> = featured.iter().map(|f| f.id.clone()).collect();
    assert_eq!(got, chosen);
    assert_eq!(featured[2].featured_order, 2);

    let public: Vec<FeaturedProjectResponse> = assert_json(
        server.get("/api/v1/featured/projects").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(public.len(), 3);

    let response = server
        .delete_auth(&format!("/api/v1/admin/projects/{}", ids[0]), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Membership Tests
// ============================================================================

#[tokio::test]
async fn test_membership_application_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/applications", &application_body(true))
        .await
        .unwrap();
    let receipt: ApplicationReceipt = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(receipt.status, "new");
    assert_eq!(
        receipt.message,
        "Thank you! Your application has been received."
    );

    let token = server.admin_token();
    let response = server
        .patch_auth(
            &format!("/api/v1/admin/applications/{}", receipt.id),
            &token,
            &json!({"status": "accepted", "admin_notes": "Welcome"}),
        )
        .await
        .unwrap();
    let reviewed: ApplicationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reviewed.status, "accepted");
    assert_eq!(reviewed.reviewer_email.as_deref(), Some(ADMIN_EMAIL));
    assert_eq!(reviewed.full_name, "Nimal Perera");
    assert!(reviewed.email.starts_with("applicant."));
    assert_eq!(reviewed.organization, None);

    let response = server
        .get_auth("/api/v1/admin/applications", &token)
        .await
        .unwrap();
    let all: Vec<ApplicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|a| a.id == receipt.id));
}

#[tokio::test]
async fn test_application_without_consent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = application_body(false);
    let email = body["email"].as_str().unwrap_or_default().to_lowercase();

    let response = server.post("/api/v1/applications", &body).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "CONSENT_REQUIRED");

    let response = server
        .get_auth("/api/v1/admin/applications", &server.admin_token())
        .await
        .unwrap();
    let all: Vec<ApplicationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().all(|a| a.email != email));
}

#[tokio::test]
async fn test_application_validation_details() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut body = application_body(true);
    body["age"] = json!(0);

    let response = server.post("/api/v1/applications", &body).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "VALIDATION_ERROR");
    assert!(error.error.details.is_some_and(|d| d.get("age").is_some()));
}

// ============================================================================
// Section Tests
// ============================================================================

#[tokio::test]
async fn test_faq_crud_and_active_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token();
    let question = format!("How do I join? {}", unique_suffix());

    let response = server
        .post_auth(
            "/api/v1/admin/faqs",
            &token,
            &json!({"question": question, "answer": "Use the membership form.", "display_order": 3}),
        )
        .await
        .unwrap();
    let faq: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = faq["id"].as_str().unwrap_or_default().to_string();

    let public: Vec<Value> = assert_json(server.get("/api/v1/faqs").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(public.iter().any(|f| f["id"] == id.as_str()));

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/faqs/{id}"),
            &token,
            &json!({"is_active": false}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let public: Vec<Value> = assert_json(server.get("/api/v1/faqs").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(public.iter().all(|f| f["id"] != id.as_str()));

    let admin: Vec<Value> = assert_json(
        server.get_auth("/api/v1/admin/faqs", &token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(admin.iter().any(|f| f["id"] == id.as_str()));

    let response = server
        .delete_auth(&format!("/api/v1/admin/faqs/{id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_settings_and_landing_page() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let key = format!("test-{}", unique_suffix());

    let response = server
        .put_auth(
            &format!("/api/v1/admin/settings/{key}"),
            &server.admin_token(),
            &json!({"value": {"members": 45}, "description": "counter"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let setting: Value = assert_json(
        server.get(&format!("/api/v1/settings/{key}")).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(setting["value"]["members"], 45);

    let home: Value = assert_json(server.get("/api/v1/home").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(home["settings"][key.as_str()]["members"], 45);
    assert!(home["faqs"].is_array());
}

// ============================================================================
// Media Tests
// ============================================================================

fn image_form(folder: &str, name: &str, mime: &str, bytes: Vec<u8>) -> Form {
    let part = Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(mime)
        .unwrap();
    Form::new()
        .text("folder", folder.to_string())
        .text("subfolder", "Test Folder".to_string())
        .part("file", part)
}

#[tokio::test]
async fn test_media_upload_and_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token();

    let response = server
        .post_form_auth(
            "/api/v1/admin/media",
            &token,
            image_form("projects", "Photo.JPG", "image/jpeg", vec![0xff; 128]),
        )
        .await
        .unwrap();
    let uploaded: UploadedImage = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(uploaded.path.starts_with("projects/test-folder/"));
    assert!(uploaded.path.ends_with(".jpg"));
    assert!(server.storage.contains(&uploaded.path).await);

    let response = server
        .delete_json_auth("/api/v1/admin/media", &token, &json!({"url": uploaded.url}))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["deleted"], true);
    assert!(!server.storage.contains(&uploaded.path).await);

    let response = server
        .delete_json_auth(
            "/api/v1/admin/media",
            &token,
            &json!({"url": "/portfolio-1.jpg"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["deleted"], false);
}

#[tokio::test]
async fn test_media_rejects_non_images() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post_form_auth(
            "/api/v1/admin/media",
            &server.admin_token(),
            image_form("members", "notes.pdf", "application/pdf", vec![1, 2, 3]),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "NOT_AN_IMAGE");

    let response = server
        .post_form_auth(
            "/api/v1/admin/media",
            &server.member_token(),
            image_form("members", "a.jpg", "image/jpeg", vec![1, 2, 3]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(server.storage.is_empty().await);
}

#[tokio::test]
async fn test_project_folder() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_auth(
            "/api/v1/admin/media/project-folder",
            &server.admin_token(),
            &json!({"title": "Sadaham Puja", "date": "2025-07-10"}),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["folder"], "20250710-sadaham-puja");
}
