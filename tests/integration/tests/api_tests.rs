//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the schema applied
//! - Environment variables: DATABASE_URL, AUTH_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(account.name, request.name);
    assert_eq!(account.email, request.email);
    assert!(!account.id.is_empty());
}

#[tokio::test]
async fn test_register_response_never_contains_credential_material() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.text().await.unwrap();
    assert!(!body.contains("credential_hash"));
    assert!(!body.contains("password"));
    assert!(!body.contains("argon2"));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/auth/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.email = "not-an-email".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(login.token_type, "Bearer");
    assert_eq!(login.account.email, register_req.email);
    assert!(!login.token.is_empty());
    assert!(login.expires_in > 0);
}

#[tokio::test]
async fn test_login_failures_have_identical_bodies() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();

    // Wrong password for a real account
    let wrong_password = LoginRequest {
        email: register_req.email.clone(),
        password: "definitely-wrong".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &wrong_password).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body_a: ErrorResponse = response.json().await.unwrap();

    // Unknown email entirely
    let unknown_email = LoginRequest {
        email: format!("nobody{}@example.com", unique_suffix()),
        password: "definitely-wrong".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &unknown_email).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body_b: ErrorResponse = response.json().await.unwrap();

    // Neither the code nor the message may reveal which check failed
    assert_eq!(body_a.error.code, body_b.error.code);
    assert_eq!(body_a.error.message, body_b.error.message);
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_account() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register and login
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let registered: AccountResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Get current account
    let response = server
        .get_auth("/api/v1/accounts/@me", &login.token)
        .await
        .unwrap();
    let account: AccountResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(account.id, registered.id);
    assert_eq!(account.email, register_req.email);
}

#[tokio::test]
async fn test_get_current_account_without_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/accounts/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_account_garbage_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get_auth("/api/v1/accounts/@me", "not.a.token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_account_lowercase_scheme_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Obtain a perfectly valid token first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // A valid token behind the wrong scheme spelling is still rejected
    let response = server
        .get_with_authorization("/api/v1/accounts/@me", &format!("bearer {}", login.token))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_current_account_tampered_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &register_req).await.unwrap();
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();

    // Flip the last character of the signature
    let mut tampered = login.token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let response = server
        .get_auth("/api/v1/accounts/@me", &tampered)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // The body is the same opaque rejection as a missing header
    let response = server
        .get_auth("/api/v1/accounts/@me", &tampered)
        .await
        .unwrap();
    let tampered_body: ErrorResponse = response.json().await.unwrap();
    let response = server.get("/api/v1/accounts/@me").await.unwrap();
    let missing_body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(tampered_body.error.code, missing_body.error.code);
    assert_eq!(tampered_body.error.message, missing_body.error.message);
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_list_categories() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/categories").await.unwrap();
    let _categories: Vec<CategoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_category_invalid_id() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/categories/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_category_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/categories/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_roles() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/roles").await.unwrap();
    let _roles: Vec<RoleResponse> = assert_json(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_get_role_not_found() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/roles/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
