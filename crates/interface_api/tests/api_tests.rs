//! HTTP API Tests
//!
//! Drives the full router against the in-memory stores with the clock
//! frozen at the reference date.

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::TestServer;
use chrono::Utc;
use core_kernel::UserId;
use domain_policy::ports::memory::InMemoryIllustrationRepository;
use domain_policy::validation::{MODAL_PREMIUM_RANGE, TERM_ORDERING};
use domain_policy::IllustrationService;
use domain_user::ports::memory::InMemoryUserRepository;
use domain_user::UserService;
use interface_api::auth::{create_token, validate_token, Claims};
use interface_api::config::ApiConfig;
use interface_api::create_router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use test_utils::{ApplicationFixtures, ApplicationFormBuilder, AuthFixtures, TemporalFixtures};

fn server() -> TestServer {
    let service = IllustrationService::new(
        Arc::new(InMemoryIllustrationRepository::new()),
        Arc::new(TemporalFixtures::reference_clock()),
    );
    let config = ApiConfig {
        jwt_secret: AuthFixtures::jwt_secret().to_string(),
        password_hash_cost: 4,
        ..Default::default()
    };
    let users = UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        config.password_hash_cost,
    );
    TestServer::new(create_router(service, users, config)).unwrap()
}

fn registration(username: &str) -> Value {
    json!({
        "username": username,
        "password": "s3cret",
        "dob": "1999/12/12",
        "mobile": "9876543210"
    })
}

fn bearer(user: &UserId) -> HeaderValue {
    let token = create_token(user.as_str(), AuthFixtures::jwt_secret(), 3600).unwrap();
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

async fn calculate(server: &TestServer, user: &UserId, body: &Value) -> (StatusCode, Value) {
    let response = server
        .post("/api/policy/calculate")
        .add_header(AUTHORIZATION, bearer(user))
        .json(body)
        .await;
    (response.status_code(), response.json::<Value>())
}

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_is_public() {
        let response = server().get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_ready_with_in_memory_store() {
        let response = server().get("/health/ready").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "ready");
    }
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let response = server()
            .post("/api/policy/calculate")
            .json(&ApplicationFormBuilder::new().to_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "Access token required"})
        );
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_403() {
        let token = create_token("user-1", "some-other-secret", 3600).unwrap();
        let response = server()
            .get("/api/policy/illustration/0190a1b2-0000-7000-8000-000000000000")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(response.json::<Value>(), json!({"message": "Invalid token"}));
    }

    #[tokio::test]
    async fn test_expired_token_is_403() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            user_id: AuthFixtures::user_id().as_str().to_string(),
            exp: now - 7200,
            iat: now - 10800,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(AuthFixtures::jwt_secret().as_bytes()),
        )
        .unwrap();

        let response = server()
            .post("/api/policy/calculate")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
            )
            .json(&ApplicationFormBuilder::new().to_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }
}

mod accounts {
    use super::*;

    async fn login(server: &TestServer, username: &str, password: &str) -> (StatusCode, Value) {
        let response = server
            .post("/api/auth/login")
            .json(&json!({"username": username, "password": password}))
            .await;
        (response.status_code(), response.json::<Value>())
    }

    #[tokio::test]
    async fn test_register_login_then_calculate() {
        let server = server();

        let response = server.post("/api/auth/register").json(&registration("asha")).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "User registered successfully"})
        );

        let (status, body) = login(&server, "asha", "s3cret").await;
        assert_eq!(status, StatusCode::OK);
        let token = body["token"].as_str().unwrap();
        let claims = validate_token(token, AuthFixtures::jwt_secret()).unwrap();

        let response = server
            .post("/api/policy/calculate")
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
            )
            .json(&ApplicationFormBuilder::new().to_json())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["policy"]["userId"], claims.user_id);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_400() {
        let server = server();
        server.post("/api/auth/register").json(&registration("asha")).await;

        let response = server.post("/api/auth/register").json(&registration("asha")).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "Username already exists"})
        );
    }

    #[tokio::test]
    async fn test_incomplete_registration_is_400() {
        let response = server()
            .post("/api/auth/register")
            .json(&json!({"username": "asha", "password": "s3cret"}))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_401() {
        let server = server();
        server.post("/api/auth/register").json(&registration("asha")).await;

        for (username, password) in [("asha", "wrong"), ("nobody", "s3cret")] {
            let (status, body) = login(&server, username, password).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{username}");
            assert_eq!(body, json!({"message": "Invalid credentials"}));
        }
    }
}

mod calculate {
    use super::*;

    #[tokio::test]
    async fn test_reference_application_is_calculated() {
        let server = server();
        let user = AuthFixtures::user_id();

        let (status, body) =
            calculate(&server, &user, &ApplicationFormBuilder::new().to_json()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Policy calculated successfully");

        let policy = &body["policy"];
        assert!(policy["_id"].is_string());
        assert_eq!(policy["userId"], user.as_str());
        assert_eq!(policy["dob"], "1999/12/12");
        assert_eq!(policy["gender"], "M");
        assert_eq!(policy["sumAssured"], 5_000_000);
        assert_eq!(policy["premiumFrequency"], "Yearly");

        let benefits = policy["benefits"].as_array().unwrap();
        assert_eq!(benefits.len(), 18);
        assert_eq!(
            benefits[0],
            json!({
                "year": 1,
                "projectedBenefit": ApplicationFixtures::scenario_first_year_benefit()
            })
        );
        assert_eq!(benefits[17]["year"], 18);
        assert!(policy["createdAt"].is_string());
        assert!(policy["updatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_browser_form_strings_are_accepted() {
        let server = server();
        let body = ApplicationFormBuilder::new()
            .with_premium_frequency("Half-Yearly")
            .as_browser_strings()
            .to_json();

        let (status, body) = calculate(&server, &AuthFixtures::user_id(), &body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["policy"]["premiumFrequency"], "Half-Yearly");
        assert_eq!(body["policy"]["modalPremium"], 40_000);
    }

    #[tokio::test]
    async fn test_premium_above_maximum_is_400() {
        let server = server();
        let body = ApplicationFormBuilder::new().with_modal_premium(80_000).to_json();

        let (status, body) = calculate(&server, &AuthFixtures::user_id(), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"message": "Validation failed", "errors": [MODAL_PREMIUM_RANGE]})
        );
    }

    #[tokio::test]
    async fn test_equal_terms_are_400() {
        let server = server();
        let body = ApplicationFormBuilder::new()
            .with_policy_term(10)
            .with_premium_payment_term(10)
            .to_json();

        let (status, body) = calculate(&server, &AuthFixtures::user_id(), &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"], json!([TERM_ORDERING]));
    }

    #[tokio::test]
    async fn test_empty_body_lists_every_missing_field() {
        let server = server();

        let (status, body) = calculate(&server, &AuthFixtures::user_id(), &json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_unreadable_body_is_400() {
        let response = server()
            .post("/api/policy/calculate")
            .add_header(AUTHORIZATION, bearer(&AuthFixtures::user_id()))
            .text("{not json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["message"], "Validation failed");
    }
}

mod illustration {
    use super::*;

    #[tokio::test]
    async fn test_owner_fetches_stored_illustration() {
        let server = server();
        let user = AuthFixtures::user_id();
        let (_, created) =
            calculate(&server, &user, &ApplicationFormBuilder::new().to_json()).await;
        let id = created["policy"]["_id"].as_str().unwrap();

        let response = server
            .get(&format!("/api/policy/illustration/{id}"))
            .add_header(AUTHORIZATION, bearer(&user))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>(), created["policy"]);
    }

    #[tokio::test]
    async fn test_other_user_gets_404() {
        let server = server();
        let (_, created) = calculate(
            &server,
            &AuthFixtures::user_id(),
            &ApplicationFormBuilder::new().to_json(),
        )
        .await;
        let id = created["policy"]["_id"].as_str().unwrap();

        let response = server
            .get(&format!("/api/policy/illustration/{id}"))
            .add_header(AUTHORIZATION, bearer(&AuthFixtures::other_user_id()))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "Policy not found"})
        );
    }

    #[tokio::test]
    async fn test_malformed_id_is_404() {
        let response = server()
            .get("/api/policy/illustration/not-an-id")
            .add_header(AUTHORIZATION, bearer(&AuthFixtures::user_id()))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Policy not found");
    }
}
