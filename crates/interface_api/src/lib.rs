//! HTTP API Layer
//!
//! This crate provides the REST API for the benefit illustration service using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for registration, login, policy calculation and health
//! - **Middleware**: Authentication, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Response bodies existing clients already parse
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service, users, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use domain_policy::IllustrationService;
use domain_user::UserService;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth as accounts, health, policy};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: IllustrationService,
    pub users: UserService,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `service` - Illustration service wired to a repository and clock
/// * `users` - User service for registration and login
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(
    service: IllustrationService,
    users: UserService,
    config: ApiConfig,
) -> Router {
    let state = AppState {
        service,
        users,
        config,
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let auth_routes = Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login));

    // Protected policy routes
    let policy_routes = Router::new()
        .route("/calculate", post(policy::calculate))
        .route("/illustration/:policy_id", get(policy::get_illustration))
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/auth", auth_routes)
        .nest("/api/policy", policy_routes)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}
