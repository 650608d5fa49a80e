//! # lightapi-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON control API (`/home`, `/room`, `/lamp`) and `/health`
//! - Map path segments into typed ids, power states and brightness steps
//! - Map [`HomeService`](lightapi_app::services::home_service::HomeService)
//!   results into HTTP responses, and errors into status codes through
//!   [`ApiError`](error::ApiError)
//!
//! ## Dependency rule
//! Depends on `lightapi-app` (for port traits and services) and
//! `lightapi-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
