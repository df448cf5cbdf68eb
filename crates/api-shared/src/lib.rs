//! # API Shared
//!
//! Shared response types and services for the risk APIs.
//!
//! Contains:
//! - JSON response bodies with OpenAPI schemas (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the workspace's `risk-run` binary.

pub mod dto;
pub mod health;

pub use dto::{ErrorBody, ErrorRes, HealthRes, RiskAssessmentRes};
pub use health::HealthService;
