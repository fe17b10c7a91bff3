//! Request/response type definitions
//!
//! The endpoint payloads themselves live in `tutorai_core`; this module adds
//! the server-only pieces.

use crate::config::ServerConfig;
use serde::{Deserialize, Serialize};

/// Name reported by the service metadata endpoint
pub const SERVICE_NAME: &str = "TutorAI Service";

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Largest `num_questions` accepted by `/generate_questions`, if limited
    pub max_questions: Option<usize>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            max_questions: config.max_questions,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Service metadata response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub name: String,
    pub version: String,
}
