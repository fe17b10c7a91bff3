//! TutorAI HTTP Server Library
//!
//! Provides the REST API components so they can be driven from tests.

pub mod api;
pub mod config;
pub mod error;
