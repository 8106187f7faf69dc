//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the rendering layer decoupled from persistence details.

pub mod glossary_service;
