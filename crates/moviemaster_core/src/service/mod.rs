//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Turn repository absence into tagged outcomes for the transport layer.
//! - Keep transport code decoupled from storage shapes.

pub mod mapper;
pub mod movie_service;
pub mod outcome;
