//! Request handler orchestration.
//!
//! # Responsibility
//! - Orchestrate repository calls into the four tracker operations.
//! - Keep the routing/rendering boundary decoupled from storage details.

pub mod routes;
pub mod tracker_service;
