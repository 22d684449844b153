//! Use-case services over the repositories.
//!
//! # Responsibility
//! - Compose repository calls into the flows the course scripts run.
//! - Keep CLI callers decoupled from statement details.

pub mod music_service;
pub mod student_service;
