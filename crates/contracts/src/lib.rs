//! Shared contracts between the PDF chat client and the question-answering backend.
//!
//! - `domain`: documents and chat messages as the client models them
//! - `usecases`: request/response DTOs of the backend endpoints
//! - `system`: service-level endpoints (health)

pub mod domain;
pub mod system;
pub mod usecases;
