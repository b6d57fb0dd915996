//! mkit_client - REST and streaming client for the MKit chat backend
//!
//! Wraps the backend's `/api/v1` surface behind the [`ChatBackend`] and
//! [`ToolCatalog`] seams the conversation core consumes.

pub mod client;
pub mod client_trait;
pub mod error;

pub use client::MkitClient;
pub use client_trait::{ChatBackend, ToolCatalog};
pub use error::ClientError;
