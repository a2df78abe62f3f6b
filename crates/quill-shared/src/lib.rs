//! # Quill Shared
//!
//! Request/response types for the blog API, shared between the server
//! and any Rust clients.

pub mod dto;
pub mod response;

pub use response::{DataResponse, ErrorBody, MessageResponse, PagedResponse};
