//! # GoBuddy Shared
//!
//! Wire types shared between clients and the API server: request DTOs
//! and the success/error envelopes. Kept free of domain dependencies so
//! a client build can use it as-is.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
