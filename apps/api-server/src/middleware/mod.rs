//! Session gating and error mapping.

pub mod auth;
pub mod error;
