//! # GoBuddy Core
//!
//! The domain layer of GoBuddy: activity posts, the stores that hold them,
//! and the pure engines (filtering, composition, content assist, chat
//! script) that operate on them. Infrastructure is reached only through
//! the traits in [`ports`].

pub mod assist;
pub mod chat;
pub mod composer;
pub mod domain;
pub mod error;
pub mod filter;
pub mod geo;
pub mod ports;
pub mod seed;
pub mod store;

pub use error::DomainError;
