//! `shophub-core` — storefront foundation building blocks.
//!
//! This crate contains **pure** primitives shared by the catalog, browse and
//! client crates (no IO, no async, no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod text;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, SessionId};
