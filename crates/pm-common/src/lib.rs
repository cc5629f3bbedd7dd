//! Poisson mixture common types.
//!
//! This crate provides foundational types shared by the other `pm-*` crates:
//! - The unified error type and its numeric codes
//! - Model file schema versioning

pub mod error;
pub mod schema;

pub use error::{Error, Result};
pub use schema::MODEL_SCHEMA_VERSION;
