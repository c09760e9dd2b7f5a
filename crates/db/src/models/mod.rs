//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the DTOs used to create it.

pub mod operator_session;
pub mod submission;
