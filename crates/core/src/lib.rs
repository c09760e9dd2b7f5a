//! Domain core for the art appraisal intake service.
//!
//! Holds everything with a real invariant to protect -- the error taxonomy,
//! the capability token generator, the upload policy, and intake field
//! validation -- with no knowledge of HTTP or the database.

pub mod error;
pub mod intake;
pub mod token;
pub mod types;
pub mod upload;
