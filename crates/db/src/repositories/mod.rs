//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod operator_session_repo;
pub mod submission_repo;

pub use operator_session_repo::OperatorSessionRepo;
pub use submission_repo::SubmissionRepo;
