//! HTTP handlers.

pub mod operator;
pub mod submissions;
