//! Operator authentication: opaque session tokens backed by the
//! `operator_sessions` table.

pub mod session;
