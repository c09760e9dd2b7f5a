use std::path::PathBuf;

use appraisal_core::upload::{UploadPolicy, DEFAULT_ALLOWED_TYPES, DEFAULT_MAX_UPLOAD_BYTES};

/// Default operator session lifetime in minutes (2 hours).
const DEFAULT_SESSION_EXPIRY_MINS: i64 = 120;

/// Server configuration loaded from environment variables.
///
/// All fields except the operator credential have defaults suitable for
/// local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The single shared operator secret. Required.
    pub operator_password: String,
    /// Operator session lifetime in minutes (default: `120`).
    pub session_expiry_mins: i64,
    /// Directory where uploaded artifacts are written (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Upload type/size policy applied to every submission.
    pub upload_policy: UploadPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                    |
    /// |-------------------------------|----------------------------|
    /// | `HOST`                        | `0.0.0.0`                  |
    /// | `PORT`                        | `3000`                     |
    /// | `CORS_ORIGINS`                | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`        | `30`                       |
    /// | `OPERATOR_PASSWORD`           | **required**               |
    /// | `OPERATOR_SESSION_EXPIRY_MINS`| `120`                      |
    /// | `UPLOAD_DIR`                  | `uploads`                  |
    /// | `MAX_UPLOAD_BYTES`            | `10485760`                 |
    /// | `UPLOAD_ALLOWED_TYPES`        | `image/jpeg,image/png`     |
    ///
    /// # Panics
    ///
    /// Panics if `OPERATOR_PASSWORD` is unset or empty, or if a numeric
    /// variable fails to parse. Misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let operator_password = std::env::var("OPERATOR_PASSWORD")
            .expect("OPERATOR_PASSWORD must be set in the environment");
        assert!(
            !operator_password.is_empty(),
            "OPERATOR_PASSWORD must not be empty"
        );

        let session_expiry_mins: i64 = std::env::var("OPERATOR_SESSION_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_MINS.to_string())
            .parse()
            .expect("OPERATOR_SESSION_EXPIRY_MINS must be a valid i64");

        let upload_dir = PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into()));

        let max_bytes: u64 = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid u64");

        let allowed_types: Vec<String> = std::env::var("UPLOAD_ALLOWED_TYPES")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_TYPES.join(","))
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            operator_password,
            session_expiry_mins,
            upload_dir,
            upload_policy: UploadPolicy {
                allowed_types,
                max_bytes,
            },
        }
    }
}
