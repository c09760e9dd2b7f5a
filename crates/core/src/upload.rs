//! Upload policy enforcement and artifact storage.
//!
//! The policy check is pure and happens before any bytes touch disk; on
//! acceptance exactly one file is written under a random name so the public
//! artifact path never reveals submitter-chosen content and cannot collide
//! with another upload. The caller must not create a database record until
//! the write has succeeded.

use std::path::{Path, PathBuf};

use rand::Rng;

use crate::error::CoreError;

/// Default upload size ceiling: 10 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Default allow-listed raster image media types.
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Length of the random stem of a stored artifact name.
const ARTIFACT_NAME_LEN: usize = 16;

/// File-type and size policy applied to every upload.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Accepted claimed media types.
    pub allowed_types: Vec<String>,
    /// Maximum accepted file size in bytes.
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_types: DEFAULT_ALLOWED_TYPES.iter().map(|s| s.to_string()).collect(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    /// Check a claimed media type and byte size against the policy.
    ///
    /// The two rejection reasons are deliberately distinct so the caller can
    /// tell the submitter what to fix.
    pub fn check(&self, claimed_type: &str, size: u64) -> Result<(), CoreError> {
        if !self.allowed_types.iter().any(|t| t == claimed_type) {
            return Err(CoreError::InvalidUpload(format!(
                "Unsupported file type '{claimed_type}'. Allowed: {}",
                self.allowed_types.join(", ")
            )));
        }
        if size > self.max_bytes {
            return Err(CoreError::InvalidUpload(format!(
                "File is too large ({size} bytes). Maximum is {} bytes",
                self.max_bytes
            )));
        }
        Ok(())
    }
}

/// Build a collision-resistant random file name preserving the original
/// extension.
///
/// The extension is taken from the submitter's filename but reduced to its
/// alphanumeric form; everything else about the name is discarded.
pub fn random_artifact_name(original_filename: &str) -> String {
    let stamp: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(ARTIFACT_NAME_LEN)
        .map(char::from)
        .collect();

    match sanitized_extension(original_filename) {
        Some(ext) => format!("{stamp}.{ext}"),
        None => stamp,
    }
}

/// Extract the extension of `filename`, keeping only ASCII alphanumerics.
fn sanitized_extension(filename: &str) -> Option<String> {
    let ext: String = Path::new(filename)
        .extension()?
        .to_string_lossy()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_ascii_lowercase())
    }
}

/// Write an accepted upload to `artifact_dir` under a random name.
///
/// Returns the relative path (file name) to store on the record. Exactly one
/// file is written; an I/O failure leaves no record-side state behind.
pub async fn store_artifact(
    artifact_dir: &Path,
    original_filename: &str,
    bytes: &[u8],
) -> Result<String, CoreError> {
    let name = random_artifact_name(original_filename);
    let dest: PathBuf = artifact_dir.join(&name);

    tokio::fs::write(&dest, bytes)
        .await
        .map_err(|e| CoreError::Internal(format!("Failed to write artifact {}: {e}", dest.display())))?;

    tracing::debug!(artifact = %name, size = bytes.len(), "Stored upload artifact");
    Ok(name)
}
