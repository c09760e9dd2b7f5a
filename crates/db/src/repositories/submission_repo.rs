//! Repository for the `submissions` table.

use appraisal_core::types::DbId;
use sqlx::PgPool;

use crate::models::submission::{CreateSubmission, Submission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, token, photo_path, artist_name, title, artwork_date, medium, \
                        dimensions, edition_size, provenance, exhibition_history, \
                        purchase_price, appraisal, estimate_low, estimate_high, created_at";

/// Provides store operations for submissions. The table is the sole owner of
/// persisted state: inserts fail (not overwrite) on a token collision, and
/// only the appraisal columns are ever updated.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// Insert a new submission, returning the created row.
    ///
    /// A token collision surfaces as a unique-violation on
    /// `uq_submissions_token`; the caller treats that as retryable.
    pub async fn create(pool: &PgPool, input: &CreateSubmission) -> Result<Submission, sqlx::Error> {
        let query = format!(
            "INSERT INTO submissions (token, photo_path, artist_name, title, artwork_date,
                                      medium, dimensions, edition_size, provenance,
                                      exhibition_history, purchase_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(&input.token)
            .bind(&input.photo_path)
            .bind(&input.artist_name)
            .bind(&input.title)
            .bind(&input.artwork_date)
            .bind(&input.medium)
            .bind(&input.dimensions)
            .bind(&input.edition_size)
            .bind(&input.provenance)
            .bind(&input.exhibition_history)
            .bind(&input.purchase_price)
            .fetch_one(pool)
            .await
    }

    /// Find a submission by its retrieval token (exact match).
    pub async fn find_by_token(
        pool: &PgPool,
        token: &str,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE token = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(token)
            .fetch_optional(pool)
            .await
    }

    /// Find a submission by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions WHERE id = $1");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM submissions ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Submission>(&query).fetch_all(pool).await
    }

    /// Search submissions by artist-name substring, newest first.
    ///
    /// Uses the store's native `ILIKE`; an empty needle matches everything.
    pub async fn search_by_artist(
        pool: &PgPool,
        needle: &str,
    ) -> Result<Vec<Submission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM submissions
             WHERE artist_name ILIKE '%' || $1 || '%'
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(needle)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the three appraisal fields on the matching row.
    ///
    /// Returns the number of rows updated. Zero is not an error: only the
    /// operator can reach this path, so a missing id is an idempotent no-op.
    pub async fn set_appraisal(
        pool: &PgPool,
        id: DbId,
        appraisal: &str,
        estimate_low: &str,
        estimate_high: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE submissions
             SET appraisal = $2, estimate_low = $3, estimate_high = $4
             WHERE id = $1",
        )
        .bind(id)
        .bind(appraisal)
        .bind(estimate_low)
        .bind(estimate_high)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

/// Whether a sqlx error is a unique violation on the submission token.
///
/// PostgreSQL reports unique violations as SQLSTATE 23505; the constraint
/// name pins it to the token column so unrelated conflicts are not retried.
pub fn is_token_collision(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err.constraint() == Some("uq_submissions_token")
        }
        _ => false,
    }
}
