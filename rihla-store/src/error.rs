use rihla_core::RepoError;

/// Collapses driver errors into the repository taxonomy. Postgres reports
/// a unique-constraint violation (the duplicate departure date) as SQLSTATE
/// 23505, which sqlx exposes through `is_unique_violation`.
pub fn map_sqlx_err(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepoError::Duplicate,
        other => RepoError::Backend(other.to_string()),
    }
}
