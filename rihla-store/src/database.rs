use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

pub async fn connect(connection_string: &str) -> Result<Pool<Postgres>, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(3))
        .connect(connection_string)
        .await?;

    Ok(pool)
}

pub async fn migrate(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations...");
    sqlx::migrate!("../migrations").run(pool).await?;
    info!("Migrations completed successfully.");
    Ok(())
}

/// Startup failures split into the two fatal classes the operator sees:
/// a connectivity problem (check the network / database host) or anything
/// else (check the configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupErrorKind {
    Connectivity,
    Other,
}

pub fn classify_startup_error(err: &sqlx::Error) -> StartupErrorKind {
    match err {
        sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::Tls(_) => {
            StartupErrorKind::Connectivity
        }
        other => {
            let message = other.to_string().to_lowercase();
            if message.contains("connect") || message.contains("timed out") {
                StartupErrorKind::Connectivity
            } else {
                StartupErrorKind::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_connectivity() {
        let err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(classify_startup_error(&err), StartupErrorKind::Connectivity);
        assert_eq!(
            classify_startup_error(&sqlx::Error::PoolTimedOut),
            StartupErrorKind::Connectivity
        );
    }

    #[test]
    fn non_network_errors_are_other() {
        let err = sqlx::Error::RowNotFound;
        assert_eq!(classify_startup_error(&err), StartupErrorKind::Other);
    }
}
