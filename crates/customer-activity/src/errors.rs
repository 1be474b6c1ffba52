use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// Errors from the activity store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database {0} does not exist")]
    MissingDatabase(String),
}

/// Server-side error number of a MySQL error, if the error carries one.
pub(crate) fn mysql_error_number(err: &sqlx::Error) -> Option<u16> {
    err.as_database_error()
        .and_then(|db| db.try_downcast_ref::<MySqlDatabaseError>())
        .map(|db| db.number())
}
