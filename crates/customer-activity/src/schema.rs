//! Schema objects for the activity database.
//!
//! The target database must already exist; setup creates the activity table
//! and the replication user a change-data-capture connector reads with.

use sqlx::MySqlPool;
use tracing::info;

use crate::errors::{StoreError, mysql_error_number};

/// Table already exists.
const ER_TABLE_EXISTS: u16 = 1050;
/// CREATE USER failed (already exists).
const ER_CANNOT_USER: u16 = 1396;

/// Activity table; `ts` is assigned by the server on every insert.
pub const CREATE_CUSTOMER_ACTIVITY: &str = "\
CREATE TABLE `customeractivity` (\
 `user_id` int NOT NULL, \
 `city` varchar(3) NOT NULL, \
 `transaction_type` enum('CREDIT','DEBIT','NON_MONETARY'), \
 `monetary_value` decimal(8,2) NOT NULL, \
 `timeinapp` smallint NOT NULL, \
 `feature_used` enum('FUNDTRANSFER','UPITRANSACTION','ENQUIRY','FOREX','MF-INVEST',\
'CAPITALMARKET-INVEST','FD-INVEST','PENSIONFUND-INVEST') NOT NULL, \
 `ts` timestamp DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP NOT NULL, \
 PRIMARY KEY (`user_id`))";

pub const GRANT_REPLICATION: &str = "\
GRANT SELECT, RELOAD, SHOW DATABASES, REPLICATION SLAVE, REPLICATION CLIENT, LOCK TABLES \
ON *.* TO 'replicator'@'%'";

pub const REQUIRE_SSL: &str = "ALTER USER 'replicator'@'%' REQUIRE SSL";

/// CREATE USER does not take bind parameters, so the password is quoted here.
fn create_replication_user(password: &str) -> String {
    format!(
        "CREATE USER 'replicator'@'%' IDENTIFIED BY '{}'",
        password.replace('\'', "''")
    )
}

/// Creates the activity table and the replication user.
///
/// Existing tables and users are left in place with a log line; any other
/// database error aborts setup.
pub async fn setup_schema(pool: &MySqlPool, replication_password: &str) -> Result<(), StoreError> {
    info!("creating table customeractivity");
    match sqlx::query(CREATE_CUSTOMER_ACTIVITY).execute(pool).await {
        Ok(_) => info!("table customeractivity created"),
        Err(err) if mysql_error_number(&err) == Some(ER_TABLE_EXISTS) => {
            info!("table customeractivity already exists");
        }
        Err(err) => return Err(err.into()),
    }

    info!("creating replication user");
    match sqlx::query(&create_replication_user(replication_password))
        .execute(pool)
        .await
    {
        Ok(_) => info!("replication user created"),
        Err(err) if mysql_error_number(&err) == Some(ER_CANNOT_USER) => {
            info!("replication user already exists");
        }
        Err(err) => return Err(err.into()),
    }

    info!("granting replication privileges");
    sqlx::query(GRANT_REPLICATION).execute(pool).await?;

    info!("requiring SSL for the replication user");
    sqlx::query(REQUIRE_SSL).execute(pool).await?;

    Ok(())
}
