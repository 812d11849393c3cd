use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Open a connection pool for the given profile. Does not run migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let in_memory = profile == DbProfile::InMemory;
    let database_url = db_url(profile, owner)?;

    let mut options = ConnectOptions::new(database_url);
    options
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    if in_memory {
        // each SQLite memory connection is its own database
        options.max_connections(1).min_connections(1);
    } else {
        options.max_connections(10);
    }

    Ok(Database::connect(options).await?)
}

/// Connect and bring the schema up to date.
///
/// Migrations run with owner credentials; the returned pool uses `owner`.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    if profile == DbProfile::InMemory {
        let conn = connect_db(profile, owner).await?;
        migrate(&conn, MigrationCommand::Up).await?;
        return Ok(conn);
    }

    {
        let owner_conn = connect_db(profile.clone(), DbOwner::Owner).await?;
        migrate(&owner_conn, MigrationCommand::Up).await?;
        owner_conn.close().await?;
    }
    info!(?profile, "migrations applied");

    connect_db(profile, owner).await
}
