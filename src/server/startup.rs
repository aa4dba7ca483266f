use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures the upload directory exists before the first file write.
///
/// # Returns
/// - `Ok(())` - Directory present
/// - `Err(AppError)` - Filesystem error creating it
pub async fn ensure_upload_dir(config: &Config) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    Ok(())
}
