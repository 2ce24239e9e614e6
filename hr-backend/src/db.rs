// src/db.rs
use crate::config::Config;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::info;

pub type DbPool = DatabaseConnection;

/// SQLite のインメモリDBか
///
/// 接続ごとに別のDBになるため、プールを1本に固定し、アイドル切断もしない。
pub fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

pub async fn create_db_pool(config: &Config) -> Result<DbPool, DbErr> {
    connect(&config.database_url).await
}

pub async fn connect(database_url: &str) -> Result<DbPool, DbErr> {
    if database_url.is_empty() {
        return Err(DbErr::Custom("DATABASE_URL is not configured".to_string()));
    }

    let mut opt = ConnectOptions::new(database_url.to_string());
    opt.connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    if is_sqlite_memory(database_url) {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(20)
            .min_connections(2)
            .idle_timeout(Duration::from_secs(60))
            .max_lifetime(Duration::from_secs(30 * 60));
    }

    Database::connect(opt).await
}

/// 未適用のマイグレーションを全て適用する
pub async fn run_migrations(db: &DbPool) -> Result<(), DbErr> {
    info!("Applying pending migrations");
    Migrator::up(db, None).await?;
    info!("Migrations are up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sqlite_memory() {
        assert!(is_sqlite_memory("sqlite::memory:"));
        assert!(is_sqlite_memory("sqlite://file:hr?mode=memory&cache=shared"));
        assert!(!is_sqlite_memory("sqlite://./hr.db?mode=rwc"));
        assert!(!is_sqlite_memory("postgres://localhost/hr"));
    }
}
