// tests/common/db.rs
use hr_backend::db::connect;
use migration::Migrator;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

/// テストごとに独立したインメモリ SQLite
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    pub async fn new() -> Self {
        super::init_test_env();

        let connection = connect("sqlite::memory:")
            .await
            .expect("connect to in-memory sqlite");
        Migrator::up(&connection, None)
            .await
            .expect("run migrations");

        Self { connection }
    }
}
