// migration/src/main.rs

use migration::Migrator;
use sea_orm_migration::prelude::*;

// sea-orm-migration の CLI (up / down / fresh / status) をそのまま公開する
#[async_std::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
