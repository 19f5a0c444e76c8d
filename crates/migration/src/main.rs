use sea_orm_migration::prelude::*;

/// Reads `DATABASE_URL`; run `migration up`, `migration down`, `migration status` or `migration fresh`.
#[async_std::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
