//! Migration CLI for the embedded idea store.
//!
//! The store also migrates itself on open; this binary exists for manual
//! schema inspection and rollback during development.

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    sea_orm_migration::cli::run_cli(migration::Migrator).await;
}
