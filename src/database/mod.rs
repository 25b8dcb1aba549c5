use crate::config::LevainConfig;
use crate::domain::{BakedGood, Bakery};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub mod sqlite;

// a bakeryrepository can be shared between threads (referencable)
// sqlx::Pool is thread safe
// generic read operations over the bakery store, db specific implementations in "sqlite.rs",
// future: "postgresql.rs", "mysql.rs"
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    async fn all_bakeries(&self) -> Result<Vec<Bakery>>;
    async fn bakery_by_id(&self, id: i64) -> Result<Option<Bakery>>;
    async fn baked_goods_for_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>>;
    async fn baked_goods_by_price_desc(&self) -> Result<Vec<BakedGood>>;
    async fn most_expensive_baked_good(&self) -> Result<Option<BakedGood>>;
}

// create the database file when it's missing, open the pool, run migrations
pub async fn connect_pool(config: &LevainConfig) -> Result<Pool<Sqlite>> {
    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        println!(
            "Unable to connect to database at {}, creating...",
            config.database_url
        );
        Sqlite::create_database(&config.database_url)
            .await
            .context(format!(
                "Unable to create database at {}",
                config.database_url
            ))?;
        println!("Successfully created database at {}.", config.database_url);
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .context(format!("Failed to create pool on {}", config.database_url))?;

    // run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    Ok(pool)
}
