use crate::config::LevainConfig;
use crate::database::BakeryRepository;
use crate::database::sqlite::SqliteRepository;
use crate::features::baked_goods::baked_goods_router;
use crate::features::bakeries::bakeries_router;
use axum::{Router, response::Html, routing::get};
use dotenv;
use std::sync::Arc;

pub mod config;
mod database;
mod domain;
mod error;
mod features;

const BIND_ADDR: &str = "0.0.0.0:5555";

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BakeryRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    // load centralized config
    let config = LevainConfig::from_env();

    // create the db if needed, connect, migrate
    let pool = database::connect_pool(&config).await?;

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool)),
    };

    println!("Starting server...");

    let app = app_router().with_state(app_state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    println!("Server listening on http://{}", BIND_ADDR);

    axum::serve(listener, app).await?;

    Ok(())
}

// the full route table, where features are composed
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .merge(bakeries_router())
        .merge(baked_goods_router())
}

async fn index_handler() -> Html<&'static str> {
    Html("<h1>Bakery GET API</h1>")
}
