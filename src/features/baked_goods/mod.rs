pub mod model;

use crate::AppState;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use model::JsonBakedGood;

pub fn baked_goods_router() -> Router<AppState> {
    Router::new()
        .route("/baked_goods/by_price", get(list_by_price_handler))
        .route("/baked_goods/most_expensive", get(most_expensive_handler))
}

async fn list_by_price_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonBakedGood>>, ApiError> {
    let baked_goods = state.repo.baked_goods_by_price_desc().await?;

    let json_goods: Vec<JsonBakedGood> = baked_goods.iter().map(JsonBakedGood::from).collect();

    Ok(Json(json_goods))
}

async fn most_expensive_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let good_opt = state.repo.most_expensive_baked_good().await?;

    // an empty table isn't an error, it just has no winner
    match good_opt {
        Some(good) => Ok(Json(JsonBakedGood::from(&good)).into_response()),
        None => Ok(Json(serde_json::Map::<String, serde_json::Value>::new()).into_response()),
    }
}
