pub mod model;

use crate::AppState;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use model::{JsonBakery, JsonBakeryDetail};

pub fn bakeries_router() -> Router<AppState> {
    Router::new()
        .route("/bakeries", get(list_bakeries_handler))
        .route("/bakeries/{id}", get(get_bakery_handler))
}

async fn list_bakeries_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonBakery>>, ApiError> {
    let bakeries = state.repo.all_bakeries().await?;

    let json_bakeries: Vec<JsonBakery> = bakeries.iter().map(JsonBakery::from).collect();

    Ok(Json(json_bakeries))
}

async fn get_bakery_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JsonBakeryDetail>, ApiError> {
    // a non-numeric id can't match any bakery, same 404 as an unknown one
    let id: i64 = id.parse().map_err(|_| ApiError::BakeryNotFound)?;

    let bakery = state
        .repo
        .bakery_by_id(id)
        .await?
        .ok_or(ApiError::BakeryNotFound)?;

    let baked_goods = state.repo.baked_goods_for_bakery(bakery.id).await?;

    Ok(Json(JsonBakeryDetail::from_parts(&bakery, &baked_goods)))
}
