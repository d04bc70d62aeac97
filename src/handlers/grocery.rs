use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use tracing::info;

use crate::{
    auth::Identity,
    error::AppResult,
    models::{Item, NewItem, Order},
    service::Inventory,
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_items(State(state): State<AppState>) -> AppResult<Response> {
    let start = Instant::now();
    let inventory = state.service.list().await?;
    let elapsed = start.elapsed();

    match inventory {
        Inventory::Empty => {
            info!(elapsed_ms = elapsed.as_millis(), "Listed items: none stored");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        Inventory::Stocked(items) => {
            info!(
                count = items.len(),
                elapsed_ms = elapsed.as_millis(),
                "Listed items"
            );
            Ok((StatusCode::OK, Json(items)).into_response())
        }
    }
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Item>> {
    let item = state.service.get(id).await?;
    info!(id, "Fetched item");
    Ok(Json(item))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<NewItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.service.create(&payload).await?;
    info!(id = item.id, name = %item.name, price = item.price, "Created item");
    Ok((StatusCode::CREATED, Json(item)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NewItem>,
) -> AppResult<Json<Item>> {
    let item = state.service.update(id, &payload).await?;
    info!(id, name = %item.name, price = item.price, "Updated item");
    Ok(Json(item))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.service.delete(id).await?;
    info!(id, "Deleted item");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_items(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.service.delete_all().await?;
    info!("Deleted all items");
    Ok(StatusCode::NO_CONTENT)
}

// ── Order ─────────────────────────────────────────────────────────────────────

pub async fn place_order(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(order): Json<Order>,
) -> AppResult<(StatusCode, String)> {
    let confirmation = state.service.place_order(&order).await?;
    info!(
        username = %identity.username,
        lines = confirmation.items.len(),
        "Placed order"
    );
    Ok((StatusCode::OK, confirmation.to_string()))
}
