use axum::{http::Method, middleware, routing::get, routing::post, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth, auth::policy::Operation, handlers::grocery, AppState};

pub const ITEMS: &str = "/api/grocery";
pub const ITEM: &str = "/api/grocery/:id";
pub const ORDER: &str = "/api/grocery/order";

/// Maps a matched route template and method to the operation it performs.
pub fn operation_for(method: &Method, route: &str) -> Option<Operation> {
    let operation = match (method.as_str(), route) {
        ("GET", ITEMS) => Operation::ListItems,
        ("POST", ITEMS) => Operation::CreateItem,
        ("DELETE", ITEMS) => Operation::DeleteAllItems,
        ("GET", ITEM) => Operation::GetItem,
        ("PUT", ITEM) => Operation::UpdateItem,
        ("DELETE", ITEM) => Operation::DeleteItem,
        ("POST", ORDER) => Operation::PlaceOrder,
        _ => return None,
    };
    Some(operation)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Items ───────────────────────────────────────────────────────────
        .route(
            ITEMS,
            get(grocery::list_items)
                .post(grocery::create_item)
                .delete(grocery::delete_all_items),
        )
        .route(
            ITEM,
            get(grocery::get_item)
                .put(grocery::update_item)
                .delete(grocery::delete_item),
        )

        // ── Orders ──────────────────────────────────────────────────────────
        .route(ORDER, post(grocery::place_order))

        // ── Middleware ──────────────────────────────────────────────────────
        // Applies to matched routes only, before any extractor parses the body.
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::gate))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
