//! Order API 模块

mod handler;

use axum::{Router, middleware, routing::{get, put}};

use crate::auth::require_owner;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    let user_routes = Router::new().route("/", get(handler::list).post(handler::checkout));

    let owner_routes = Router::new()
        .route("/{id}/status", put(handler::update_status))
        .layer(middleware::from_fn(require_owner));

    user_routes.merge(owner_routes)
}
