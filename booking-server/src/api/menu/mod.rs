//! Menu API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_owner;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", routes())
}

fn routes() -> Router<ServerState> {
    // 菜单浏览对匿名访客开放
    let read_routes = Router::new().route("/", get(handler::list));

    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .layer(middleware::from_fn(require_owner));

    read_routes.merge(manage_routes)
}
