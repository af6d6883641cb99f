//! Dashboard API 模块

mod handler;

pub use handler::DashboardView;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard", get(handler::get_dashboard))
}
