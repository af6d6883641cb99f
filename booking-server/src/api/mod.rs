//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口 (注册/登录/会话/登出)
//! - [`tables`] - 桌台接口
//! - [`menu`] - 菜单接口
//! - [`cart`] - 会话购物车接口
//! - [`bookings`] - 预订接口
//! - [`orders`] - 订单接口
//! - [`dashboard`] - 角色视图接口

pub mod auth;
pub mod bookings;
pub mod cart;
pub mod dashboard;
pub mod health;
pub mod menu;
pub mod orders;
pub mod tables;

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Assemble the full application router
///
/// 认证中间件覆盖所有 `/api/` 路由，公共路径在中间件内部放行。
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(tables::router())
        .merge(menu::router())
        .merge(cart::router())
        .merge(bookings::router())
        .merge(orders::router())
        .merge(dashboard::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
