//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Order, OrderDetail};
use crate::db::repository::{BaseRepository, OrderRepository};
use crate::utils::{AppError, AppResult};
use shared::client::OrderStatusUpdate;
use shared::models::order::generate_token_number;
use shared::{OrderStatus, Role};

/// Order list response: own rows for customers, expanded rows for owners
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OrderList {
    Mine(Vec<Order>),
    All(Vec<OrderDetail>),
}

/// POST /api/orders - 结账下单
///
/// 守卫：购物车为空直接拒绝 (未登录在认证中间件已拦下，
/// 没有任何写库发生)。取餐号随机生成、不查重；总额是购物车
/// 行价之和；落库成功后才清空购物车。
pub async fn checkout(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Order>> {
    let snapshot = state.cart_store().snapshot(&user.id);
    if snapshot.is_empty() {
        return Err(AppError::validation("Cart is empty"));
    }

    let customer = BaseRepository::parse_id(&user.id, "profile")
        .map_err(|_| AppError::invalid_token("Malformed profile id in token"))?;

    let token_number = generate_token_number();

    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .create(Order {
            id: None,
            customer,
            token_number,
            total_amount: snapshot.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
        .await?;

    // 只有下单成功才丢弃购物车，失败时保留以便重试
    state.cart_store().clear(&user.id);

    tracing::info!(
        user_id = %user.id,
        token_number,
        total_amount = %order.total_amount,
        items = snapshot.len(),
        "Order placed"
    );

    Ok(Json(order))
}

/// GET /api/orders - 订单列表
///
/// 顾客看自己的订单；店主看全部 (含顾客)。都按创建时间倒序。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<OrderList>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = match user.role {
        Role::Owner => OrderList::All(repo.find_all_with_customer().await?),
        Role::Customer => {
            let customer = BaseRepository::parse_id(&user.id, "profile")
                .map_err(|_| AppError::invalid_token("Malformed profile id in token"))?;
            OrderList::Mine(repo.find_by_customer(&customer).await?)
        }
    };
    Ok(Json(orders))
}

/// PUT /api/orders/:id/status - 推进订单状态 (店主)
///
/// 状态机约束：只接受当前状态的唯一合法后继，跳步和回退
/// (包括重放的请求) 都被拒绝。
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    if order.status.next() != Some(req.status) {
        return Err(AppError::business_rule(format!(
            "Order cannot move from {} to {}",
            order.status, req.status
        )));
    }

    let updated = repo.update_status(&id, req.status).await?;

    tracing::info!(
        order_id = %id,
        owner_id = %user.id,
        status = %updated.status,
        "Order status updated"
    );

    Ok(Json(updated))
}
