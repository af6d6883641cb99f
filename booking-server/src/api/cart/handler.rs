//! Cart API Handlers
//!
//! 购物车是进程内的会话状态，所有接口都要求登录。

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};
use shared::client::AddCartItemRequest;
use shared::{CartLine, CartSnapshot};

/// GET /api/cart - 当前购物车
pub async fn get_cart(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<CartSnapshot>> {
    Ok(Json(state.cart_store().snapshot(&user.id)))
}

/// POST /api/cart/items - 加入菜单项
///
/// 购物车行是加入时对菜单项的拷贝，之后菜单改价不影响已加入的行
pub async fn add_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<AddCartItemRequest>,
) -> AppResult<Json<CartSnapshot>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .find_by_id(&req.menu_item_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", req.menu_item_id)))?;

    if !item.is_available {
        return Err(AppError::validation(format!(
            "Menu item '{}' is not available",
            item.name
        )));
    }

    let item_id = item
        .id
        .as_ref()
        .map(|id| id.to_string())
        .ok_or_else(|| AppError::internal("Menu item row missing id"))?;

    let snapshot = state.cart_store().add_line(
        &user.id,
        CartLine {
            menu_item: item_id,
            name: item.name,
            price: item.price,
        },
    );

    Ok(Json(snapshot))
}

/// DELETE /api/cart/items/:index - 按位置移除一行
pub async fn remove_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(index): Path<usize>,
) -> AppResult<Json<CartSnapshot>> {
    let snapshot = state
        .cart_store()
        .remove_line(&user.id, index)
        .map_err(|e| AppError::validation(e.to_string()))?;
    Ok(Json(snapshot))
}

/// DELETE /api/cart - 清空购物车
pub async fn clear(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<bool>> {
    state.cart_store().clear(&user.id);
    Ok(Json(true))
}
