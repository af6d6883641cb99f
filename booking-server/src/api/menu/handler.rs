//! Menu API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate};
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// GET /api/menu - 获取可点的菜单项
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_available().await?;
    Ok(Json(items))
}

/// POST /api/menu - 创建菜单项 (店主)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(&payload.image_url, "image_url", MAX_URL_LEN)?;
    if payload.price.is_sign_negative() {
        return Err(AppError::validation("price must not be negative"));
    }

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload).await?;

    tracing::info!(name = %item.name, price = %item.price, "Menu item created");

    Ok(Json(item))
}
