//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::db::repository::DiningTableRepository;
use crate::utils::AppResult;

/// GET /api/tables - 获取所有桌台 (按展示编号排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.get_db());
    let tables = repo.find_all().await?;
    Ok(Json(tables))
}

/// POST /api/tables - 创建桌台 (店主)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.create(payload).await?;

    tracing::info!(
        table_number = table.table_number,
        capacity = table.capacity,
        "Dining table created"
    );

    Ok(Json(table))
}

/// PUT /api/tables/:id - 更新桌台 (店主)
///
/// `is_available` 是店主手工维护的标志；审批预订不会触碰它
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.update(&id, payload).await?;

    tracing::info!(
        table_number = table.table_number,
        is_available = table.is_available,
        "Dining table updated"
    );

    Ok(Json(table))
}
