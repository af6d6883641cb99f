//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Booking, BookingDetail};
use crate::db::repository::{BaseRepository, BookingRepository, DiningTableRepository};
use crate::utils::validation::{parse_booking_date, parse_booking_time};
use crate::utils::{AppError, AppResult};
use shared::client::{BookingRequest, BookingStatusUpdate};
use shared::{BookingStatus, Role};

/// POST /api/bookings - 创建预订
///
/// 日期/时间/人数在任何写库之前完成校验；
/// 新预订的状态固定为 pending，等待店主审批。
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<BookingRequest>,
) -> AppResult<Json<Booking>> {
    let booking_date = parse_booking_date(&req.booking_date)?;
    let booking_time = parse_booking_time(&req.booking_time)?;

    if req.number_of_guests < 1 {
        return Err(AppError::validation("number_of_guests must be at least 1"));
    }

    let table_repo = DiningTableRepository::new(state.get_db());
    let table = table_repo
        .find_by_id(&req.table_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table {} not found", req.table_id)))?;

    if req.number_of_guests > table.capacity {
        return Err(AppError::validation(format!(
            "Table {} seats at most {} guests",
            table.table_number, table.capacity
        )));
    }

    let customer = BaseRepository::parse_id(&user.id, "profile")
        .map_err(|_| AppError::invalid_token("Malformed profile id in token"))?;
    let dining_table = table
        .id
        .clone()
        .ok_or_else(|| AppError::internal("Dining table row missing id"))?;

    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .create(Booking {
            id: None,
            customer,
            dining_table,
            booking_date,
            booking_time,
            number_of_guests: req.number_of_guests,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        })
        .await?;

    tracing::info!(
        user_id = %user.id,
        table_number = table.table_number,
        date = %booking.booking_date,
        time = %booking.booking_time,
        guests = booking.number_of_guests,
        "Booking submitted, waiting for owner approval"
    );

    Ok(Json(booking))
}

/// GET /api/bookings - 预订列表
///
/// 顾客看自己的预订 (含桌台)；店主看全部 (含桌台和顾客)。
/// 都按创建时间倒序。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let repo = BookingRepository::new(state.get_db());
    let bookings = match user.role {
        Role::Owner => repo.find_all_with_details().await?,
        Role::Customer => {
            let customer = BaseRepository::parse_id(&user.id, "profile")
                .map_err(|_| AppError::invalid_token("Malformed profile id in token"))?;
            repo.find_by_customer(&customer).await?
        }
    };
    Ok(Json(bookings))
}

/// PUT /api/bookings/:id/status - 审批/拒绝预订 (店主)
///
/// 状态机约束：只有 pending 可以被转换，approved/declined 为终态。
/// 单行更新，桌台的 is_available 不会被联动修改。
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.get_db());
    let booking = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {} not found", id)))?;

    if !booking.status.can_transition_to(req.status) {
        return Err(AppError::business_rule(format!(
            "Booking cannot move from {} to {}",
            booking.status, req.status
        )));
    }

    let updated = repo.update_status(&id, req.status).await?;

    tracing::info!(
        booking_id = %id,
        owner_id = %user.id,
        status = %updated.status,
        "Booking status updated"
    );

    Ok(Json(updated))
}
