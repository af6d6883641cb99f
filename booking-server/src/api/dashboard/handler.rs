//! Dashboard API Handlers
//!
//! 角色视图在顶层一次分发：按 profile 角色返回带标签的变体，
//! 而不是让客户端对着无类型对象鸭子类型。

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{BookingDetail, Order, OrderDetail};
use crate::db::repository::{
    BaseRepository, BookingRepository, DiningTableRepository, OrderRepository,
};
use crate::utils::{AppError, AppResult};
use shared::client::TableStats;
use shared::Role;

/// Role-tagged dashboard view
///
/// ```json
/// { "role": "owner", "stats": { ... }, "bookings": [...], "orders": [...] }
/// ```
#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardView {
    Customer {
        bookings: Vec<BookingDetail>,
        orders: Vec<Order>,
    },
    Owner {
        stats: TableStats,
        bookings: Vec<BookingDetail>,
        orders: Vec<OrderDetail>,
    },
}

/// GET /api/dashboard - 角色视图
///
/// 顾客：自己的预订 (含桌台) 和订单；
/// 店主：桌台计数 + 全部预订和订单。全部结果一次载入，不分页。
pub async fn get_dashboard(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<DashboardView>> {
    let booking_repo = BookingRepository::new(state.get_db());
    let order_repo = OrderRepository::new(state.get_db());

    let view = match user.role {
        Role::Customer => {
            let customer = BaseRepository::parse_id(&user.id, "profile")
                .map_err(|_| AppError::invalid_token("Malformed profile id in token"))?;
            DashboardView::Customer {
                bookings: booking_repo.find_by_customer(&customer).await?,
                orders: order_repo.find_by_customer(&customer).await?,
            }
        }
        Role::Owner => {
            let tables = DiningTableRepository::new(state.get_db()).find_all().await?;
            let stats = TableStats::from_availability(tables.iter().map(|t| t.is_available));
            DashboardView::Owner {
                stats,
                bookings: booking_repo.find_all_with_details().await?,
                orders: order_repo.find_all_with_customer().await?,
            }
        }
    };

    Ok(Json(view))
}
