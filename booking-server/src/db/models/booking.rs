//! Booking Model

use super::serde_helpers;
use super::{DiningTable, Profile};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::BookingStatus;
use surrealdb::RecordId;

/// Booking entity
///
/// 顾客创建时 status 固定为 pending；之后只有店主可以改状态，
/// 预订从不被删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Customer reference
    #[serde(with = "serde_helpers::record_id")]
    pub customer: RecordId,
    /// Dining table reference
    #[serde(with = "serde_helpers::record_id")]
    pub dining_table: RecordId,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub number_of_guests: i32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking with its references resolved by the repository
///
/// Dashboard 读取视图；`customer` 经由 [`Profile`] 序列化，
/// 密码散列不会出现在响应里。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetail {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub customer: Profile,
    pub dining_table: DiningTable,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub number_of_guests: i32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
