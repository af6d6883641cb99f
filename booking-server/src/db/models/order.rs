//! Order Model

use super::serde_helpers;
use super::Profile;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::OrderStatus;
use surrealdb::RecordId;

/// Pre-order entity
///
/// 结账时整单落库：取餐号随机生成，总额是购物车行价之和。
/// 金额字段序列化为浮点数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Customer reference
    #[serde(with = "serde_helpers::record_id")]
    pub customer: RecordId,
    /// Display token in [1000, 9999], not unique by design
    pub token_number: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Order with the customer resolved by the repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub customer: Profile,
    pub token_number: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}
