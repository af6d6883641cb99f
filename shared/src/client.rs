//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::{BookingStatus, OrderStatus, Role};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Register request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// 省略时默认注册为 customer
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
}

// =============================================================================
// Booking API DTOs
// =============================================================================

/// Create booking request
///
/// 日期/时间以字符串提交，由服务端解析校验；空串在任何写库之前
/// 就会被拒绝。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub table_id: String,
    pub booking_date: String,
    pub booking_time: String,
    pub number_of_guests: i32,
}

/// Booking status transition request (owner only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Order status transition request (owner only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

// =============================================================================
// Cart API DTOs
// =============================================================================

/// Add a menu item to the caller's cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCartItemRequest {
    pub menu_item_id: String,
}

// =============================================================================
// Dashboard DTOs
// =============================================================================

/// Owner dashboard table counters
///
/// `booked` 为计算值 (total - available)，不落库。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStats {
    pub total: usize,
    pub available: usize,
    pub booked: usize,
}

impl TableStats {
    /// Derive counters from the availability flags of all tables
    pub fn from_availability(flags: impl IntoIterator<Item = bool>) -> Self {
        let mut total = 0;
        let mut available = 0;
        for is_available in flags {
            total += 1;
            if is_available {
                available += 1;
            }
        }
        Self {
            total,
            available,
            booked: total - available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_stats_counters() {
        let stats = TableStats::from_availability([true, false, true, false, false]);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.booked, 3);
    }

    #[test]
    fn test_table_stats_empty() {
        let stats = TableStats::from_availability([]);
        assert_eq!(
            stats,
            TableStats {
                total: 0,
                available: 0,
                booked: 0
            }
        );
    }
}
