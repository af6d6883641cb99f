//! Order Status and token numbers

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 取餐号下界 (含)
pub const TOKEN_MIN: i32 = 1000;
/// 取餐号上界 (含)
pub const TOKEN_MAX: i32 = 9999;

/// Order lifecycle status
///
/// 严格单向链：`pending → preparing → ready → completed`。
/// 每一步只允许推进到唯一的后继状态，`completed` 为终态。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    /// The single legal successor, or `None` for the terminal state
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draw a display token for a new order
///
/// 均匀分布在 `[TOKEN_MIN, TOKEN_MAX]`，不做唯一性检查。取餐号只是
/// 展示给顾客的短编号，不是订单主键。
pub fn generate_token_number() -> i32 {
    rand::thread_rng().gen_range(TOKEN_MIN..=TOKEN_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_chain() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), Some(OrderStatus::Completed));
        assert_eq!(OrderStatus::Completed.next(), None);
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_token_number_range() {
        for _ in 0..1000 {
            let token = generate_token_number();
            assert!((TOKEN_MIN..=TOKEN_MAX).contains(&token));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        let status: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, OrderStatus::Ready);
    }
}
