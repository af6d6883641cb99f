//! Booking Status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking lifecycle status
///
/// 状态机：`pending → approved` | `pending → declined`。
/// `approved` 和 `declined` 为终态，任何后续转换都是非法的。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl BookingStatus {
    /// 终态判定
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Approved | BookingStatus::Declined)
    }

    /// Whether the owner may move this booking to `target`
    ///
    /// 只有 pending 预订可以被审批或拒绝
    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        matches!(
            (self, target),
            (BookingStatus::Pending, BookingStatus::Approved)
                | (BookingStatus::Pending, BookingStatus::Declined)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Approved));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Declined));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_terminal_states_have_no_exit() {
        for terminal in [BookingStatus::Approved, BookingStatus::Declined] {
            assert!(terminal.is_terminal());
            for target in [
                BookingStatus::Pending,
                BookingStatus::Approved,
                BookingStatus::Declined,
            ] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(BookingStatus::default(), BookingStatus::Pending);
        assert!(!BookingStatus::Pending.is_terminal());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&BookingStatus::Approved).unwrap(),
            "\"approved\""
        );
        let status: BookingStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, BookingStatus::Pending);
    }
}
