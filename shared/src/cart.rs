//! Cart types
//!
//! 购物车是会话级的临时状态：每一行都是加入时对菜单项的一次拷贝，
//! 从不落库。金额使用 Decimal，序列化为浮点数。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line in a session cart: a copy of a menu item at add time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Menu item id ("menu_item:xyz")
    pub menu_item: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Read-only view of a session cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    /// Sum of line prices at snapshot time
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl CartSnapshot {
    /// Build a snapshot from lines, computing the total
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(|l| l.price).sum();
        Self { lines, total }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
