//! Cart Store

use std::time::{Duration, Instant};

use dashmap::DashMap;
use shared::{CartLine, CartSnapshot};
use thiserror::Error;

/// Cart errors
#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart line {index} out of range (cart has {len} lines)")]
    LineOutOfRange { index: usize, len: usize },
}

/// One user's cart plus its idle timestamp
#[derive(Debug)]
struct CartEntry {
    lines: Vec<CartLine>,
    touched_at: Instant,
}

impl CartEntry {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            touched_at: Instant::now(),
        }
    }

    fn touch(&mut self) {
        self.touched_at = Instant::now();
    }
}

/// 会话购物车存储
///
/// 使用 DashMap 实现无锁并发：key 是 profile ID，value 是该用户
/// 的购物车行。所有读写都会刷新空闲时间戳。
#[derive(Debug)]
pub struct CartStore {
    carts: DashMap<String, CartEntry>,
    /// 空闲超过该时长的购物车会被清扫任务回收
    idle_ttl: Duration,
}

impl CartStore {
    /// Create an empty store with the given idle TTL
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            carts: DashMap::new(),
            idle_ttl,
        }
    }

    /// Append a line to the customer's cart, returning the new snapshot
    pub fn add_line(&self, customer: &str, line: CartLine) -> CartSnapshot {
        let mut entry = self
            .carts
            .entry(customer.to_string())
            .or_insert_with(CartEntry::new);
        entry.touch();
        entry.lines.push(line);
        CartSnapshot::from_lines(entry.lines.clone())
    }

    /// Remove one line by position, returning the new snapshot
    pub fn remove_line(&self, customer: &str, index: usize) -> Result<CartSnapshot, CartError> {
        let mut entry = self
            .carts
            .entry(customer.to_string())
            .or_insert_with(CartEntry::new);
        entry.touch();
        if index >= entry.lines.len() {
            return Err(CartError::LineOutOfRange {
                index,
                len: entry.lines.len(),
            });
        }
        entry.lines.remove(index);
        Ok(CartSnapshot::from_lines(entry.lines.clone()))
    }

    /// Read-only snapshot of the customer's cart
    pub fn snapshot(&self, customer: &str) -> CartSnapshot {
        match self.carts.get_mut(customer) {
            Some(mut entry) => {
                entry.touch();
                CartSnapshot::from_lines(entry.lines.clone())
            }
            None => CartSnapshot::from_lines(Vec::new()),
        }
    }

    /// Drop the customer's cart entirely (checkout success, logout)
    pub fn clear(&self, customer: &str) {
        self.carts.remove(customer);
    }

    /// Remove carts idle longer than the TTL, returning how many were dropped
    pub fn sweep_idle(&self) -> usize {
        let ttl = self.idle_ttl;
        let before = self.carts.len();
        self.carts.retain(|_, entry| entry.touched_at.elapsed() < ttl);
        before - self.carts.len()
    }

    /// Number of live carts
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn line(name: &str, cents: i64) -> CartLine {
        CartLine {
            menu_item: format!("menu_item:{}", name),
            name: name.to_string(),
            price: Decimal::new(cents, 2),
        }
    }

    #[test]
    fn test_add_and_total() {
        let store = CartStore::new(Duration::from_secs(600));
        store.add_line("profile:a", line("burger", 15_99));
        let snapshot = store.add_line("profile:a", line("salad", 12_99));

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.total, Decimal::new(28_98, 2));
    }

    #[test]
    fn test_carts_are_per_customer() {
        let store = CartStore::new(Duration::from_secs(600));
        store.add_line("profile:a", line("burger", 15_99));
        store.add_line("profile:b", line("salad", 12_99));

        assert_eq!(store.snapshot("profile:a").len(), 1);
        assert_eq!(store.snapshot("profile:b").len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_line() {
        let store = CartStore::new(Duration::from_secs(600));
        store.add_line("profile:a", line("burger", 15_99));
        store.add_line("profile:a", line("salad", 12_99));

        let snapshot = store.remove_line("profile:a", 0).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.lines[0].name, "salad");

        // Out-of-range index is rejected
        assert!(store.remove_line("profile:a", 5).is_err());
    }

    #[test]
    fn test_clear_round_trips_to_empty() {
        let store = CartStore::new(Duration::from_secs(600));
        store.add_line("profile:a", line("burger", 15_99));
        store.clear("profile:a");

        let snapshot = store.snapshot("profile:a");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.total, Decimal::ZERO);
    }

    #[test]
    fn test_sweep_drops_idle_carts() {
        let store = CartStore::new(Duration::ZERO);
        store.add_line("profile:a", line("burger", 15_99));
        store.add_line("profile:b", line("salad", 12_99));

        let dropped = store.sweep_idle();
        assert_eq!(dropped, 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_sweep_keeps_fresh_carts() {
        let store = CartStore::new(Duration::from_secs(600));
        store.add_line("profile:a", line("burger", 15_99));

        assert_eq!(store.sweep_idle(), 0);
        assert_eq!(store.len(), 1);
    }
}
