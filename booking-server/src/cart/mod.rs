//! 会话购物车
//!
//! 购物车只存在于进程内存：每个登录用户一份，加入项是菜单项的
//! 拷贝，从不落库。空闲超时后由后台清扫任务回收，这对应原始
//! 行为里"离开页面购物车即丢失"的临时性。
//!
//! - [`CartStore`] - DashMap 支撑的无锁并发存储
//! - [`run_sweeper`] - 空闲购物车回收任务

mod store;
mod sweeper;

pub use store::{CartError, CartStore};
pub use sweeper::run_sweeper;
