//! Data models
//!
//! Role and lifecycle status enums shared between booking-server and
//! clients (via API). Persistence row types live in booking-server.

pub mod booking;
pub mod order;
pub mod role;

// Re-exports
pub use booking::*;
pub use order::*;
pub use role::*;
