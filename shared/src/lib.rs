//! Shared types for the table-booking service
//!
//! Common types used by booking-server and any API client:
//! request/response DTOs, role and status enums, cart types.

pub mod cart;
pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use cart::{CartLine, CartSnapshot};
pub use models::{BookingStatus, OrderStatus, Role};
