//! Database Models
//!
//! Persistence row types for the embedded SurrealDB store. Status and
//! role enums come from `shared`; everything here is storage shape.
//!
//! # ID Convention
//!
//! 全栈统一使用 `RecordId` ("table:id" 字符串格式对外)，选中实体的
//! 标识从 API 到存储保持同一种类型，不做按展示编号回查的兜底逻辑。

pub mod booking;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod profile;
pub mod serde_helpers;

// Re-exports
pub use booking::*;
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use profile::*;
