//! Server-level errors
//!
//! 启动/运行期错误；请求处理期错误见 [`crate::utils::AppError`]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 服务器启动期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
