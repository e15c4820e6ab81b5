//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误类型
//! - [`ValidatedJson`] / [`IdPath`] - 请求格式校验
//! - 日志等工具

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, fail, ok};
pub use result::AppResult;
pub use validation::{IdPath, ValidatedJson};
