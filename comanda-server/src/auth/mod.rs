//! 认证模块
//!
//! 登录锁定守卫：
//! - [`AccountGuard`] - 用户名/密码校验 + 失败计数 + 锁定
//! - [`LoginOutcome`] - 单次登录尝试的结果
//!
//! 没有令牌/会话：登录成功只返回用户记录。

pub mod guard;

pub use guard::{AccountGuard, AttemptState, LoginOutcome, MAX_LOGIN_ATTEMPTS};
