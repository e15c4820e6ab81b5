//! Comanda Server - 餐厅前厅 HTTP API
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 文档存储网关，嵌入式 SurrealDB 或进程内存储
//! - **认证** (`auth`): 登录失败计数与账号锁定
//! - **订单** (`orders`): 订单台账，桌台当前未结订单查询
//! - **HTTP API** (`api`): RESTful API 接口，统一响应信封
//!
//! # 模块结构
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # 账号锁定守卫
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志、校验
//! ├── db/            # 存储层
//! └── orders/        # 订单台账
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{AccountGuard, LoginOutcome};
pub use core::{Config, DbEngine, Server, ServerState, build_router};
pub use orders::OrderLedger;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ______                                __
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
