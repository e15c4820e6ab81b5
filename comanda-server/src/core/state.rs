use shared::models::{Category, DiningTable, Plate, User};

use crate::auth::AccountGuard;
use crate::core::Config;
use crate::db::repository::Repository;
use crate::db::{self, SharedStore};
use crate::orders::OrderLedger;
use crate::utils::AppResult;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 存储句柄在启动时创建一次，之后克隆进每个组件；
/// 所有字段都是 `Arc` 浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | SharedStore | 文档存储 |
/// | guard | AccountGuard | 登录锁定守卫 |
/// | ledger | OrderLedger | 订单 |
/// | tables / categories / plates / users | Repository | 目录 CRUD |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储 (进程内唯一)
    pub store: SharedStore,
    pub guard: AccountGuard,
    pub ledger: OrderLedger,
    pub tables: Repository<DiningTable>,
    pub categories: Repository<Category>,
    pub plates: Repository<Plate>,
    pub users: Repository<User>,
}

impl ServerState {
    /// 用已打开的存储构造状态
    pub fn new(config: Config, store: SharedStore) -> Self {
        Self {
            guard: AccountGuard::new(store.clone()),
            ledger: OrderLedger::new(store.clone()),
            tables: Repository::new(store.clone()),
            categories: Repository::new(store.clone()),
            plates: Repository::new(store.clone()),
            users: Repository::new(store.clone()),
            store,
            config,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按配置打开存储引擎
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let store = db::open_store(config).await?;
        Ok(Self::new(config.clone(), store))
    }
}
