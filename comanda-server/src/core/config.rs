/// 存储引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbEngine {
    /// 嵌入式 SurrealDB，RocksDB 持久化
    RocksDb,
    /// 嵌入式 SurrealDB，纯内存
    SurrealMemory,
    /// 进程内 MemoryStore
    Memory,
}

impl DbEngine {
    /// 解析 DB_ENGINE，未知值返回 None
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rocksdb" => Some(Self::RocksDb),
            "surreal-memory" | "surreal_memory" => Some(Self::SurrealMemory),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PORT | 3000 | HTTP 服务端口 |
/// | DB_ENGINE | rocksdb | rocksdb / surreal-memory / memory |
/// | DB_PATH | ./data/comanda.db | RocksDB 目录 |
/// | DB_NAMESPACE | comanda | SurrealDB namespace |
/// | DB_NAME | comanda | SurrealDB database |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志目录，按天滚动 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// PORT=8080 DB_ENGINE=memory cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 存储引擎
    pub db_engine: DbEngine,
    /// RocksDB 目录 (仅 rocksdb 引擎)
    pub db_path: String,
    pub db_namespace: String,
    pub db_name: String,
    /// 运行环境: development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_engine: std::env::var("DB_ENGINE")
                .ok()
                .and_then(|v| DbEngine::parse(&v))
                .unwrap_or(DbEngine::RocksDb),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "./data/comanda.db".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "comanda".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "comanda".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, db_engine: DbEngine) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.db_engine = db_engine;
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_engine_parse() {
        assert_eq!(DbEngine::parse("rocksdb"), Some(DbEngine::RocksDb));
        assert_eq!(DbEngine::parse(" Memory "), Some(DbEngine::Memory));
        assert_eq!(DbEngine::parse("surreal-memory"), Some(DbEngine::SurrealMemory));
        assert_eq!(DbEngine::parse("mongodb"), None);
    }

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(4100, DbEngine::Memory);
        assert_eq!(config.http_port, 4100);
        assert_eq!(config.db_engine, DbEngine::Memory);
    }
}
