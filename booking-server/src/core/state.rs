//! Server State

use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio_util::sync::CancellationToken;

use crate::auth::JwtService;
use crate::cart::{CartStore, run_sweeper};
use crate::core::Config;
use crate::db::{DbService, seed};

/// 清扫任务的运行间隔
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是服务的核心数据结构，使用 Arc 实现浅拷贝，
/// 每个请求处理函数拿到的都是同一组服务的共享引用。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | carts | Arc<CartStore> | 会话购物车 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 会话购物车存储
    pub carts: Arc<CartStore>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/booking.db)
    /// 3. 默认数据 (店主账号、桌台、示例菜单)
    /// 4. JWT 服务和购物车存储
    ///
    /// # Panics
    ///
    /// 数据库初始化或种子数据写入失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        // 1. Initialize DB
        let db_path = config.database_dir().join("booking.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str)
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        // 2. Seed defaults into an empty database
        seed::seed_defaults(&db)
            .await
            .expect("Failed to seed default data");

        Self::with_db(config.clone(), db)
    }

    /// 使用已打开的数据库构造状态 (测试用内存引擎)
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let cart_ttl = Duration::from_secs(config.cart_ttl_minutes * 60);
        Self {
            config: config.clone(),
            db,
            jwt_service: Arc::new(JwtService::with_config(config.jwt)),
            carts: Arc::new(CartStore::new(cart_ttl)),
        }
    }

    /// 启动后台任务
    ///
    /// 必须在 `Server::run()` 之前调用
    ///
    /// 启动的任务：
    /// - 空闲购物车清扫 (cart sweeper)
    pub fn start_background_tasks(&self, shutdown: &CancellationToken) {
        tokio::spawn(run_sweeper(
            self.carts.clone(),
            SWEEP_INTERVAL,
            shutdown.clone(),
        ));
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取购物车存储
    pub fn cart_store(&self) -> &Arc<CartStore> {
        &self.carts
    }
}
