use crate::config::AppConfig;
use crate::errors::Result;
use crate::runtime::lifetime::seed::seed_demo_data;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 包括存储初始化、迁移与可选的演示数据
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    if config.app.seed_demo_data {
        seed_demo_data(&storage, &config.argon2).await;
    } else {
        debug!("Demo data seeding disabled");
    }

    Ok(StartupContext { storage })
}
