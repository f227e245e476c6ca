use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::api::ApiState;
use crate::config::StaticConfig;
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub state: Arc<ApiState>,
}

/// 准备服务器启动的上下文
/// 包括存储连接、迁移、服务装配和默认 offer 初始化
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {}",
        storage.get_backend_config().storage_type
    );

    let state = Arc::new(ApiState::new(storage.clone(), config));

    if config.seed.enabled {
        let seeded = state
            .offers
            .seed_defaults_if_empty()
            .await
            .context("Failed to seed default offers")?;
        if seeded > 0 {
            info!("Seeded {} default offers", seeded);
        }
    } else {
        warn!("Default offer seeding is disabled");
    }

    if config.uses_default_password() {
        warn!("Admin password is the built-in default, set ADMIN_PASSWORD in production");
    }
    if config.auth.session_marker.is_none() {
        info!("Admin session marker generated for this process; sessions end on restart");
    }

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext { storage, state })
}
