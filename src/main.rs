// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use crawlkeeper::config::settings::Settings;
use crawlkeeper::domain::services::crawler_config_service::CrawlerConfigService;
use crawlkeeper::infrastructure::database::connection;
use crawlkeeper::infrastructure::database::unit_of_work::SeaOrmUnitOfWork;
use crawlkeeper::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crawlkeeper::utils::telemetry;
use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting crawlkeeper...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    crawlkeeper::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    if settings.database.run_migrations {
        info!("Running database migrations...");
        Migrator::up(db.as_ref(), None).await?;
        info!("Database migrations applied");
    }

    // 4. Initialize service
    let unit_of_work = Arc::new(SeaOrmUnitOfWork::new(db.clone()));
    let config_service = Arc::new(CrawlerConfigService::new(unit_of_work));

    // 5. Start HTTP server
    let app = routes::routes::<SeaOrmUnitOfWork>().layer(Extension(config_service));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
