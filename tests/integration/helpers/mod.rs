// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum_test::TestServer;
use crawlkeeper::config::settings::DatabaseSettings;
use crawlkeeper::domain::models::crawled_data::CrawledData;
use crawlkeeper::domain::services::crawler_config_service::CrawlerConfigService;
use crawlkeeper::infrastructure::database::connection;
use crawlkeeper::infrastructure::database::unit_of_work::SeaOrmUnitOfWork;
use crawlkeeper::infrastructure::repositories::crawled_data_repo_impl::CrawledDataRepositoryImpl;
use crawlkeeper::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub service: Arc<CrawlerConfigService<SeaOrmUnitOfWork>>,
}

/// 基于内存 SQLite 的数据库连接，已执行迁移
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
        run_migrations: true,
        log_statements: false,
    };

    let db = connection::create_pool(&db_settings).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let service = Arc::new(CrawlerConfigService::new(Arc::new(SeaOrmUnitOfWork::new(
        db_pool.clone(),
    ))));

    let app = routes::routes::<SeaOrmUnitOfWork>().layer(Extension(service.clone()));
    let server = TestServer::new(app).unwrap();

    TestApp {
        server,
        db_pool,
        service,
    }
}

/// 模拟外部爬虫写入已爬取数据
pub async fn seed_crawled_data(db: &DatabaseConnection, links: &[&str]) {
    let repo = CrawledDataRepositoryImpl::new(db);
    for link in links {
        repo.insert(&CrawledData::with_link(*link)).await.unwrap();
    }
}

pub async fn crawled_links(db: &DatabaseConnection) -> Vec<String> {
    CrawledDataRepositoryImpl::new(db)
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.link)
        .collect()
}
