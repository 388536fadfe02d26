// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{crawled_links, create_test_db, seed_crawled_data};
use crawlkeeper::domain::models::crawler_config::CrawlerConfig;
use crawlkeeper::domain::repositories::crawled_data_repository::CrawledDataRepository;
use crawlkeeper::domain::repositories::crawler_config_repository::CrawlerConfigRepository;
use crawlkeeper::domain::repositories::unit_of_work::UnitOfWork;
use crawlkeeper::infrastructure::database::unit_of_work::SeaOrmUnitOfWork;
use crawlkeeper::infrastructure::repositories::crawled_data_repo_impl::CrawledDataRepositoryImpl;
use crawlkeeper::infrastructure::repositories::crawler_config_repo_impl::CrawlerConfigRepositoryImpl;

fn config(url: &str, keywords: Option<&str>) -> CrawlerConfig {
    CrawlerConfig {
        id: None,
        url: Some(url.to_string()),
        keywords: keywords.map(str::to_string),
        link_selector: Some("a.item".to_string()),
        title_selector: None,
        date_selector: None,
        content_selector: None,
        url_prefix: None,
    }
}

/// 测试配置仓库的基本读写
///
/// 批量插入后返回带ID的记录，顺序与输入一致，可按ID查询和删除。
#[tokio::test]
async fn test_config_repository_crud() {
    let db = create_test_db().await;
    let repo = CrawlerConfigRepositoryImpl::new(db.as_ref());

    let saved = repo
        .save_all_and_flush(vec![
            config("http://a.test", Some("foo\nbar")),
            config("http://b.test", None),
        ])
        .await
        .unwrap();

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].url.as_deref(), Some("http://a.test"));
    assert_eq!(saved[1].url.as_deref(), Some("http://b.test"));
    let first_id = saved[0].id.unwrap();
    assert!(saved[1].id.unwrap() > first_id);

    let found = repo.find_by_id(first_id).await.unwrap().unwrap();
    assert_eq!(found.keywords.as_deref(), Some("foo\nbar"));
    assert_eq!(found.link_selector.as_deref(), Some("a.item"));

    repo.delete(&found).await.unwrap();
    assert!(repo.find_by_id(first_id).await.unwrap().is_none());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);

    assert_eq!(repo.delete_all().await.unwrap(), 1);
    assert!(repo.find_all().await.unwrap().is_empty());
}

/// 测试空字符串关键词与空值被区分保存
#[tokio::test]
async fn test_empty_keywords_are_not_null() {
    let db = create_test_db().await;
    let repo = CrawlerConfigRepositoryImpl::new(db.as_ref());

    repo.save_all_and_flush(vec![config("http://a.test", Some("")), config("http://b.test", None)])
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all[0].keywords.as_deref(), Some(""));
    assert_eq!(all[1].keywords, None);
}

/// 测试空批量插入
#[tokio::test]
async fn test_save_empty_batch() {
    let db = create_test_db().await;
    let repo = CrawlerConfigRepositoryImpl::new(db.as_ref());

    let saved = repo.save_all_and_flush(vec![]).await.unwrap();

    assert!(saved.is_empty());
}

/// 测试前缀删除区分大小写
#[tokio::test]
async fn test_delete_by_prefix_is_case_sensitive() {
    let db = create_test_db().await;
    seed_crawled_data(&db, &["http://A.test/p1", "http://a.test/p1", "http://a.test/p2"]).await;

    let removed = CrawledDataRepositoryImpl::new(db.as_ref())
        .delete_by_link_starting_with("http://a.test")
        .await
        .unwrap();

    assert_eq!(removed, 2);
    assert_eq!(crawled_links(&db).await, vec!["http://A.test/p1"]);
}

/// 测试前缀中的 LIKE 通配符按字面匹配
#[tokio::test]
async fn test_delete_by_prefix_treats_wildcards_literally() {
    let db = create_test_db().await;
    seed_crawled_data(
        &db,
        &["http://a.test/100%_off/1", "http://a.test/100xyoff/2", "http://a.test/100%_off"],
    )
    .await;

    let removed = CrawledDataRepositoryImpl::new(db.as_ref())
        .delete_by_link_starting_with("http://a.test/100%_off")
        .await
        .unwrap();

    assert_eq!(removed, 2);
    assert_eq!(crawled_links(&db).await, vec!["http://a.test/100xyoff/2"]);
}

/// 测试前缀只从链接开头匹配
#[tokio::test]
async fn test_delete_by_prefix_matches_only_at_start() {
    let db = create_test_db().await;
    seed_crawled_data(&db, &["http://mirror.test/?u=http://a.test/p1", "http://a.test/p1"]).await;

    let removed = CrawledDataRepositoryImpl::new(db.as_ref())
        .delete_by_link_starting_with("http://a.test")
        .await
        .unwrap();

    assert_eq!(removed, 1);
    assert_eq!(
        crawled_links(&db).await,
        vec!["http://mirror.test/?u=http://a.test/p1"]
    );
}

/// 测试未提交的事务被回滚
#[tokio::test]
async fn test_dropped_transaction_rolls_back() {
    let db = create_test_db().await;
    let uow = SeaOrmUnitOfWork::new(db.clone());

    {
        let scope = uow.begin().await.unwrap();
        scope
            .save_all_and_flush(vec![config("http://a.test", None)])
            .await
            .unwrap();
    }

    let scope = uow.begin().await.unwrap();
    assert!(scope.find_all().await.unwrap().is_empty());
    uow.commit(scope).await.unwrap();
}

/// 测试提交后的事务写入可见
#[tokio::test]
async fn test_committed_transaction_is_visible() {
    let db = create_test_db().await;
    let uow = SeaOrmUnitOfWork::new(db.clone());

    let scope = uow.begin().await.unwrap();
    scope
        .save_all_and_flush(vec![config("http://a.test", None)])
        .await
        .unwrap();
    uow.commit(scope).await.unwrap();

    let all = CrawlerConfigRepositoryImpl::new(db.as_ref())
        .find_all()
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}
