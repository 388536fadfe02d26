// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{crawled_links, create_test_app, seed_crawled_data};
use axum::http::StatusCode;
use serde_json::{json, Value};

/// 提交配置列表后可以查询到序列化后的关键词
#[tokio::test]
async fn test_save_and_list_configs() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/crawler/configs")
        .json(&json!([
            {
                "url": "https://news.test/list",
                "keywords": ["rust", "tokio"],
                "linkSelector": "ul.news a",
                "titleSelector": "h1",
                "dateSelector": ".date",
                "contentSelector": "article",
                "urlPrefix": "https://news.test/article/"
            },
            {
                "url": "https://blog.test",
                "keywords": []
            }
        ]))
        .await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = app.server.get("/crawler/configs").await;
    response.assert_status_ok();
    let body: Value = response.json();
    let configs = body.as_array().unwrap();

    assert_eq!(configs.len(), 2);
    assert_eq!(configs[0]["url"], "https://news.test/list");
    assert_eq!(configs[0]["keywords"], "rust\ntokio");
    assert_eq!(configs[0]["urlPrefix"], "https://news.test/article/");
    assert_eq!(configs[0]["linkSelector"], "ul.news a");
    assert_eq!(configs[1]["keywords"], "");
    assert_eq!(configs[1]["urlPrefix"], Value::Null);
}

/// 空白的 urlPrefix 不会成为匹配所有链接的级联键
#[tokio::test]
async fn test_blank_url_prefix_falls_back_to_url() {
    let app = create_test_app().await;
    app.server
        .post("/crawler/configs")
        .json(&json!([{ "url": "http://a.test", "urlPrefix": "" }]))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    seed_crawled_data(&app.db_pool, &["http://a.test/p1", "http://b.test/p1"]).await;

    let body: Value = app.server.get("/crawler/configs").await.json();
    assert_eq!(body[0]["urlPrefix"], Value::Null);
    let id = body[0]["id"].as_i64().unwrap();

    app.server
        .delete(&format!("/crawler/configs/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(crawled_links(&app.db_pool).await, vec!["http://b.test/p1"]);
}

/// 校验失败时返回逐项消息，已有配置保持不变
#[tokio::test]
async fn test_invalid_forms_are_rejected() {
    let app = create_test_app().await;
    app.server
        .post("/crawler/configs")
        .json(&json!([{ "url": "http://a.test" }]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = app
        .server
        .post("/crawler/configs")
        .json(&json!([
            { "url": "http://ok.test" },
            { "keywords": ["x"] },
            { "url": "not a url" }
        ]))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["messages"]["1.url"], "url is required");
    assert_eq!(body["messages"]["2.url"], "url is invalid");

    let body: Value = app.server.get("/crawler/configs").await.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["url"], "http://a.test");
}

/// 删除不存在的配置同样返回 204
#[tokio::test]
async fn test_delete_unknown_config() {
    let app = create_test_app().await;

    app.server
        .delete("/crawler/configs/12345")
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

/// 提交空列表清空配置
#[tokio::test]
async fn test_save_empty_list() {
    let app = create_test_app().await;
    app.server
        .post("/crawler/configs")
        .json(&json!([{ "url": "http://a.test" }]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .post("/crawler/configs")
        .json(&json!([]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let body: Value = app.server.get("/crawler/configs").await.json();
    assert!(body.as_array().unwrap().is_empty());
}
