// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::dto::crawler_config_request::ConfigValidationError;
use crate::domain::repositories::crawler_config_repository::RepositoryError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(validation) = self.0.downcast_ref::<ConfigValidationError>() {
            let body = Json(json!({ "messages": validation.messages }));
            return (StatusCode::BAD_REQUEST, body).into_response();
        }

        if let Some(e) = self.0.downcast_ref::<RepositoryError>() {
            error!(error = %e, "Store fault while handling request");
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
