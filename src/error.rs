use std::fmt::Display;

use thiserror::Error;

use crate::core::http::HttpError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP 请求错误: {0}")]
    Http(#[from] HttpError),
    #[error("URL 解析错误: {0}")]
    Url(#[from] url::ParseError),
    #[error("配置错误: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn config<E: Display>(err: E) -> Self {
        Self::Config(err.to_string())
    }

    pub fn other<E: Display>(err: E) -> Self {
        Self::Other(err.to_string())
    }

    /// 服务端返回的 HTTP 状态码（非 HTTP 错误时为 None）
    pub fn http_status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http(err) => err.status(),
            _ => None,
        }
    }

    /// 服务端返回的已解码 JSON 错误体
    pub fn http_body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Http(err) => err.body(),
            _ => None,
        }
    }
}
