// HTTP 客户端核心模块
//
// 全局 reqwest 客户端 + 带请求活动跟踪的 ApiClient 封装

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::core::activity::ActivityGuard;
use crate::error::AppResult;

/// 默认请求超时（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 传输层错误
///
/// 在客户端边界统一打标。上层（`to_api_error`）按变体匹配，
/// 不对未知形状的错误对象做结构探测
#[derive(Debug, Error)]
pub enum HttpError {
    /// 未收到响应（网络故障、超时、连接被拒等）
    #[error("网络请求失败: {0}")]
    Transport(#[from] reqwest::Error),
    /// 服务端返回非 2xx 状态码，body 为尽力解码的 JSON 错误体
    #[error("服务端返回错误状态: {status}")]
    Status {
        status: StatusCode,
        body: Option<Value>,
    },
    /// 2xx 响应体解码失败
    #[error("响应解析失败: {0}")]
    Decode(#[source] serde_json::Error),
}

impl HttpError {
    /// 服务端返回的状态码（未收到响应时为 None）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(err) => err.status(),
            Self::Status { status, .. } => Some(*status),
            Self::Decode(_) => None,
        }
    }

    /// 服务端返回的已解码 JSON 错误体
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// 全局 HTTP 客户端（懒初始化，进程生命周期内复用连接池）
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// 构建带默认超时的 HTTP 客户端
pub fn build_http_client() -> AppResult<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(HttpError::Transport)?;
    Ok(client)
}

/// 获取全局 HTTP 客户端
pub fn get_global_client() -> &'static Client {
    &HTTP_CLIENT
}

/// 后台 API 客户端
///
/// 持有服务端基地址与访问令牌，每个请求的完整生命周期
/// （发送到解码）都登记在全局请求活动跟踪器中
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl ApiClient {
    /// 创建客户端，校验基地址合法性
    pub fn new(base_url: &str) -> AppResult<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            client: get_global_client().clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        self.execute(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        self.execute(self.request(Method::DELETE, path)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, HttpError> {
        // 成功或失败都会在 guard 析构时反注册
        let _guard = ActivityGuard::begin();

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            // 错误体解码失败不视为错误，按无结构化数据处理
            let body = response.json::<Value>().await.ok();
            tracing::debug!("请求失败: {}", status);
            return Err(HttpError::Status { status, body });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(HttpError::Decode)
    }
}
