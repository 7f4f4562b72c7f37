// ApiResult - 统一 API 结果信封
//
// 所有 action 以此信封取代裸异常/Promise 作为唯一返回契约：
// UI 层对 success 判别做穷尽匹配即可，成功分支没有 error，
// 失败分支没有 data

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::AppError;

/// 提示语缺失时的兜底文案
const GENERIC_FAILURE: &str = "操作失败";

/// 统一结果信封（对 success 判别的标签联合）
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<D, E = serde_json::Value> {
    /// 成功，携带数据
    Success { data: D },
    /// 失败，携带人类可读信息与可选的结构化错误体
    Failure {
        error: String,
        error_data: Option<E>,
    },
}

impl<D, E> ApiResult<D, E> {
    pub fn success(data: D) -> Self {
        Self::Success { data }
    }

    /// 构造失败信封，空文案替换为兜底文案（error 恒非空）
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: non_empty(error.into()),
            error_data: None,
        }
    }

    pub fn failure_with_data(error: impl Into<String>, error_data: E) -> Self {
        Self::Failure {
            error: non_empty(error.into()),
            error_data: Some(error_data),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 成功数据（失败时为 None）
    pub fn data(&self) -> Option<&D> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// 失败信息（成功时为 None）
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    /// 结构化错误体（仅失败且服务端返回了可解码错误体时存在）
    pub fn error_data(&self) -> Option<&E> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_data, .. } => error_data.as_ref(),
        }
    }
}

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

// UI 层按 {"success":true,"data":…} / {"success":false,"error":…,"errorData":…}
// 消费，errorData 缺席时省略字段
impl<D: Serialize, E: Serialize> Serialize for ApiResult<D, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data } => {
                let mut state = serializer.serialize_struct("ApiResult", 2)?;
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
                state.end()
            }
            Self::Failure { error, error_data } => {
                let fields = if error_data.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("ApiResult", fields)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                if let Some(data) = error_data {
                    state.serialize_field("errorData", data)?;
                }
                state.end()
            }
        }
    }
}

/// 将任意错误规范化为失败信封
///
/// 服务端错误体带 `message` 或 `failure_reason` 字段时原样采用该文案，
/// 否则使用调用方提供的兜底文案；错误体本身尽力解码为 `E` 附在
/// `error_data` 上，解码失败静默降级为 None。任何输入都不会 panic
pub fn to_api_error<D, E: DeserializeOwned>(error: &AppError, fallback: &str) -> ApiResult<D, E> {
    to_api_error_with(error, fallback, |_| None)
}

/// 带状态码前置拦截的规范化
///
/// 调用方可按状态码给出更具体的文案（如 409 → 会计期间已锁定），
/// 返回 None 时回落到通用路径
pub fn to_api_error_with<D, E: DeserializeOwned>(
    error: &AppError,
    fallback: &str,
    overrides: impl FnOnce(StatusCode) -> Option<String>,
) -> ApiResult<D, E> {
    let body = error.http_body();

    let message = error
        .http_status()
        .and_then(overrides)
        .or_else(|| body.and_then(body_message))
        .unwrap_or_else(|| fallback.to_string());

    let error_data = body.and_then(|value| serde_json::from_value(value.clone()).ok());

    ApiResult::Failure {
        error: non_empty(message),
        error_data,
    }
}

/// 从错误体提取人类可读信息
fn body_message(body: &serde_json::Value) -> Option<String> {
    ["message", "failure_reason"]
        .into_iter()
        .filter_map(|key| body.get(key))
        .filter_map(|value| value.as_str())
        .find(|text| !text.trim().is_empty())
        .map(str::to_string)
}
