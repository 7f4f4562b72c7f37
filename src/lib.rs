// fincore - 金融后台管理系统客户端核心层
//
// 统一的 API 结果信封、传输错误规范化与全局请求活动跟踪，
// 外加配置存储、DTO 模型与各业务域的瘦 action 封装

pub mod actions;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod testutil;

pub use crate::core::{
    to_api_error, to_api_error_with, ActivityGuard, ActivitySnapshot, ApiClient, ApiResult,
    HttpError, RequestActivityTracker, Subscription,
};
pub use crate::error::{AppError, AppResult};
pub use crate::services::{ApiConfig, ConfigStore};
