// 客户 actions

use crate::core::api_result::{to_api_error, ApiResult};
use crate::core::http::ApiClient;
use crate::models::clients::{Client, NewClient};
use crate::models::ValidationErrors;

/// 客户列表（可按关键字过滤）
pub async fn list_clients(client: &ApiClient, search: Option<&str>) -> ApiResult<Vec<Client>> {
    let query: Vec<(&str, String)> = search
        .map(|term| vec![("search", term.to_string())])
        .unwrap_or_default();
    match client.get("/api/clients", &query).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取客户列表失败"),
    }
}

/// 获取单个客户
pub async fn get_client(client: &ApiClient, id: i64) -> ApiResult<Client> {
    match client.get(&format!("/api/clients/{}", id), &[]).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取客户信息失败"),
    }
}

/// 新建客户档案
pub async fn create_client(
    client: &ApiClient,
    new_client: &NewClient,
) -> ApiResult<Client, ValidationErrors> {
    match client.post("/api/clients", new_client).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "创建客户失败"),
    }
}
