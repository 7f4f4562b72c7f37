// 机构目录 actions

use crate::core::api_result::{to_api_error, ApiResult};
use crate::core::http::ApiClient;
use crate::models::catalogs::{Agency, Holiday};

/// 分支机构列表
pub async fn list_agencies(client: &ApiClient) -> ApiResult<Vec<Agency>> {
    match client.get("/api/catalogs/agencies", &[]).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取分支机构列表失败"),
    }
}

/// 指定年份的节假日列表
pub async fn list_holidays(client: &ApiClient, year: i32) -> ApiResult<Vec<Holiday>> {
    let query = [("year", year.to_string())];
    match client.get("/api/catalogs/holidays", &query).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取节假日列表失败"),
    }
}
