// 贷款 actions

use reqwest::StatusCode;

use crate::core::api_result::{to_api_error, to_api_error_with, ApiResult};
use crate::core::http::ApiClient;
use crate::models::loans::{DisburseRequest, Loan, ScheduleInstallment};

/// 贷款列表（可按客户过滤）
pub async fn list_loans(client: &ApiClient, client_id: Option<i64>) -> ApiResult<Vec<Loan>> {
    let query: Vec<(&str, String)> = client_id
        .map(|id| vec![("client_id", id.to_string())])
        .unwrap_or_default();
    match client.get("/api/loans", &query).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取贷款列表失败"),
    }
}

/// 获取还款计划（服务端摊销结果）
pub async fn get_loan_schedule(
    client: &ApiClient,
    loan_id: i64,
) -> ApiResult<Vec<ScheduleInstallment>> {
    match client
        .get(&format!("/api/loans/{}/schedule", loan_id), &[])
        .await
    {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取还款计划失败"),
    }
}

/// 放款
///
/// 409 表示贷款不在可放款状态（已放款或已关闭）
pub async fn disburse_loan(
    client: &ApiClient,
    loan_id: i64,
    request: &DisburseRequest,
) -> ApiResult<Loan> {
    match client
        .post(&format!("/api/loans/{}/disburse", loan_id), request)
        .await
    {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error_with(&err.into(), "放款失败", |status| {
            (status == StatusCode::CONFLICT).then(|| "贷款不在可放款状态".to_string())
        }),
    }
}
