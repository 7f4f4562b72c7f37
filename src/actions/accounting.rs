// 会计 actions
//
// 科目表、凭证与试算平衡的瘦 REST 封装，统一返回 ApiResult

use chrono::NaiveDate;
use reqwest::StatusCode;

use crate::core::api_result::{to_api_error, to_api_error_with, ApiResult};
use crate::core::http::ApiClient;
use crate::models::accounting::{Account, JournalEntry, NewJournalEntry, TrialBalanceRow};
use crate::models::ValidationErrors;

/// 获取科目表
pub async fn list_accounts(client: &ApiClient) -> ApiResult<Vec<Account>> {
    match client.get("/api/accounting/accounts", &[]).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取科目表失败"),
    }
}

/// 新建会计凭证
///
/// 409 表示目标会计期间已被服务端锁定，给出比通用文案更具体的提示；
/// 422 的字段级校验错误体作为 errorData 透出给表单层
pub async fn create_journal_entry(
    client: &ApiClient,
    entry: &NewJournalEntry,
) -> ApiResult<JournalEntry, ValidationErrors> {
    match client.post("/api/accounting/journal-entries", entry).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error_with(&err.into(), "创建凭证失败", |status| {
            (status == StatusCode::CONFLICT).then(|| "会计期间已锁定，无法记账".to_string())
        }),
    }
}

/// 获取试算平衡表
pub async fn get_trial_balance(
    client: &ApiClient,
    from: NaiveDate,
    to: NaiveDate,
) -> ApiResult<Vec<TrialBalanceRow>> {
    let query = [("from", from.to_string()), ("to", to.to_string())];
    match client.get("/api/accounting/trial-balance", &query).await {
        Ok(data) => ApiResult::success(data),
        Err(err) => to_api_error(&err.into(), "获取试算平衡表失败"),
    }
}
