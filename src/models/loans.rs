// 贷款数据模型
//
// 贷款、还款计划与放款请求（摊销计算在服务端完成，此处仅展示）

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 贷款
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub client_id: i64,
    /// 贷款产品名称
    pub product: String,
    /// 本金
    pub principal: f64,
    /// 年利率（小数，0.125 = 12.5%）
    pub rate: f64,
    /// 状态（pending | active | closed | written_off）
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disbursed_at: Option<NaiveDate>,
}

/// 还款计划期次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInstallment {
    /// 期次号（从 1 开始）
    pub number: u32,
    pub due_date: NaiveDate,
    pub principal: f64,
    pub interest: f64,
    /// 期末剩余本金
    pub balance: f64,
}

/// 放款请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisburseRequest {
    pub disbursement_date: NaiveDate,
    /// 放款账户（出纳科目）
    pub account_id: i64,
}
