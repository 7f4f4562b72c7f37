// 会计数据模型
//
// 科目表、会计凭证与试算平衡表的传输结构

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 会计科目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    /// 科目编码
    pub code: String,
    pub name: String,
    /// 科目类型（asset | liability | equity | income | expense）
    pub account_type: String,
    /// 上级科目
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub active: bool,
}

/// 凭证分录行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    pub account_id: i64,
    pub debit: f64,
    pub credit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// 会计凭证
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    pub entry_date: NaiveDate,
    /// 凭证号
    pub reference: String,
    pub description: String,
    pub lines: Vec<JournalLine>,
    /// 是否已过账（借贷平衡由服务端校验）
    pub posted: bool,
}

/// 新建凭证请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub entry_date: NaiveDate,
    pub description: String,
    pub lines: Vec<JournalLine>,
}

/// 试算平衡表行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_code: String,
    pub account_name: String,
    pub debit: f64,
    pub credit: f64,
}
