// 机构目录数据模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 分支机构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub active: bool,
}

/// 节假日
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub date: NaiveDate,
    pub name: String,
}
