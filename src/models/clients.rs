// 客户数据模型

use serde::{Deserialize, Serialize};

/// 客户档案
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    /// 证件号（原始数字串，展示格式由 utils::format 处理）
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 所属分支机构
    pub agency_id: i64,
    /// 创建时间（Unix 时间戳，毫秒）
    pub created_at: i64,
}

/// 新建客户请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClient {
    pub national_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub agency_id: i64,
}
