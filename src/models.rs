pub mod accounting;
pub mod catalogs;
pub mod clients;
pub mod loans;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 服务端字段级校验错误体
///
/// 400/422 拒绝时作为结构化 errorData 附在失败信封上，
/// 供表单层做字段映射
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationErrors {
    /// 整体提示
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 字段名 → 错误文案列表
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}
