//! 展示格式化工具
//!
//! 证件号分组与利率百分比转换，仅影响展示，不改动原始数据

/// 证件号展示格式（3-7-1 分组）
///
/// 仅对 11 位纯数字串分组，其余输入原样返回
pub fn format_national_id(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 || digits.len() != raw.len() {
        return raw.to_string();
    }
    format!("{}-{}-{}", &digits[..3], &digits[3..10], &digits[10..])
}

/// 小数利率转百分比文案（0.125 → "12.50%"）
pub fn rate_to_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
