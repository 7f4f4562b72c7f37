// 日志初始化
//
// tracing-subscriber fmt 输出，FINCORE_LOG 环境变量优先于传入级别

use tracing_subscriber::EnvFilter;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// 初始化全局日志订阅器
///
/// 重复调用安全（后续调用为 no-op）
pub fn init_logger(level: LogLevel) {
    let filter = EnvFilter::try_from_env("FINCORE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("fincore={}", level.as_str())));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_as_str() {
        assert_eq!(LogLevel::Debug.as_str(), "debug");
        assert_eq!(LogLevel::Error.as_str(), "error");
    }

    #[test]
    fn test_init_logger_idempotent() {
        init_logger(LogLevel::Info);
        init_logger(LogLevel::Debug);
    }
}
