pub mod activity;
pub mod api_result;
pub mod http;
pub mod logger;

// 导出核心类型
pub use activity::{ActivityGuard, ActivitySnapshot, RequestActivityTracker, Subscription};
pub use api_result::{to_api_error, to_api_error_with, ApiResult};
pub use http::{build_http_client, get_global_client, ApiClient, HttpError};
pub use logger::{init_logger, LogLevel};

// 重新导出 tracing 核心功能
pub use tracing::{debug, error, info, trace, warn};
