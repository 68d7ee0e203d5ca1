//! 数据模型模块：检测服务原始响应、规范化响应与面向界面的检测结果
pub mod response;
pub mod result;

// 导出核心接口
pub use self::response::{RawCheckResponse, NormalizedCheckResponse};
pub use self::result::CheckResult;
