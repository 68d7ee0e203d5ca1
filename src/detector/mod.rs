//! 检测模块：检测服务调用与结果分级
pub mod client;
pub mod classifier;

// 导出核心接口
pub use self::client::{DetectionClient, HttpDetectionClient};
pub use self::classifier::{ResultClassifier, Verdict, AMBIGUOUS_THRESHOLD};
