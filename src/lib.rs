//! shopifyornot - Shopify 站点检测客户端
//! URL 规范化 → 检测服务调用 → 结果分级，由检测会话统一编排

// 导出全局错误类型
pub use self::error::{
    DetectionError, ShopifyOrNotError, SonResult, FALLBACK_ERROR_MESSAGE, VALIDATION_MESSAGE,
};

// 导出配置模块
pub use self::config::{ConfigManager, CustomConfigBuilder, GlobalConfig};

// 导出数据模型
pub use self::model::{CheckResult, NormalizedCheckResponse, RawCheckResponse};

// 导出URL规范化接口
pub use self::normalizer::{DecodeOutcome, UrlNormalizer};

// 导出检测模块核心接口
pub use self::detector::{
    DetectionClient, HttpDetectionClient, ResultClassifier, Verdict, AMBIGUOUS_THRESHOLD,
};

// 导出会话模块核心接口
pub use self::session::{CheckSession, SessionPhase, SessionState, SubmitOutcome};

// 导出工具模块核心接口
pub use self::utils::format_confidence;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod detector;
pub mod session;
pub mod utils;
