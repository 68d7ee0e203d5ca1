//! URL规范化模块：把用户输入或路由片段整理为发送给检测服务的裸域名/路径
pub mod url_normalizer;

// 导出核心接口
pub use self::url_normalizer::{DecodeOutcome, UrlNormalizer};
