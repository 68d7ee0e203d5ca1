//! 工具模块
pub mod confidence;

pub use self::confidence::format_confidence;
