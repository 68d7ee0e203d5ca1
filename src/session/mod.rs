//! 检测会话模块：会话状态与提交流程控制
pub mod state;
pub mod controller;

// 导出核心接口
pub use self::state::{SessionPhase, SessionState};
pub use self::controller::{CheckSession, SubmitOutcome};
