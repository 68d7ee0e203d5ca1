//! 会话状态
//! 仅由 CheckSession 写入，展示层只读

use serde::Serialize;

use crate::model::CheckResult;
use crate::utils::confidence::{format_confidence, EMPTY_CONFIDENCE_DISPLAY};

/// 会话阶段（由状态字段推导）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// 会话状态快照
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    /// 输入框中的可编辑文本
    pub url: String,
    pub result: Option<CheckResult>,
    pub loading: bool,
    pub error: Option<String>,
    /// 技术详情面板开关，与结果无关
    pub show_technical: bool,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Submitting
        } else if self.error.is_some() {
            SessionPhase::Failed
        } else if self.result.is_some() {
            SessionPhase::Success
        } else {
            SessionPhase::Idle
        }
    }

    /// 置信度展示值，无结果时为 "0%"
    pub fn confidence_display(&self) -> String {
        match &self.result {
            Some(result) => format_confidence(result.confidence),
            None => EMPTY_CONFIDENCE_DISPLAY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::classifier::Verdict;

    fn result(confidence: f64) -> CheckResult {
        CheckResult {
            url: "example.com".to_string(),
            is_shopify: true,
            confidence,
            verdict: Verdict::Confirmed,
            message: Verdict::Confirmed.message().to_string(),
            details: String::new(),
            detected_signals: Vec::new(),
            headers_sample: None,
            shop_domain: None,
            elapsed_ms: None,
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = SessionState::default();
        assert_eq!(state.phase(), SessionPhase::Idle);
        assert_eq!(state.confidence_display(), "0%");
    }

    #[test]
    fn test_phase_derivation() {
        let mut state = SessionState {
            loading: true,
            ..Default::default()
        };
        assert_eq!(state.phase(), SessionPhase::Submitting);

        state.loading = false;
        state.result = Some(result(0.956));
        assert_eq!(state.phase(), SessionPhase::Success);
        assert_eq!(state.confidence_display(), "96%");

        state.error = Some("boom".to_string());
        assert_eq!(state.phase(), SessionPhase::Failed);
    }
}
