//! 置信度展示格式化

/// 无结果时的展示值
pub const EMPTY_CONFIDENCE_DISPLAY: &str = "0%";

/// 将 [0,1] 置信度格式化为整数百分比，百分数按四舍五入（半数进位）
pub fn format_confidence(confidence: f64) -> String {
    let percent = (confidence * 100.0 + 0.5).floor();
    format!("{}%", percent as i64)
}
