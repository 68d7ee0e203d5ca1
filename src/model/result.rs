//! 面向界面的检测结果
//! 每次成功提交生成一次，生成后不可变，下一次提交整体替换

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};

use crate::detector::classifier::Verdict;

/// 检测结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    #[serde(rename = "isShopify")]
    pub is_shopify: bool,
    pub confidence: f64,
    pub verdict: Verdict,
    pub message: String,
    pub details: String,
    pub detected_signals: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers_sample: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
}

// ======== 为 CheckResult 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.details.is_empty() {
            write!(f, "{} ({})", self.message, self.url)
        } else {
            write!(f, "{} ({}) - {}", self.message, self.url, self.details)
        }
    }
}
