//! 检测服务响应模型
//! 原始响应按服务契约反序列化，缺省字段在规范化时一次性补齐

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// 检测服务原始响应
/// `input_url` 与 `is_shopify` 为必填字段，缺失即视为契约违规（反序列化失败）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCheckResponse {
    pub input_url: String,
    #[serde(default)]
    pub final_url: Option<String>,
    pub is_shopify: bool,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub detected_signals: Option<Vec<String>>,
    #[serde(default)]
    pub shop_domain: Option<String>,
    #[serde(default)]
    pub headers_sample: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub elapsed_ms: Option<f64>,
}

/// 规范化后的检测响应，`detected_signals` 恒存在
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCheckResponse {
    pub input_url: String,
    pub final_url: Option<String>,
    pub is_shopify: bool,
    pub confidence: Option<f64>,
    pub detected_signals: Vec<String>,
    pub shop_domain: Option<String>,
    pub headers_sample: Option<BTreeMap<String, String>>,
    pub elapsed_ms: Option<f64>,
}

impl NormalizedCheckResponse {
    /// 置信度，缺省按 0 处理
    pub fn confidence_or_zero(&self) -> f64 {
        self.confidence.unwrap_or(0.0)
    }

    /// 实际检测的地址：重定向后的地址优先
    pub fn checked_url(&self) -> &str {
        match self.final_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.input_url,
        }
    }
}

impl From<RawCheckResponse> for NormalizedCheckResponse {
    fn from(raw: RawCheckResponse) -> Self {
        Self {
            input_url: raw.input_url,
            final_url: raw.final_url,
            is_shopify: raw.is_shopify,
            confidence: raw.confidence,
            detected_signals: raw.detected_signals.unwrap_or_default(),
            shop_domain: raw.shop_domain,
            headers_sample: raw.headers_sample,
            elapsed_ms: raw.elapsed_ms,
        }
    }
}
