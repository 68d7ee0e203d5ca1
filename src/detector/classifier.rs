//! 结果分级器：将规范化的检测响应映射为三档结论
//! 纯函数，无副作用；相同输入恒得相同输出

use serde::{Deserialize, Serialize};

use crate::model::{CheckResult, NormalizedCheckResponse};

/// 非 Shopify 时区分“疑似”与“否定”的置信度阈值（严格大于）
pub const AMBIGUOUS_THRESHOLD: f64 = 0.3;

const CONFIRMED_MESSAGE: &str = "✅ This is a Shopify store!";
const AMBIGUOUS_MESSAGE: &str = "⚠️ Possibly not a Shopify store";
const NEGATIVE_MESSAGE: &str = "❌ Not a Shopify store";

const AMBIGUOUS_DETAILS: &str =
    "Some Shopify-like patterns were detected, but not enough to confirm.";
const NEGATIVE_DETAILS: &str = "This website does not appear to be powered by Shopify.";

const DETAILS_SEPARATOR: &str = " • ";

/// 结论档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Confirmed,
    Ambiguous,
    Negative,
}

impl Verdict {
    /// 由 is_shopify 与置信度判定档位
    pub fn from_signals(is_shopify: bool, confidence: f64) -> Self {
        if is_shopify {
            Verdict::Confirmed
        } else if confidence > AMBIGUOUS_THRESHOLD {
            Verdict::Ambiguous
        } else {
            Verdict::Negative
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Confirmed => CONFIRMED_MESSAGE,
            Verdict::Ambiguous => AMBIGUOUS_MESSAGE,
            Verdict::Negative => NEGATIVE_MESSAGE,
        }
    }
}

/// 结果分级器
pub struct ResultClassifier;

impl ResultClassifier {
    /// 分级并生成界面结果
    pub fn classify(data: &NormalizedCheckResponse) -> CheckResult {
        let confidence = data.confidence_or_zero();
        let verdict = Verdict::from_signals(data.is_shopify, confidence);

        let details = match verdict {
            Verdict::Confirmed => Self::confirmed_details(data),
            Verdict::Ambiguous => AMBIGUOUS_DETAILS.to_string(),
            Verdict::Negative => NEGATIVE_DETAILS.to_string(),
        };

        CheckResult {
            url: data.checked_url().to_string(),
            is_shopify: data.is_shopify,
            confidence,
            verdict,
            message: verdict.message().to_string(),
            details,
            detected_signals: data.detected_signals.clone(),
            headers_sample: data.headers_sample.clone(),
            shop_domain: data.shop_domain.clone(),
            elapsed_ms: data.elapsed_ms,
        }
    }

    /// 确认档的说明：店铺域名 + 信号数量，两段均可缺省
    fn confirmed_details(data: &NormalizedCheckResponse) -> String {
        let mut clauses = Vec::with_capacity(2);

        if let Some(domain) = data.shop_domain.as_deref().filter(|d| !d.is_empty()) {
            clauses.push(format!("Shop domain: {}", domain));
        }
        if !data.detected_signals.is_empty() {
            clauses.push(format!("{} Shopify signals detected", data.detected_signals.len()));
        }

        clauses.join(DETAILS_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(is_shopify: bool, confidence: Option<f64>) -> NormalizedCheckResponse {
        NormalizedCheckResponse {
            input_url: "example.com".to_string(),
            final_url: None,
            is_shopify,
            confidence,
            detected_signals: Vec::new(),
            shop_domain: None,
            headers_sample: None,
            elapsed_ms: None,
        }
    }

    #[test]
    fn test_confirmed_with_domain_and_signals() {
        let mut data = response(true, Some(0.9));
        data.shop_domain = Some("foo.myshopify.com".to_string());
        data.detected_signals = vec!["a".to_string(), "b".to_string()];

        let result = ResultClassifier::classify(&data);
        assert_eq!(result.verdict, Verdict::Confirmed);
        assert_eq!(result.message, CONFIRMED_MESSAGE);
        assert_eq!(result.details, "Shop domain: foo.myshopify.com • 2 Shopify signals detected");
    }

    #[test]
    fn test_confirmed_clauses_are_independent() {
        // 测试场景：仅有域名
        let mut only_domain = response(true, None);
        only_domain.shop_domain = Some("foo.myshopify.com".to_string());
        assert_eq!(ResultClassifier::classify(&only_domain).details, "Shop domain: foo.myshopify.com");

        // 测试场景：仅有信号
        let mut only_signals = response(true, None);
        only_signals.detected_signals = vec!["shopify-cdn".to_string()];
        assert_eq!(ResultClassifier::classify(&only_signals).details, "1 Shopify signals detected");

        // 测试场景：两者都没有
        assert_eq!(ResultClassifier::classify(&response(true, None)).details, "");
    }

    #[test]
    fn test_confirmed_ignores_low_confidence() {
        let result = ResultClassifier::classify(&response(true, Some(0.1)));
        assert_eq!(result.verdict, Verdict::Confirmed);
        assert_eq!(result.confidence, 0.1);
    }

    #[test]
    fn test_ambiguous_above_threshold() {
        let result = ResultClassifier::classify(&response(false, Some(0.5)));
        assert_eq!(result.verdict, Verdict::Ambiguous);
        assert_eq!(result.message, AMBIGUOUS_MESSAGE);
        assert_eq!(result.details, AMBIGUOUS_DETAILS);
    }

    #[test]
    fn test_threshold_boundary_is_negative() {
        // 测试场景：恰好等于阈值，严格大于比较，应为否定档
        let result = ResultClassifier::classify(&response(false, Some(0.3)));
        assert_eq!(result.verdict, Verdict::Negative);
        assert_eq!(result.message, NEGATIVE_MESSAGE);
        assert_eq!(result.details, NEGATIVE_DETAILS);
    }

    #[test]
    fn test_missing_confidence_defaults_to_zero() {
        let result = ResultClassifier::classify(&response(false, None));
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.verdict, Verdict::Negative);
    }

    #[test]
    fn test_final_url_preferred() {
        let mut data = response(false, None);
        data.final_url = Some("https://www.example.com/".to_string());
        assert_eq!(ResultClassifier::classify(&data).url, "https://www.example.com/");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let mut data = response(true, Some(0.95));
        data.shop_domain = Some("foo.myshopify.com".to_string());
        data.detected_signals = vec!["shopify-header".to_string()];
        assert_eq!(ResultClassifier::classify(&data), ResultClassifier::classify(&data));
    }
}
