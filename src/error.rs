//! 全局错误类型定义

use reqwest::StatusCode;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;

/// 空输入提交时展示给用户的固定提示
pub const VALIDATION_MESSAGE: &str = "Please enter a website URL to check.";

/// 错误本身没有可读信息时使用的兜底提示
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong while checking that site.";

/// 检测服务调用失败（传输失败 / 非成功状态码 / 响应体不合法）
#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("Detection service returned an invalid response: {0}")]
    Payload(#[from] SerdeJsonError),
    #[error("Invalid detection endpoint: {0}")]
    InvalidEndpoint(String),
}

impl DetectionError {
    /// 面向用户的错误信息，为空时使用兜底提示
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Error, Debug)]
pub enum ShopifyOrNotError {
    // 检测服务错误（含接口地址配置错误）
    #[error(transparent)]
    Detection(#[from] DetectionError),

    // HTTP客户端构建失败
    #[error("HTTP client setup failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

// 全局Result类型
pub type SonResult<T> = Result<T, ShopifyOrNotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_message_verbatim() {
        let err = DetectionError::Status {
            status: StatusCode::BAD_GATEWAY,
            message: "Upstream site timed out".to_string(),
        };
        assert_eq!(err.user_message(), "Upstream site timed out");
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        // 测试场景：错误信息为空白，应返回兜底提示
        let err = DetectionError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_payload_error_is_prefixed() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DetectionError::from(parse_err);
        assert!(err.user_message().starts_with("Detection service returned an invalid response"));
    }
}
