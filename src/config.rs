//! 全局配置管理,存储所有可配置项

use url::Url;

use crate::error::DetectionError;

/// 检测服务默认地址
pub const DEFAULT_API_BASE_URL: &str = "https://api.shopifyornot.in";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 检测服务根地址
    pub api_base_url: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 请求User-Agent
    pub user_agent: String,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: 30,
            user_agent: format!("ShopifyOrNot/{}", env!("CARGO_PKG_VERSION")),
            verbose: false,
        }
    }
}

impl GlobalConfig {
    /// 解析检测接口地址：{api_base_url}/check
    pub fn check_endpoint(&self) -> Result<Url, DetectionError> {
        let base = self.api_base_url.trim_end_matches('/');
        Url::parse(&format!("{}/check", base))
            .map_err(|e| DetectionError::InvalidEndpoint(format!("{} ({})", self.api_base_url, e)))
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let endpoint = ConfigManager::get_default().check_endpoint().unwrap();
        assert_eq!(endpoint.as_str(), "https://api.shopifyornot.in/check");
    }

    #[test]
    fn test_builder_overrides() {
        // 测试场景：根地址带尾部斜杠，应只拼接一个分隔符
        let config = ConfigManager::custom()
            .api_base_url("http://127.0.0.1:8080/")
            .http_timeout(5)
            .user_agent("test-agent")
            .verbose(true)
            .build();

        assert_eq!(config.http_timeout, 5);
        assert_eq!(config.user_agent, "test-agent");
        assert!(config.verbose);
        assert_eq!(config.check_endpoint().unwrap().as_str(), "http://127.0.0.1:8080/check");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ConfigManager::custom().api_base_url("not a url").build();
        assert!(matches!(
            config.check_endpoint(),
            Err(DetectionError::InvalidEndpoint(_))
        ));
    }
}
