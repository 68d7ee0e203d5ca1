//! 检测服务客户端
//! 每次调用只发出一次请求：不重试、不缓存，失败统一转换为 DetectionError

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::GlobalConfig;
use crate::error::{DetectionError, SonResult};
use crate::model::{NormalizedCheckResponse, RawCheckResponse};

/// 非成功响应体中可能携带错误信息的字段（按优先级）
const ERROR_BODY_FIELDS: [&str; 3] = ["detail", "error", "message"];

/// 检测服务调用契约
/// 调用方保证 `url` 非空（会话控制器负责校验）
#[async_trait]
pub trait DetectionClient: Send + Sync {
    async fn check(&self, url: &str) -> Result<NormalizedCheckResponse, DetectionError>;
}

/// 基于 HTTP 的检测服务客户端：GET {api_base_url}/check?url=...
#[derive(Debug, Clone)]
pub struct HttpDetectionClient {
    client: Client,
    endpoint: Url,
}

impl HttpDetectionClient {
    /// 根据全局配置创建客户端
    pub fn new(config: &GlobalConfig) -> SonResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Self::with_client(client, config)
    }

    /// 复用外部构建的 reqwest 客户端
    pub fn with_client(client: Client, config: &GlobalConfig) -> SonResult<Self> {
        let endpoint = config.check_endpoint()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// 拼接请求地址，目标站点作为 url 查询参数编码
    fn request_url(&self, url: &str) -> Url {
        let mut request_url = self.endpoint.clone();
        request_url.query_pairs_mut().append_pair("url", url);
        request_url
    }

    /// 从非成功响应体中提取错误信息，取不到则按状态码生成
    fn status_message(status: StatusCode, body: &[u8]) -> String {
        let from_body = serde_json::from_slice::<Value>(body).ok().and_then(|value| {
            ERROR_BODY_FIELDS.iter().find_map(|field| {
                value
                    .get(field)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|msg| !msg.is_empty())
                    .map(str::to_string)
            })
        });

        from_body.unwrap_or_else(|| format!("Detection service returned status {}", status.as_u16()))
    }
}

#[async_trait]
impl DetectionClient for HttpDetectionClient {
    async fn check(&self, url: &str) -> Result<NormalizedCheckResponse, DetectionError> {
        let request_url = self.request_url(url);
        let start = Instant::now();
        debug!("开始请求检测服务：{}", request_url);

        let response = self
            .client
            .get(request_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("检测服务响应：状态码 {}，耗时 {:?}，响应体 {} 字节", status, start.elapsed(), body.len());

        if !status.is_success() {
            let message = Self::status_message(status, &body);
            warn!("检测服务返回非成功状态码 {}：{}", status, message);
            return Err(DetectionError::Status { status, message });
        }

        let raw: RawCheckResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("检测服务响应解析失败：{}", e);
            DetectionError::Payload(e)
        })?;

        Ok(NormalizedCheckResponse::from(raw))
    }
}
