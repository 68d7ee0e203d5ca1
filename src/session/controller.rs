//! 检测会话控制器
//! 串联 规范化 → 检测服务 → 分级，唯一持有可变会话状态
//! 每次受理的提交领取一个递增令牌，完成时令牌已过期则丢弃结果

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::detector::{DetectionClient, HttpDetectionClient, ResultClassifier};
use crate::error::{SonResult, VALIDATION_MESSAGE};
use crate::model::CheckResult;
use crate::normalizer::UrlNormalizer;

use super::state::SessionState;

/// 单次提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 输入为空，未发起请求
    Rejected,
    Completed(CheckResult),
    Failed(String),
    /// 期间有更新的提交，本次结果被丢弃
    Superseded,
}

/// 检测会话
pub struct CheckSession {
    client: Arc<dyn DetectionClient>,
    state: watch::Sender<SessionState>,
    latest_token: AtomicU64,
    // 最近一次自动提交的路由地址
    last_route_url: Mutex<Option<String>>,
}

impl CheckSession {
    pub fn new(client: Arc<dyn DetectionClient>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            client,
            state,
            latest_token: AtomicU64::new(0),
            last_route_url: Mutex::new(None),
        }
    }

    /// 使用 HTTP 检测客户端创建会话
    pub fn from_config(config: &GlobalConfig) -> SonResult<Self> {
        let client = HttpDetectionClient::new(config)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// 订阅状态变化（只读）
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn confidence_display(&self) -> String {
        self.state.borrow().confidence_display()
    }

    /// 更新输入文本，不影响 loading / result / error
    pub fn set_url(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|state| state.url = text);
    }

    /// 切换技术详情面板
    pub fn toggle_technical(&self) {
        self.state.send_modify(|state| state.show_technical = !state.show_technical);
    }

    /// 提交当前输入
    pub async fn submit(&self) -> SubmitOutcome {
        let trimmed = self.state.borrow().url.trim().to_string();
        let target = UrlNormalizer::normalize(&trimmed);

        if target.trim().is_empty() {
            debug!("输入为空，拒绝提交");
            self.state.send_modify(|state| state.error = Some(VALIDATION_MESSAGE.to_string()));
            return SubmitOutcome::Rejected;
        }

        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.result = None;
            state.error = None;
            state.show_technical = false;
            state.loading = true;
        });
        debug!("开始检测 [{}]，令牌：{}", target, token);

        let outcome = self
            .client
            .check(&target)
            .await
            .map(|data| ResultClassifier::classify(&data));

        if self.latest_token.load(Ordering::SeqCst) != token {
            debug!("检测 [{}] 已被更新的提交取代，丢弃结果（令牌：{}）", target, token);
            return SubmitOutcome::Superseded;
        }

        match outcome {
            Ok(result) => {
                debug!("检测 [{}] 完成：{}", target, result.message);
                let stored = result.clone();
                // 检测期间的空输入提示不应与本次结果并存
                self.state.send_modify(|state| {
                    state.result = Some(stored);
                    state.error = None;
                    state.loading = false;
                });
                SubmitOutcome::Completed(result)
            }
            Err(e) => {
                let message = e.user_message();
                warn!("检测 [{}] 失败：{}", target, message);
                let stored = message.clone();
                self.state.send_modify(|state| {
                    state.error = Some(stored);
                    state.loading = false;
                });
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// 路由入口：规范化 catch-all 路由片段并写入输入框
    /// 同一路由地址只自动提交一次，地址变化后再次提交
    pub async fn sync_route<S: AsRef<str>>(&self, segments: &[S]) -> Option<SubmitOutcome> {
        let route_url = UrlNormalizer::from_route_segments(segments);
        if route_url.is_empty() {
            return None;
        }

        {
            let mut last = self
                .last_route_url
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if last.as_deref() == Some(route_url.as_str()) {
                return None;
            }
            *last = Some(route_url.clone());
        }

        debug!("路由地址变化，自动提交：{}", route_url);
        self.set_url(route_url);
        Some(self.submit().await)
    }
}
