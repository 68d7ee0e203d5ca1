//! URL规范化工具
//! 步骤：百分号解码（失败则回退原始输入）→ 去除 http(s):// 前缀 → 合并重复的 '/'
//! 全程不会失败

use std::borrow::Cow;
use tracing::warn;

const SCHEME_PREFIXES: [&str; 2] = ["https://", "http://"];

/// 百分号解码结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome<'a> {
    /// 解码成功（无转义序列时借用原始输入）
    Decoded(Cow<'a, str>),
    /// 转义序列不合法或解码后不是合法UTF-8，回退为原始输入
    Fallback(&'a str),
}

impl DecodeOutcome<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            DecodeOutcome::Decoded(decoded) => decoded,
            DecodeOutcome::Fallback(raw) => raw,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DecodeOutcome::Fallback(_))
    }
}

/// URL规范化工具
pub struct UrlNormalizer;

impl UrlNormalizer {
    /// 规范化原始输入
    pub fn normalize(raw: &str) -> String {
        let decoded = Self::decode(raw);
        if decoded.is_fallback() {
            warn!("URL解码失败，回退使用原始输入：{}", raw);
        }

        let stripped = Self::strip_scheme(decoded.as_str());
        Self::collapse_slashes(stripped)
    }

    /// 规范化 catch-all 路由片段（按 '/' 拼接后处理）
    pub fn from_route_segments<S: AsRef<str>>(segments: &[S]) -> String {
        let joined = segments
            .iter()
            .map(|segment| segment.as_ref())
            .collect::<Vec<&str>>()
            .join("/");
        Self::normalize(&joined)
    }

    /// 百分号解码
    /// '%' 后不足两位十六进制字符视为非法转义，整体回退
    pub fn decode(raw: &str) -> DecodeOutcome<'_> {
        if Self::has_malformed_escape(raw) {
            return DecodeOutcome::Fallback(raw);
        }
        match urlencoding::decode(raw) {
            Ok(decoded) => DecodeOutcome::Decoded(decoded),
            Err(_) => DecodeOutcome::Fallback(raw),
        }
    }

    fn has_malformed_escape(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }
            match (bytes.get(i + 1), bytes.get(i + 2)) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return true,
            }
        }
        false
    }

    /// 去除一个前导 http:// 或 https://（区分大小写）
    fn strip_scheme(input: &str) -> &str {
        SCHEME_PREFIXES
            .iter()
            .find_map(|prefix| input.strip_prefix(prefix))
            .unwrap_or(input)
    }

    /// 连续的 '/' 合并为一个
    fn collapse_slashes(input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let mut prev_slash = false;
        for ch in input.chars() {
            if ch == '/' {
                if prev_slash {
                    continue;
                }
                prev_slash = true;
            } else {
                prev_slash = false;
            }
            output.push(ch);
        }
        output
    }
}
