//! 토큰 정책 및 알림 설정 모듈

use super::{ConfigError, EnvLookup, optional_duration, optional_number};
use super::data_config::Environment;

/// 토큰 기본 유효 시간 (초)
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// 토큰 정책 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenConfig {
    /// 발급 시점부터 만료까지의 시간 (초). `TOKEN_TTL_SECONDS`, 기본값 300
    pub ttl_seconds: u64,
}

impl TokenConfig {
    pub(super) fn load(lookup: &EnvLookup<'_>) -> Result<Self, ConfigError> {
        let ttl_seconds = optional_duration(lookup, "TOKEN_TTL_SECONDS", DEFAULT_TTL_SECONDS)?;
        Ok(Self { ttl_seconds })
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }
}

/// 알림 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierBackend {
    /// 대상 URL로 JSON POST
    Webhook,
    /// 로그로만 출력 (개발용)
    Log,
}

impl NotifierBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotifierBackend::Webhook => "webhook",
            NotifierBackend::Log => "log",
        }
    }
}

/// 알림(Notifier) 설정
///
/// ## 환경 변수
///
/// ```bash
/// NOTIFIER_BACKEND=webhook                                  # webhook | log
/// NOTIFIER_TARGET_ID=https://notify.example.com/hooks/otp   # 전달 대상 식별자
/// NOTIFIER_TIMEOUT_SECONDS=10
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub backend: NotifierBackend,
    /// 알림 전달 대상 식별자 (웹훅 URL 또는 채널 ID)
    pub target_id: String,
    pub timeout_seconds: u64,
}

impl NotifierConfig {
    pub(super) fn load(lookup: &EnvLookup<'_>, environment: Environment) -> Result<Self, ConfigError> {
        let backend = match lookup("NOTIFIER_BACKEND") {
            Some(value) => match value.to_lowercase().as_str() {
                "webhook" => NotifierBackend::Webhook,
                "log" => NotifierBackend::Log,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "NOTIFIER_BACKEND".to_string(),
                        message: format!("unknown notifier backend '{}'", other),
                    });
                }
            },
            None if environment.is_local() => NotifierBackend::Log,
            None => NotifierBackend::Webhook,
        };

        let target_id = match (lookup("NOTIFIER_TARGET_ID"), backend) {
            (Some(target), _) if !target.trim().is_empty() => target,
            (_, NotifierBackend::Webhook) => {
                return Err(ConfigError::MissingRequired("NOTIFIER_TARGET_ID".to_string()));
            }
            (_, NotifierBackend::Log) => "log".to_string(),
        };

        Ok(Self {
            backend,
            target_id,
            timeout_seconds: optional_number(lookup, "NOTIFIER_TIMEOUT_SECONDS", 10)?,
        })
    }
}
