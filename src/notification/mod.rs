//! 인증 토큰 전달(알림) 모듈
//!
//! 발급된 토큰을 별도 채널로 사용자에게 전달합니다.
//! 전달은 발급 요청 안에서 저장 직후 한 번 수행되며, 실패해도 재시도하지 않습니다.
//!
//! - [`webhook::WebhookNotifier`] - HTTP 웹훅으로 전달 (운영)
//! - [`log_notifier::LogNotifier`] - 로그로만 남김 (개발)

pub mod log_notifier;
pub mod webhook;

use async_trait::async_trait;
use thiserror::Error;

pub use log_notifier::LogNotifier;
pub use webhook::WebhookNotifier;

/// 알림 제목
pub const NOTIFICATION_SUBJECT: &str = "Your Verification Token";

/// 알림 전달 에러
#[derive(Error, Debug)]
pub enum NotifierError {
    /// 전달 요청 자체가 실패 (연결 실패, 타임아웃 등)
    #[error("notification request failed: {0}")]
    Transport(String),

    /// 수신 측이 거부 (2xx가 아닌 응답)
    #[error("notification rejected with status {status}")]
    Rejected { status: u16 },

    /// 알림 클라이언트 구성 실패
    #[error("notifier configuration error: {0}")]
    Configuration(String),
}

/// 전달할 알림 한 건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// 알림 채널 대상 식별자 (웹훅 URL 등)
    pub target_id: String,
    /// 수신자 연락처
    pub contact_address: String,
    pub subject: String,
    pub message: String,
}

impl Notification {
    /// 인증 토큰 안내 알림을 만듭니다.
    pub fn verification_token(target_id: &str, contact_address: &str, token: &str) -> Self {
        Self {
            target_id: target_id.to_string(),
            contact_address: contact_address.to_string(),
            subject: NOTIFICATION_SUBJECT.to_string(),
            message: format!("Your verification token is {}", token),
        }
    }
}

/// 알림 전달 채널
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError>;

    /// 진단용 백엔드 이름
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_token_template() {
        let notification = Notification::verification_token("topic-1", "u1@x.com", "A1B2C3");

        assert_eq!(notification.subject, "Your Verification Token");
        assert_eq!(notification.message, "Your verification token is A1B2C3");
        assert_eq!(notification.contact_address, "u1@x.com");
        assert_eq!(notification.target_id, "topic-1");
    }
}
