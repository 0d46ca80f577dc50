//! 웹훅 기반 알림 전달
//!
//! 알림 한 건을 JSON으로 직렬화하여 대상 URL에 POST 합니다.
//!
//! ```json
//! {
//!   "target": "https://notify.example.com/hooks/otp",
//!   "recipient": "user@example.com",
//!   "subject": "Your Verification Token",
//!   "message": "Your verification token is A1B2C3"
//! }
//! ```
//!
//! 요청마다 `x-delivery-id` 헤더에 UUID v4를 실어 수신 측에서 중복 전달을 가려낼 수 있게 합니다.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{Notification, Notifier, NotifierError};
use crate::config::NotifierConfig;

/// 웹훅 요청 본문
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    target: &'a str,
    recipient: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl<'a> From<&'a Notification> for WebhookPayload<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            target: &notification.target_id,
            recipient: &notification.contact_address,
            subject: &notification.subject,
            message: &notification.message,
        }
    }
}

/// HTTP 웹훅 알림 전달자
#[derive(Clone)]
pub struct WebhookNotifier {
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// 알림 설정의 타임아웃으로 HTTP 클라이언트를 만듭니다.
    ///
    /// # Errors
    ///
    /// * `NotifierError::Configuration` - 대상이 http(s) URL이 아니거나 클라이언트 구성 실패
    pub fn new(config: &NotifierConfig) -> Result<Self, NotifierError> {
        validate_target(&config.target_id)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("verification-token-service/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NotifierError::Configuration(e.to_string()))?;

        Ok(Self { client })
    }
}

/// 웹훅 대상이 http 또는 https URL인지 확인합니다.
fn validate_target(target_id: &str) -> Result<(), NotifierError> {
    let url = reqwest::Url::parse(target_id).map_err(|e| {
        NotifierError::Configuration(format!("invalid webhook target '{}': {}", target_id, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(NotifierError::Configuration(format!(
            "unsupported webhook target scheme '{}'",
            other
        ))),
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifierError> {
        let delivery_id = uuid::Uuid::new_v4().to_string();

        let response = self
            .client
            .post(&notification.target_id)
            .header("x-delivery-id", &delivery_id)
            .json(&WebhookPayload::from(notification))
            .send()
            .await
            .map_err(|e| {
                log::warn!("웹훅 요청 실패 - delivery_id: {}, error: {}", delivery_id, e);
                NotifierError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "웹훅 전달 거부 - delivery_id: {}, status: {}",
                delivery_id,
                status
            );
            return Err(NotifierError::Rejected {
                status: status.as_u16(),
            });
        }

        log::info!("웹훅 전달 완료 - delivery_id: {}", delivery_id);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "webhook"
    }
}
