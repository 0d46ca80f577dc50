//! 인증 토큰 발급/검증 서비스 구현
//!
//! 발급은 "토큰 생성 → 조건부 저장 → 알림 전달" 순서로 진행되고,
//! 검증은 `(token, user_id)` 단건 조회 후 만료 시각을 현재 시각과 비교합니다.

use std::sync::Arc;

use crate::config::TokenConfig;
use crate::core::clock::Clock;
use crate::domain::models::token::{TokenRecord, TokenStatus};
use crate::errors::{AppError, AppResult};
use crate::notification::{Notification, Notifier};
use crate::repositories::tokens::TokenStore;

use super::token_generator::generate_token;

/// 키 충돌 시 토큰을 다시 생성하는 최대 횟수
pub const MAX_ISSUE_ATTEMPTS: usize = 5;

/// 인증 토큰 서비스
///
/// 저장소, 알림 채널, 시계를 주입받아 사용하며 모든 요청 워커가 하나의 인스턴스를 공유합니다.
pub struct TokenService {
    store: Arc<dyn TokenStore>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    ttl_seconds: u64,
    notifier_target: String,
}

impl TokenService {
    pub fn new(
        store: Arc<dyn TokenStore>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        token_config: &TokenConfig,
        notifier_target: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            clock,
            ttl_seconds: token_config.ttl_seconds,
            notifier_target: notifier_target.into(),
        }
    }

    /// 사용자에게 새 인증 토큰을 발급하고 전달합니다.
    ///
    /// # Arguments
    ///
    /// * `user_id` - 토큰 소유자 식별자
    /// * `contact_address` - 토큰을 받을 연락처 (이메일 등)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 발급된 토큰 값
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 입력값
    /// * `AppError::StoreError` - 저장 실패 (알림은 시도하지 않음)
    /// * `AppError::InternalError` - 키 충돌이 [`MAX_ISSUE_ATTEMPTS`]회 연속 발생
    /// * `AppError::DeliveryError` - 저장 후 알림 전달 실패 (저장된 레코드는 그대로 남음)
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue("user-1", "user-1@example.com").await?;
    /// assert_eq!(token.len(), 6);
    /// ```
    pub async fn issue(&self, user_id: &str, contact_address: &str) -> AppResult<String> {
        require_fields(&[("userId", user_id), ("email", contact_address)])?;

        let issued_at = self.clock.now();

        for attempt in 1..=MAX_ISSUE_ATTEMPTS {
            let record = TokenRecord::new(generate_token(), user_id, issued_at, self.ttl_seconds);

            let inserted = self.store.insert_if_absent(&record).await.map_err(|e| {
                log::error!("토큰 저장 실패 - user_id: {}, error: {}", user_id, e);
                AppError::from(e)
            })?;

            if !inserted {
                log::warn!(
                    "토큰 키 충돌, 재생성 - user_id: {}, attempt: {}/{}",
                    user_id,
                    attempt,
                    MAX_ISSUE_ATTEMPTS
                );
                continue;
            }

            log::info!(
                "토큰 발급 - user_id: {}, expires_at: {}",
                user_id,
                record.expiration_time
            );

            let notification =
                Notification::verification_token(&self.notifier_target, contact_address, &record.token);
            self.notifier.send(&notification).await.map_err(|e| {
                log::error!("토큰 전달 실패 - user_id: {}, error: {}", user_id, e);
                AppError::from(e)
            })?;

            return Ok(record.token);
        }

        Err(AppError::InternalError(format!(
            "token key collided {} times in a row",
            MAX_ISSUE_ATTEMPTS
        )))
    }

    /// 토큰 상태를 조회합니다.
    ///
    /// 저장소 오류는 상세 내용을 로그로 남긴 뒤 `AppError::StoreError`로 반환합니다.
    pub async fn status(&self, token: &str, user_id: &str) -> AppResult<TokenStatus> {
        require_fields(&[("token", token), ("userId", user_id)])?;

        let record = self.store.get(token, user_id).await.map_err(|e| {
            log::error!("토큰 조회 실패 - user_id: {}, error: {}", user_id, e);
            AppError::from(e)
        })?;

        Ok(TokenStatus::classify(record.as_ref(), self.clock.now()))
    }

    /// 토큰을 검증합니다. 유효하면 `Ok(())`를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenNotFound` - 레코드 없음
    /// * `AppError::TokenExpired` - 만료 시각 경과
    /// * `AppError::StoreError` - 저장소 오류
    pub async fn validate(&self, token: &str, user_id: &str) -> AppResult<()> {
        match self.status(token, user_id).await? {
            TokenStatus::Valid => Ok(()),
            TokenStatus::Expired => Err(AppError::TokenExpired),
            TokenStatus::NotFound => Err(AppError::TokenNotFound),
        }
    }

    pub fn store_backend(&self) -> &'static str {
        self.store.backend_name()
    }

    pub fn notifier_backend(&self) -> &'static str {
        self.notifier.backend_name()
    }
}

/// 빈 값인 필드 이름을 모아 `Missing key: ...` 에러를 만듭니다.
fn require_fields(fields: &[(&str, &str)]) -> AppResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(format!("Missing key: {}", missing.join(", "))))
    }
}
