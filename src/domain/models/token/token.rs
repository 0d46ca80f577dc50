//! 인증 토큰 레코드와 조회 상태
//!
//! 저장소에 영속되는 유일한 엔티티인 [`TokenRecord`]와,
//! 검증 시 한 번 계산되는 [`TokenStatus`] 분류를 정의합니다.
use serde::{Deserialize, Serialize};

/// 토큰 레코드
///
/// `(token, user_id)` 쌍이 복합 키이며, `expiration_time`은 생성 시
/// `생성 시각 + TTL`로 고정되고 이후 변경되지 않습니다.
/// 사용 여부 플래그는 없으므로 유효 기간 안에서는 여러 번 검증할 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    /// 6자리 토큰 값 (A-Z, 0-9)
    pub token: String,
    /// 토큰 소유자 식별자
    pub user_id: String,
    /// 만료 시각 (Unix timestamp, 초)
    pub expiration_time: i64,
}

impl TokenRecord {
    /// 발급 시각과 TTL로 새 레코드를 만듭니다.
    pub fn new(token: impl Into<String>, user_id: impl Into<String>, issued_at: i64, ttl_seconds: u64) -> Self {
        Self {
            token: token.into(),
            user_id: user_id.into(),
            expiration_time: i64::try_from(ttl_seconds)
                .map_or(i64::MAX, |ttl| issued_at.saturating_add(ttl)),
        }
    }

    /// `now`가 만료 시각을 지났는지 여부. 만료 시각과 같은 순간은 아직 유효합니다.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiration_time
    }
}

/// 단일 조회에 대한 토큰 상태 분류
///
/// ```text
/// NOT_FOUND : (token, user_id)에 해당하는 레코드 없음
/// EXPIRED   : 레코드 있음 AND now > expiration_time
/// VALID     : 레코드 있음 AND now <= expiration_time
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    NotFound,
    Expired,
    Valid,
}

impl TokenStatus {
    /// 조회 결과와 현재 시각으로 상태를 분류합니다.
    pub fn classify(record: Option<&TokenRecord>, now: i64) -> Self {
        match record {
            None => TokenStatus::NotFound,
            Some(record) if record.is_expired_at(now) => TokenStatus::Expired,
            Some(_) => TokenStatus::Valid,
        }
    }
}
