//! 인증 토큰 발급/검증 서비스
//!
//! 사용자에게 짧은 수명의 6자리 인증 토큰을 발급하여 별도 채널로 전달하고,
//! 이후 제출된 토큰이 해당 사용자에게 발급된 유효한 토큰인지 확인하는 서비스입니다.
//!
//! # Features
//!
//! - **토큰 발급**: CSPRNG 기반 6자리 영숫자 토큰, 기본 TTL 300초
//! - **토큰 검증**: 없음 / 만료 / 유효 3가지 상태 판정
//! - **알림 전달**: 웹훅 또는 로그 기반 전달 채널
//! - **Redis**: 운영 환경 토큰 저장소
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 본문 해석, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  TokenService   │ ← 발급/검증 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Store/Notifier  │ ← Redis 저장소, 웹훅 알림
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use verification_token_service::config::AppConfig;
//! use verification_token_service::core::AppState;
//!
//! let state = AppState::new(AppConfig::from_env()?).await?;
//! let token = state.token_service.issue("user-1", "user-1@example.com").await?;
//! state.token_service.validate(&token, "user-1").await?;
//! ```

pub mod core;
pub mod config;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod notification;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
mod testing;
