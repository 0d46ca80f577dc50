//! 인증 토큰 서비스 모듈
//!
//! 짧은 수명의 인증 토큰을 발급하고 검증하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 6자리 영숫자 토큰 생성 (CSPRNG)
//! - 키 충돌 시 재생성 후 조건부 저장
//! - 저장 직후 알림 채널로 토큰 전달
//! - `(token, user_id)` 단건 조회 기반 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::tokens::TokenService;
//!
//! let token = token_service.issue("user-1", "user-1@example.com").await?;
//! token_service.validate(&token, "user-1").await?;
//! ```

pub mod token_generator;
pub mod token_service;

pub use token_generator::*;
pub use token_service::*;
