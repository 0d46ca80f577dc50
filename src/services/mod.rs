//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 저장소와 알림 채널을 조합하여 인증 토큰의 생명주기(발급, 검증)를 구현합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::tokens::TokenService;
//!
//! let token = state.token_service.issue("user-1", "user-1@example.com").await?;
//! ```

pub mod tokens;
