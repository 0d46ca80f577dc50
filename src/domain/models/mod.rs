//! 도메인 모델 모듈
//!
//! 저장소에 영속되는 토큰 레코드와 검증 상태 분류를 포함합니다.

pub mod token;

pub use token::*;
