//! # 데이터 전송 객체 (DTO) 모듈
//!
//! HTTP 요청/응답 본문과 Rust 타입 사이의 계약을 정의합니다.
//! 요청 DTO는 `validator`로 필수 필드를 검증하고, 응답 DTO는 `serde`로 직렬화됩니다.

pub mod tokens;

pub use tokens::*;
