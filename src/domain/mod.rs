//! # Domain Layer Module
//!
//! 토큰 생명주기의 핵심 데이터 구조를 담당하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Models  - 영속 엔티티 (TokenRecord) 와 상태 분류 (TokenStatus)
//! └── DTOs    - 요청/응답 계약 (envelope 해제 + 필수 필드 검증)
//!      │
//!      ▼
//! Service Layer (TokenService)
//!      │
//!      ▼
//! Repository Layer (TokenStore)
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
