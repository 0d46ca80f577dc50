//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 요청 본문을 해석하고 서비스 계층을 호출합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   TokenService - 발급/검증 로직                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   TokenStore / Notifier - 저장소, 알림 채널         ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   TokenRecord / TokenStatus - 도메인 모델         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 `{"message": ...}` 본문을 결정합니다.
//!
//! ## 등록된 엔드포인트
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/api/v1/tokens/issue` | [`token_handlers::issue_token`] |
//! | POST | `/api/v1/tokens/validate` | [`token_handlers::validate_token`] |

pub mod token_handlers;
