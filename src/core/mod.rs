//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 실행 기반을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`app_state`] - 의존성 조립
//! - **AppState**: 설정에 맞는 저장소와 알림 채널을 골라 서비스에 주입
//! - `web::Data<AppState>`로 모든 핸들러에 전달
//!
//! ### [`clock`] - 시각 공급자
//! - **SystemClock**: 운영용 시스템 시계
//! - **ManualClock**: 테스트에서 시간을 임의로 흘려보내는 시계
//!
//! ## 애플리케이션 초기화
//!
//! ```rust,ignore
//! use crate::core::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let state = web::Data::new(AppState::new(config).await?);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod app_state;
pub mod clock;

pub use app_state::*;
pub use clock::*;
