//! 현재 시각 공급자
//!
//! 만료 판정에 쓰이는 "지금"을 주입 가능하게 만들어 테스트에서 시간을 흘려보낼 수 있게 합니다.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Unix timestamp(초) 단위의 현재 시각 공급자
pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

/// 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// 수동으로 움직이는 시계
///
/// ```rust,ignore
/// let clock = ManualClock::new(1_700_000_000);
/// clock.advance(301);
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self {
            now: AtomicI64::new(now),
        }
    }

    pub fn set(&self, now: i64) {
        self.now.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_only_when_told() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now(), 100);

        clock.advance(301);
        assert_eq!(clock.now(), 401);

        clock.set(5);
        assert_eq!(clock.now(), 5);
    }

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now().timestamp();
        let now = SystemClock.now();
        assert!(now >= before && now - before < 5);
    }
}
