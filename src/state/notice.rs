// src/state/notice.rs
use std::time::{Duration, Instant};

/// How long a banner stays up before auto-dismissing.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// A transient banner. The queue renders newest first at the top of the
/// central layout; entries can be dismissed early by the user.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub created: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Danger, message)
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTICE_TTL
    }

    /// Time until auto-dismiss, used to schedule the next repaint.
    pub fn remaining(&self) -> Duration {
        NOTICE_TTL.saturating_sub(self.created.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_the_level() {
        assert_eq!(Notice::info("a").level, NoticeLevel::Info);
        assert_eq!(Notice::success("b").level, NoticeLevel::Success);
        assert_eq!(Notice::warning("c").level, NoticeLevel::Warning);
        assert_eq!(Notice::danger("d").level, NoticeLevel::Danger);
    }

    #[test]
    fn fresh_notice_is_not_expired() {
        let notice = Notice::info("Selected 2 file(s)");
        assert!(!notice.is_expired());
        assert!(notice.remaining() <= NOTICE_TTL);
        assert!(notice.remaining() > Duration::from_secs(4));
    }
}
