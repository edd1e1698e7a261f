//! # Gift Notification
//!
//! The transient "free gift added" banner.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CartUpdate { transition: Granted }                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  raise() ──► visible = true ──► tokio::spawn(sleep(duration))           │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                                  visible = false                        │
//! │                                                                         │
//! │  The timer only flips the flag. It never touches the cart and is       │
//! │  never cancelled: a timer from an earlier grant may hide the banner    │
//! │  of a later one early.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

/// Cloneable handle to the banner visibility flag.
#[derive(Debug, Clone)]
pub struct GiftNotification {
    visible: Arc<AtomicBool>,
    duration: Duration,
}

impl GiftNotification {
    pub fn new(duration: Duration) -> Self {
        GiftNotification {
            visible: Arc::new(AtomicBool::new(false)),
            duration,
        }
    }

    /// Shows the banner and schedules it to hide after the configured delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn raise(&self) {
        self.visible.store(true, Ordering::SeqCst);
        debug!(duration_ms = self.duration.as_millis() as u64, "Gift notification shown");

        let visible = Arc::clone(&self.visible);
        let duration = self.duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            visible.store(false, Ordering::SeqCst);
            debug!("Gift notification cleared");
        });
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_hidden_until_raised() {
        let notification = GiftNotification::new(Duration::from_secs(3));
        assert!(!notification.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_clears_after_duration() {
        let notification = GiftNotification::new(Duration::from_secs(3));
        notification.raise();
        assert!(notification.is_visible());

        sleep(Duration::from_millis(2900)).await;
        assert!(notification.is_visible());

        sleep(Duration::from_millis(200)).await;
        assert!(!notification.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_the_flag() {
        let notification = GiftNotification::new(Duration::from_secs(3));
        let view = notification.clone();
        notification.raise();
        assert!(view.is_visible());

        sleep(Duration::from_secs(4)).await;
        assert!(!view.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_earlier_timer_may_clear_later_raise() {
        let notification = GiftNotification::new(Duration::from_secs(3));
        notification.raise();
        sleep(Duration::from_secs(2)).await;

        notification.raise();
        assert!(notification.is_visible());

        // First timer fires at t=3s even though the second raise was at t=2s
        sleep(Duration::from_millis(1500)).await;
        assert!(!notification.is_visible());

        // Second timer fires at t=5s; clearing again is a no-op
        sleep(Duration::from_secs(2)).await;
        assert!(!notification.is_visible());
    }
}
