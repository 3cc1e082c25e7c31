//! Splash screen timer.
//!
//! Zellij timers cannot be revoked once scheduled, so cancellation suppresses
//! the effect instead: a cancelled or already-fired timer ignores its
//! `Timer` event. The timer is cancelled on teardown and on drop, whichever
//! comes first.

/// Default splash duration, in seconds.
pub const DEFAULT_SPLASH_SECONDS: f64 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Armed,
    Fired,
    Cancelled,
}

/// Single-shot splash timer.
#[derive(Debug, Clone, Default)]
pub struct SplashTimer {
    phase: Phase,
}

impl SplashTimer {
    /// Arms the timer. Returns `false` if it was armed before.
    pub fn arm(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Armed;
        true
    }

    /// Consumes a timer tick. Returns `true` only for the first tick after
    /// arming, and never after cancellation.
    pub fn fire(&mut self) -> bool {
        if self.phase != Phase::Armed {
            tracing::debug!(phase = ?self.phase, "suppressing splash timer tick");
            return false;
        }
        self.phase = Phase::Fired;
        true
    }

    /// Suppresses a pending tick.
    pub fn cancel(&mut self) {
        if self.phase == Phase::Armed {
            tracing::debug!("splash timer cancelled before firing");
        }
        if self.phase != Phase::Fired {
            self.phase = Phase::Cancelled;
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.phase == Phase::Armed
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
