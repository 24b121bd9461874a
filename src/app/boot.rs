// SPDX-License-Identifier: MPL-2.0
//! Boot splash timing.
//!
//! The splash covers the window from the first frame. With
//! [`SplashPolicy::Fixed`] it hides once the minimum delay has passed. With
//! [`SplashPolicy::AtLeast`] it also waits for the first route's data, but
//! never longer than the ceiling. Both limits are deadlines checked on the
//! shell's tick, so dropping the splash drops its timers.

use super::config::{BootConfig, SplashPolicy};
use crate::ui::widgets::animated_spinner;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Splash {
    min_deadline: Instant,
    max_deadline: Instant,
    policy: SplashPolicy,
    data_ready: bool,
    visible: bool,
    spinner_rotation: f32,
}

impl Splash {
    #[must_use]
    pub fn new(config: &BootConfig, now: Instant) -> Self {
        Self::with_timing(config.splash_min(), config.splash_max(), config.policy(), now)
    }

    #[must_use]
    pub fn with_timing(min: Duration, max: Duration, policy: SplashPolicy, now: Instant) -> Self {
        Self {
            min_deadline: now + min,
            max_deadline: now + max.max(min),
            policy,
            data_ready: false,
            visible: true,
            spinner_rotation: 0.0,
        }
    }

    /// A splash that is already gone, for sessions started on a deep link
    /// while testing.
    #[must_use]
    pub fn hidden() -> Self {
        let now = Instant::now();
        Self {
            visible: false,
            ..Self::with_timing(Duration::ZERO, Duration::ZERO, SplashPolicy::Fixed, now)
        }
    }

    /// The initial route finished its first load.
    pub fn mark_ready(&mut self) {
        self.data_ready = true;
    }

    /// Advances the spinner and evaluates the deadlines. Returns `true` on
    /// the tick that hides the splash.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.visible {
            return false;
        }
        self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);

        let min_elapsed = now >= self.min_deadline;
        let hide = match self.policy {
            SplashPolicy::Fixed => min_elapsed,
            SplashPolicy::AtLeast => (min_elapsed && self.data_ready) || now >= self.max_deadline,
        };
        if hide {
            self.visible = false;
            tracing::debug!(data_ready = self.data_ready, "splash hidden");
        }
        hide
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_millis(2000);
    const MAX: Duration = Duration::from_millis(8000);

    #[test]
    fn fixed_policy_hides_at_minimum_regardless_of_data() {
        let start = Instant::now();
        let mut splash = Splash::with_timing(MIN, MAX, SplashPolicy::Fixed, start);
        assert!(!splash.tick(start + Duration::from_millis(1999)));
        assert!(splash.is_active());
        assert!(splash.tick(start + MIN));
        assert!(!splash.is_active());
    }

    #[test]
    fn at_least_waits_for_data_after_minimum() {
        let start = Instant::now();
        let mut splash = Splash::with_timing(MIN, MAX, SplashPolicy::AtLeast, start);
        assert!(!splash.tick(start + Duration::from_millis(3000)));

        splash.mark_ready();
        assert!(splash.tick(start + Duration::from_millis(3100)));
    }

    #[test]
    fn at_least_never_hides_before_minimum() {
        let start = Instant::now();
        let mut splash = Splash::with_timing(MIN, MAX, SplashPolicy::AtLeast, start);
        splash.mark_ready();
        assert!(!splash.tick(start + Duration::from_millis(500)));
        assert!(splash.tick(start + MIN));
    }

    #[test]
    fn ceiling_hides_without_data() {
        let start = Instant::now();
        let mut splash = Splash::with_timing(MIN, MAX, SplashPolicy::AtLeast, start);
        assert!(!splash.tick(start + Duration::from_millis(7999)));
        assert!(splash.tick(start + MAX));
    }

    #[test]
    fn hidden_splash_ignores_ticks() {
        let mut splash = Splash::hidden();
        assert!(!splash.is_active());
        assert!(!splash.tick(Instant::now()));
    }
}
