use std::time::Duration;

/// Eases the displayed progress ratio toward the latest snapshot.
///
/// Moves at a constant rate of one full sweep (0.0 to 1.0) per `full_sweep`
/// and stops exactly on the target. A zero `full_sweep` snaps immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAnimation {
    displayed: f64,
    target: f64,
    full_sweep: Duration,
}

impl ProgressAnimation {
    pub fn new(full_sweep: Duration, initial: f64) -> Self {
        let initial = initial.clamp(0.0, 1.0);
        Self {
            displayed: initial,
            target: initial,
            full_sweep,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 1.0);
        if self.full_sweep.is_zero() {
            self.displayed = self.target;
        }
    }

    /// Advance by `elapsed`. Returns true if the displayed value moved.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.is_settled() {
            return false;
        }
        if self.full_sweep.is_zero() {
            self.displayed = self.target;
            return true;
        }

        let max_step = elapsed.as_secs_f64() / self.full_sweep.as_secs_f64();
        let remaining = self.target - self.displayed;
        if remaining.abs() <= max_step {
            self.displayed = self.target;
        } else {
            self.displayed += max_step.copysign(remaining);
        }
        true
    }

    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.displayed == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWEEP: Duration = Duration::from_millis(1000);

    #[test]
    fn starts_settled() {
        let anim = ProgressAnimation::new(SWEEP, 0.3);
        assert!(anim.is_settled());
        assert_eq!(anim.displayed(), 0.3);
    }

    #[test]
    fn moves_at_constant_rate() {
        let mut anim = ProgressAnimation::new(SWEEP, 0.0);
        anim.set_target(1.0);
        assert!(anim.tick(Duration::from_millis(250)));
        assert!((anim.displayed() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn never_overshoots() {
        let mut anim = ProgressAnimation::new(SWEEP, 0.0);
        anim.set_target(0.1);
        anim.tick(Duration::from_millis(500));
        assert_eq!(anim.displayed(), 0.1);
        assert!(!anim.tick(Duration::from_millis(500)));
    }

    #[test]
    fn moves_downward() {
        let mut anim = ProgressAnimation::new(SWEEP, 1.0);
        anim.set_target(0.0);
        anim.tick(Duration::from_millis(100));
        assert!(anim.displayed() < 1.0);
        assert!(anim.displayed() > 0.0);
    }

    #[test]
    fn converges_after_enough_ticks() {
        let mut anim = ProgressAnimation::new(SWEEP, 0.0);
        anim.set_target(0.73);
        for _ in 0..100 {
            anim.tick(Duration::from_millis(16));
        }
        assert!(anim.is_settled());
        assert_eq!(anim.displayed(), anim.target());
    }

    #[test]
    fn zero_sweep_snaps() {
        let mut anim = ProgressAnimation::new(Duration::ZERO, 0.0);
        anim.set_target(0.5);
        assert_eq!(anim.displayed(), 0.5);
    }

    #[test]
    fn target_is_clamped() {
        let mut anim = ProgressAnimation::new(SWEEP, 0.0);
        anim.set_target(3.0);
        assert_eq!(anim.target(), 1.0);
    }
}
