//! One-shot viewport visibility gate.

/// Fires once, on the first observation that crosses the threshold.
///
/// Owned by the component instance that wants "trigger once" semantics;
/// after firing, every later observation is ignored and the caller is
/// expected to drop its subscription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    fired: bool,
}

impl VisibilityGate {
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            Self::DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            threshold,
            fired: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Feed one intersection observation; true exactly once
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        // Edge contact (zero-area intersection) never counts
        if ratio.is_nan() || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let mut gate = VisibilityGate::default();
        assert!(!gate.has_fired());
        assert!(gate.observe(true, 0.5));
        assert!(gate.has_fired());
        assert!(!gate.observe(true, 1.0));
        assert!(!gate.observe(false, 0.0));
        assert!(!gate.observe(true, 0.8));
    }

    #[test]
    fn test_below_threshold_never_fires() {
        let mut gate = VisibilityGate::new(0.1);
        assert!(!gate.observe(true, 0.05));
        assert!(!gate.observe(false, 0.9));
        assert!(!gate.observe(true, f64::NAN));
        assert!(!gate.has_fired());
        assert!(gate.observe(true, 0.1));
    }

    #[test]
    fn test_zero_ratio_never_fires_at_zero_threshold() {
        let mut gate = VisibilityGate::new(0.0);
        assert!(!gate.observe(true, 0.0));
        assert!(!gate.has_fired());
        assert!(gate.observe(true, 0.01));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(VisibilityGate::new(4.0).threshold(), 1.0);
        assert_eq!(VisibilityGate::new(-1.0).threshold(), 0.0);
        assert_eq!(VisibilityGate::new(f64::NAN).threshold(), 0.1);
    }
}
