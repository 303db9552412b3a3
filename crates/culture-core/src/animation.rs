//! Decorative animation timelines.
//!
//! Every animation here is a pure function from elapsed seconds to a visual
//! property, so any clock (requestAnimationFrame, an interval, a test) can
//! drive it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// CSS-style cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        ((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t * t + 3.0 * a1 * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        3.0 * (1.0 - 3.0 * a2 + 3.0 * a1) * t * t + 2.0 * (3.0 * a2 - 6.0 * a1) * t + 3.0 * a1
    }

    /// Curve parameter whose x equals `x`
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        // Newton stalled on a flat section; bisect instead
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..40 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    pub fn apply(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
    const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

    pub fn apply(&self, progress: f64) -> f64 {
        let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => p,
            Easing::EaseOut => Self::EASE_OUT.apply(p),
            Easing::EaseInOut => Self::EASE_IN_OUT.apply(p),
        }
    }
}

/// Opacity and translation of an element at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl FadeFrame {
    pub const AT_REST: FadeFrame = FadeFrame {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px);",
            self.opacity, self.translate_x, self.translate_y
        )
    }
}

/// Fade (and optionally slide) an element into place
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    pub duration: f64,
    pub delay: f64,
    /// Starting offset; the element slides from here to (0, 0)
    pub offset_x: f64,
    pub offset_y: f64,
    pub easing: Easing,
}

impl FadeIn {
    /// Opacity only
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            easing: Easing::EaseOut,
        }
    }

    /// Rise `offset` pixels while fading in
    pub fn up(duration: f64, offset: f64) -> Self {
        Self {
            offset_y: offset,
            ..Self::new(duration)
        }
    }

    /// Slide in horizontally; negative offsets come from the left
    pub fn sideways(duration: f64, offset: f64) -> Self {
        Self {
            offset_x: offset,
            ..Self::new(duration)
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn end_time(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if self.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: f64) -> FadeFrame {
        let p = self.easing.apply(self.progress(elapsed));
        FadeFrame {
            opacity: p,
            translate_x: self.offset_x * (1.0 - p),
            translate_y: self.offset_y * (1.0 - p),
        }
    }

    pub fn hidden(&self) -> FadeFrame {
        self.sample(f64::NEG_INFINITY)
    }
}

/// Delay of the `index`-th child in a staggered group
pub fn stagger_delay(base: f64, step: f64, index: usize) -> f64 {
    base + step * index as f64
}

/// Remaining envelope amplitude treated as "settled"
const SETTLE_EPSILON: f64 = 1e-3;

/// Number counter that springs from 0 to its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringCounter {
    pub target: f64,
    pub duration: f64,
    pub bounce: f64,
    pub decimals: usize,
}

impl SpringCounter {
    pub fn new(target: f64, duration: f64, bounce: f64, decimals: usize) -> Self {
        Self {
            target,
            duration,
            bounce: bounce.clamp(0.0, 0.95),
            decimals,
        }
    }

    /// Normalized step response of the spring, 0 at t=0 towards 1
    fn response(&self, t: f64) -> f64 {
        let zeta = 1.0 - self.bounce;
        let omega = (1.0 / SETTLE_EPSILON).ln() / (zeta * self.duration);
        let envelope = (-zeta * omega * t).exp();

        if zeta >= 1.0 {
            return 1.0 - envelope * (1.0 + omega * t);
        }
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        1.0 - envelope * ((damped * t).cos() + zeta * omega / damped * (damped * t).sin())
    }

    pub fn value_at(&self, elapsed: f64) -> f64 {
        if !(elapsed > 0.0) {
            return 0.0;
        }
        if self.is_settled(elapsed) || self.duration <= 0.0 {
            return self.target;
        }
        self.target * self.response(elapsed)
    }

    pub fn is_settled(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }

    pub fn format(&self, value: f64) -> String {
        let rendered = format!("{:.*}", self.decimals, value);
        // "-0" can show up from spring undershoot near zero
        if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
            rendered[1..].to_string()
        } else {
            rendered
        }
    }

    pub fn display_at(&self, elapsed: f64) -> String {
        self.format(self.value_at(elapsed))
    }
}

/// Keyframes of the floating particle loop
const FLOAT_Y: [f64; 3] = [0.0, -20.0, 0.0];
const FLOAT_X: [f64; 3] = [0.0, 10.0, 0.0];
const FLOAT_OPACITY: [f64; 3] = [0.3, 0.8, 0.3];

/// Evenly spaced keyframe interpolation with per-segment easing
pub fn keyframes(values: &[f64], progress: f64, easing: Easing) -> f64 {
    match values {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segments = values.len() - 1;
            let p = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
            let position = p * segments as f64;
            let index = (position.floor() as usize).min(segments - 1);
            let local = easing.apply(position - index as f64);
            values[index] + (values[index + 1] - values[index]) * local
        }
    }
}

/// Offset and opacity of a particle at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFrame {
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

/// Decorative bubble drifting in the hero background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingParticle {
    pub id: usize,
    /// Horizontal position, percent of the container
    pub x: f64,
    /// Vertical position, percent of the container
    pub y: f64,
    /// Diameter in px
    pub size: f64,
    pub delay: f64,
    /// Length of one loop in seconds
    pub duration: f64,
}

impl FloatingParticle {
    /// Position within the current loop, in [0, 1)
    pub fn cycle_progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 || self.duration <= 0.0 {
            return 0.0;
        }
        (local % self.duration) / self.duration
    }

    pub fn sample(&self, elapsed: f64) -> ParticleFrame {
        let p = self.cycle_progress(elapsed);
        ParticleFrame {
            dx: keyframes(&FLOAT_X, p, Easing::EaseInOut),
            dy: keyframes(&FLOAT_Y, p, Easing::EaseInOut),
            opacity: keyframes(&FLOAT_OPACITY, p, Easing::EaseInOut),
        }
    }

    pub fn css_at(&self, elapsed: f64) -> String {
        let frame = self.sample(elapsed);
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.3}; transform: translate({:.2}px, {:.2}px);",
            self.x, self.y, self.size, self.size, frame.opacity, frame.dx, frame.dy
        )
    }
}

/// Scatter `count` particles across the container
pub fn generate_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<FloatingParticle> {
    (0..count)
        .map(|id| FloatingParticle {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(5.0..15.0),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(15.0..25.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-2.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-4);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-4);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn test_easing_monotonic() {
        let mut last = 0.0;
        for i in 1..=100 {
            let v = Easing::EaseOut.apply(i as f64 / 100.0);
            assert!(v >= last - EPS);
            last = v;
        }
    }

    #[test]
    fn test_fade_in_timeline() {
        let fade = FadeIn::up(0.6, 20.0).with_delay(0.2);
        let start = fade.sample(0.0);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.translate_y, 20.0);
        assert_eq!(fade.hidden(), start);

        let mid = fade.sample(0.5);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.translate_y > 0.0 && mid.translate_y < 20.0);

        assert_eq!(fade.sample(fade.end_time()), FadeFrame::AT_REST);
        assert_eq!(fade.sample(100.0), FadeFrame::AT_REST);
    }

    #[test]
    fn test_fade_sideways_and_instant() {
        let fade = FadeIn::sideways(0.6, -20.0);
        assert_eq!(fade.sample(0.0).translate_x, -20.0);
        let instant = FadeIn::new(0.0).with_delay(1.0);
        assert_eq!(instant.sample(0.5).opacity, 0.0);
        assert_eq!(instant.sample(1.0).opacity, 1.0);
    }

    #[test]
    fn test_stagger() {
        assert!((stagger_delay(0.0, 0.2, 3) - 0.6).abs() < EPS);
        assert!((stagger_delay(0.1, 0.1, 2) - 0.3).abs() < EPS);
    }

    #[test]
    fn test_counter_endpoints() {
        let counter = SpringCounter::new(92.0, 2.0, 0.1, 0);
        assert_eq!(counter.value_at(0.0), 0.0);
        assert_eq!(counter.value_at(-1.0), 0.0);
        assert_eq!(counter.value_at(2.0), 92.0);
        assert_eq!(counter.value_at(10.0), 92.0);
        assert_eq!(counter.display_at(0.0), "0");
        assert_eq!(counter.display_at(2.0), "92");
    }

    #[test]
    fn test_counter_progresses() {
        let counter = SpringCounter::new(4.2, 2.0, 0.1, 1);
        let early = counter.value_at(0.1);
        let late = counter.value_at(1.0);
        assert!(early > 0.0 && early < late);
        assert!(late > 0.5 * 4.2 && late < 4.2 * 1.01);
        assert_eq!(counter.display_at(2.0), "4.2");
        // Close to the end the spring is within rounding of the target
        assert!((counter.value_at(1.99) - 4.2).abs() < 0.05);
    }

    #[test]
    fn test_counter_without_bounce() {
        let counter = SpringCounter::new(70.0, 2.0, 0.0, 0);
        let mid = counter.value_at(1.0);
        assert!(mid > 0.0 && mid < 70.0);
        assert_eq!(counter.value_at(2.0), 70.0);
    }

    #[test]
    fn test_counter_format_negative_zero() {
        let counter = SpringCounter::new(1.0, 1.0, 0.1, 1);
        assert_eq!(counter.format(-0.01), "0.0");
        assert_eq!(counter.format(-1.5), "-1.5");
    }

    #[test]
    fn test_keyframes() {
        assert_eq!(keyframes(&FLOAT_Y, 0.0, Easing::Linear), 0.0);
        assert_eq!(keyframes(&FLOAT_Y, 0.5, Easing::Linear), -20.0);
        assert_eq!(keyframes(&FLOAT_Y, 0.25, Easing::Linear), -10.0);
        assert_eq!(keyframes(&FLOAT_Y, 1.0, Easing::Linear), 0.0);
        assert_eq!(keyframes(&[], 0.3, Easing::Linear), 0.0);
        assert_eq!(keyframes(&[4.0], 0.3, Easing::Linear), 4.0);
    }

    #[test]
    fn test_particles_generated_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let particles = generate_particles(&mut rng, 15);
        assert_eq!(particles.len(), 15);
        for (i, p) in particles.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((5.0..15.0).contains(&p.size));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((15.0..25.0).contains(&p.duration));
        }
    }

    #[test]
    fn test_particles_seeded_deterministic() {
        let a = generate_particles(&mut SmallRng::seed_from_u64(42), 5);
        let b = generate_particles(&mut SmallRng::seed_from_u64(42), 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_particle_loop() {
        let particle = FloatingParticle {
            id: 0,
            x: 10.0,
            y: 20.0,
            size: 8.0,
            delay: 1.0,
            duration: 20.0,
        };

        let rest = particle.sample(0.0);
        assert_eq!(rest, ParticleFrame { dx: 0.0, dy: 0.0, opacity: 0.3 });
        assert_eq!(particle.sample(1.0), rest);

        let peak = particle.sample(11.0);
        assert!((peak.dy + 20.0).abs() < EPS);
        assert!((peak.dx - 10.0).abs() < EPS);
        assert!((peak.opacity - 0.8).abs() < EPS);

        let next_cycle = particle.sample(41.0);
        assert!(next_cycle.dy.abs() < EPS);
        assert!((next_cycle.opacity - 0.3).abs() < EPS);
        assert!(particle.css_at(0.0).starts_with("left: 10.00%; top: 20.00%;"));
    }
}
