//! Time-bounded interpolation advanced once per frame.

use glam::Vec3;

/// Values a [`Tween`] can interpolate
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(self, to: Self, t: f32) -> Self {
        Vec3::lerp(self, to, t)
    }
}

/// Progress curve applied to linear time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out (fast start, gentle landing)
    #[default]
    Power1Out,
}

impl Easing {
    /// Map linear progress in 0..=1 to eased progress in 0..=1
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Interpolation from `from` to `to` over `duration_s` seconds
#[derive(Debug, Clone)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    duration_s: f32,
    elapsed_s: f32,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration_s: f32) -> Self {
        Self {
            from,
            to,
            duration_s: duration_s.max(0.0),
            elapsed_s: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in 0..=1 (a zero-length tween is always complete)
    pub fn progress(&self) -> f32 {
        if self.duration_s <= 0.0 {
            1.0
        } else {
            (self.elapsed_s / self.duration_s).min(1.0)
        }
    }

    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    /// Step the tween by `dt_s` seconds and return the new value
    pub fn advance(&mut self, dt_s: f32) -> T {
        self.elapsed_s = (self.elapsed_s + dt_s.max(0.0)).min(self.duration_s);
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_starts_at_from() {
        let tween = Tween::new(2.0_f32, 4.0, 1.0);
        assert_eq!(tween.value(), 2.0);
        assert!(!tween.is_finished());
    }

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let mut tween = Tween::new(Vec3::ZERO, Vec3::ONE, 0.5);
        for _ in 0..40 {
            tween.advance(1.0 / 60.0);
        }
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec3::ONE);
    }

    #[test]
    fn test_power1_out_leads_linear() {
        let mut eased = Tween::new(0.0_f32, 1.0, 1.0);
        let mut linear = Tween::new(0.0_f32, 1.0, 1.0).with_easing(Easing::Linear);

        let e = eased.advance(0.25);
        let l = linear.advance(0.25);
        assert_eq!(l, 0.25);
        assert!((e - 0.4375).abs() < 1e-6);
        assert!(e > l);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let tween = Tween::new(1.0_f32, 3.0, 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 3.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut tween = Tween::new(0.0_f32, 1.0, 1.0).with_easing(Easing::Linear);
        tween.advance(0.5);
        assert_eq!(tween.advance(-1.0), 0.5);
    }
}
