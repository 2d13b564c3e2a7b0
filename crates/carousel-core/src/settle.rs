//! Damped spring that carries rotation from its release value to a stop.
//!
//! The spring is evaluated in closed form from the elapsed time rather than
//! integrated step by step, so a given start, target and parameter set always
//! traces the same curve regardless of frame pacing.

use std::time::Duration;

// Below this distance from 1.0 the damping ratio is treated as critical; the
// over-damped formula divides by the gap between its two roots.
const CRITICAL_BAND: f64 = 1e-6;

/// Spring tuning. `stiffness`, `damping` and `mass` follow the usual
/// `m·x'' + c·x' + k·x = 0` convention.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl SpringParams {
    /// Undamped angular frequency ω₀ in rad/s.
    #[inline]
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// ζ: below 1 oscillates, 1 is critical, above 1 creeps in without overshoot.
    #[inline]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Largest overshoot past the target as a fraction of the initial
    /// distance, for a spring released at rest.
    pub fn max_overshoot(&self) -> f64 {
        let zeta = self.damping_ratio();
        if zeta >= 1.0 {
            0.0
        } else {
            (-zeta * std::f64::consts::PI / (1.0 - zeta * zeta).sqrt()).exp()
        }
    }

    /// Displacement and velocity `t` seconds after release from displacement
    /// `d0` with velocity `v0`.
    pub fn state_at(&self, d0: f64, v0: f64, t: f64) -> (f64, f64) {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < CRITICAL_BAND {
            let b = v0 + omega * d0;
            let decay = (-omega * t).exp();
            let x = decay * (d0 + b * t);
            let v = decay * (b - omega * (d0 + b * t));
            (x, v)
        } else if zeta < 1.0 {
            let a = -zeta * omega;
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 - a * d0) / wd;
            let decay = (a * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = decay * (d0 * cos + b * sin);
            let v = decay * ((a * d0 + b * wd) * cos + (a * b - d0 * wd) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let s1 = -omega * (zeta - root);
            let s2 = -omega * (zeta + root);
            let c1 = (v0 - s2 * d0) / (s1 - s2);
            let c2 = d0 - c1;
            let (e1, e2) = ((s1 * t).exp(), (s2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * s1 * e1 + c2 * s2 * e2)
        }
    }
}

/// Result of advancing a [`SettleAnimation`] by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SettleStep {
    pub rotation: f64,
    pub done: bool,
}

/// An in-flight settle from `from` to `target`.
#[derive(Clone, Debug)]
pub struct SettleAnimation {
    from: f64,
    target: f64,
    elapsed_sec: f64,
    spring: SpringParams,
}

impl SettleAnimation {
    /// Start at rest at `from`.
    pub fn new(from: f64, target: f64, spring: SpringParams) -> Self {
        Self {
            from,
            target,
            elapsed_sec: 0.0,
            spring,
        }
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_sec)
    }

    /// Rotation and velocity at the current elapsed time.
    pub fn sample(&self) -> (f64, f64) {
        let (x, v) = self.spring.state_at(self.from - self.target, 0.0, self.elapsed_sec);
        (self.target + x, v)
    }

    /// Advance by `dt`. Once within the rest thresholds the rotation is
    /// reported exactly at the target and `done` is set.
    pub fn step(&mut self, dt: Duration) -> SettleStep {
        self.elapsed_sec += dt.as_secs_f64();
        let (rotation, velocity) = self.sample();
        let at_rest = (rotation - self.target).abs() < self.spring.rest_delta
            && velocity.abs() < self.spring.rest_speed;
        if at_rest {
            SettleStep {
                rotation: self.target,
                done: true,
            }
        } else {
            SettleStep {
                rotation,
                done: false,
            }
        }
    }
}
