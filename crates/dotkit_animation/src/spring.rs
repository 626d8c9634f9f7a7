//! Spring curves
//!
//! A damped spring released from rest at 0 and pulled toward 1. The
//! closed-form step response is used so that sampling a spring at a given
//! time is a pure function, with no integration state to carry between
//! frames.

/// Residual displacement below which a spring counts as settled
const SETTLE_THRESHOLD: f64 = 1e-3;

/// Upper bound on settling time, for springs with almost no damping
const MAX_SETTLE_SECS: f64 = 60.0;

/// Damping ratios this close to 1.0 use the critical closed form, which
/// keeps the neighbouring formulas away from their singularity
const CRITICAL_TOLERANCE: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Regime {
    Under,
    Critical,
    Over,
}

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0)
    }
}

impl SpringConfig {
    /// Spring with unit mass
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Spring with exactly enough damping to never overshoot
    pub fn critically_damped(stiffness: f32) -> Self {
        Self::new(stiffness, 2.0 * stiffness.sqrt())
    }

    /// Loose, barely damped spring that bounces well past its target
    pub fn elastic() -> Self {
        Self::new(50.0, 1.0)
    }

    /// Soft spring that settles onto its target without overshoot
    pub fn falling() -> Self {
        Self::critically_damped(50.0)
    }

    /// Undamped angular frequency
    fn omega(&self) -> f64 {
        (self.stiffness as f64 / self.mass as f64).sqrt()
    }

    /// Damping ratio (1.0 = critical)
    pub fn damping_ratio(&self) -> f32 {
        let k = self.stiffness as f64;
        let m = self.mass as f64;
        (self.damping as f64 / (2.0 * (k * m).sqrt())) as f32
    }

    fn regime(&self) -> Regime {
        let zeta = self.damping_ratio() as f64;
        if (zeta - 1.0).abs() < CRITICAL_TOLERANCE {
            Regime::Critical
        } else if zeta < 1.0 {
            Regime::Under
        } else {
            Regime::Over
        }
    }

    /// Position at `t` seconds after release, starting at 0 with zero
    /// velocity and heading for 1. Underdamped springs exceed 1.
    pub fn response(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        (1.0 - self.displacement(t as f64)) as f32
    }

    /// Time after which the spring stays within the settle threshold of its
    /// target
    pub fn settling_time(&self) -> f32 {
        if self.envelope(MAX_SETTLE_SECS) > SETTLE_THRESHOLD {
            return MAX_SETTLE_SECS as f32;
        }

        // Envelope is monotonically decreasing, so bisect on it
        let mut hi = 0.05;
        while self.envelope(hi) > SETTLE_THRESHOLD {
            hi *= 2.0;
        }
        let mut lo = 0.0;
        for _ in 0..40 {
            let mid = (lo + hi) * 0.5;
            if self.envelope(mid) > SETTLE_THRESHOLD {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        hi as f32
    }

    /// Remaining distance to target at `t`
    fn displacement(&self, t: f64) -> f64 {
        let w0 = self.omega();
        let zeta = self.damping_ratio() as f64;

        match self.regime() {
            Regime::Under => {
                let wd = w0 * (1.0 - zeta * zeta).sqrt();
                let decay = (-zeta * w0 * t).exp();
                decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
            }
            Regime::Critical => (1.0 + w0 * t) * (-w0 * t).exp(),
            Regime::Over => {
                let (slow, fast, a, b) = self.overdamped_terms();
                a * (-slow * t).exp() + b * (-fast * t).exp()
            }
        }
    }

    /// Upper bound on |displacement| from `t` onward
    fn envelope(&self, t: f64) -> f64 {
        let w0 = self.omega();
        let zeta = self.damping_ratio() as f64;

        match self.regime() {
            Regime::Under => (-zeta * w0 * t).exp() / (1.0 - zeta * zeta).sqrt(),
            Regime::Critical => (1.0 + w0 * t) * (-w0 * t).exp(),
            Regime::Over => {
                let (slow, fast, a, b) = self.overdamped_terms();
                a.abs() * (-slow * t).exp() + b.abs() * (-fast * t).exp()
            }
        }
    }

    /// Decay rates and coefficients of the two overdamped modes
    fn overdamped_terms(&self) -> (f64, f64, f64, f64) {
        let w0 = self.omega();
        let zeta = self.damping_ratio() as f64;
        let root = (zeta * zeta - 1.0).sqrt();
        let slow = w0 * (zeta - root);
        let fast = w0 * (zeta + root);
        let a = fast / (fast - slow);
        let b = -slow / (fast - slow);
        (slow, fast, a, b)
    }
}
