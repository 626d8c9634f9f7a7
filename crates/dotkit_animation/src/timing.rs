//! Timing curves
//!
//! A timing curve maps time within one animation cycle to interpolation
//! progress, and knows how long a cycle lasts.

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// How progress evolves over one cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingCurve {
    /// Eased over a fixed duration in seconds
    Eased { easing: Easing, duration: f32 },
    /// Spring response; the cycle lasts `settle` seconds, the spring's
    /// settling time
    Spring { config: SpringConfig, settle: f32 },
}

impl TimingCurve {
    /// Standard ease-in-out over `duration` seconds
    pub fn ease_in_out(duration: f32) -> Self {
        TimingCurve::Eased {
            easing: Easing::STANDARD_EASE_IN_OUT,
            duration,
        }
    }

    /// Spring curve; solves for the settling time once, up front
    pub fn spring(config: SpringConfig) -> Self {
        TimingCurve::Spring {
            config,
            settle: config.settling_time(),
        }
    }

    /// Length of one cycle in seconds
    pub fn duration(&self) -> f32 {
        match self {
            TimingCurve::Eased { duration, .. } => *duration,
            TimingCurve::Spring { settle, .. } => *settle,
        }
    }

    /// Progress at `t` seconds into the cycle. Eased curves stay within
    /// [0, 1]; springs may overshoot.
    pub fn progress(&self, t: f32) -> f32 {
        match self {
            TimingCurve::Eased { easing, duration } => {
                if *duration <= 0.0 {
                    return 1.0;
                }
                easing.apply((t / duration).clamp(0.0, 1.0))
            }
            TimingCurve::Spring { config, .. } => config.response(t),
        }
    }

    pub fn is_spring(&self) -> bool {
        matches!(self, TimingCurve::Spring { .. })
    }
}
