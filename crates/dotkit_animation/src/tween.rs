//! Tweens between two poses
//!
//! A tween describes a whole animation up front: the pose it starts from,
//! the pose it heads for, the timing curve, a start delay, and how it
//! repeats. Sampling it is a pure function of elapsed time, so the caller
//! owns the clock.
//!
//! # Example
//!
//! ```rust
//! use dotkit_animation::{Pose, RepeatPolicy, TimingCurve, Tween};
//!
//! let tween = Tween::new(
//!     Pose::IDENTITY.with_scale(0.5),
//!     Pose::IDENTITY,
//!     TimingCurve::ease_in_out(1.0),
//! )
//! .delay(0.25)
//! .repeat(RepeatPolicy::autoreversing());
//!
//! assert_eq!(tween.sample(0.1).scale, 0.5); // still waiting
//! assert_eq!(tween.sample(1.25).scale, 1.0); // first cycle done
//! ```

use crate::pose::Pose;
use crate::timing::TimingCurve;

/// How a tween behaves once its first cycle completes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Play once and hold the target pose
    #[default]
    Once,
    /// Loop forever. Autoreversing loops play back toward the start pose
    /// on odd cycles (a triangle wave); otherwise each cycle jumps back to
    /// the start pose (a sawtooth).
    Forever { autoreverses: bool },
}

impl RepeatPolicy {
    pub const fn autoreversing() -> Self {
        RepeatPolicy::Forever { autoreverses: true }
    }

    pub const fn restarting() -> Self {
        RepeatPolicy::Forever {
            autoreverses: false,
        }
    }

    pub fn autoreverses(&self) -> bool {
        matches!(self, RepeatPolicy::Forever { autoreverses: true })
    }

    pub fn is_forever(&self) -> bool {
        matches!(self, RepeatPolicy::Forever { .. })
    }
}

/// A rest → active pose animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: Pose,
    to: Pose,
    curve: TimingCurve,
    /// Seconds before the first cycle starts
    delay: f32,
    repeat: RepeatPolicy,
}

impl Tween {
    /// Create a tween that plays once with no delay
    pub fn new(from: Pose, to: Pose, curve: TimingCurve) -> Self {
        Self {
            from,
            to,
            curve,
            delay: 0.0,
            repeat: RepeatPolicy::Once,
        }
    }

    /// Set delay (seconds) before the first cycle starts
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Set repeat policy
    pub fn repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn from_pose(&self) -> Pose {
        self.from
    }

    pub fn to_pose(&self) -> Pose {
        self.to
    }

    pub fn curve(&self) -> TimingCurve {
        self.curve
    }

    pub fn delay_secs(&self) -> f32 {
        self.delay
    }

    pub fn repeat_policy(&self) -> RepeatPolicy {
        self.repeat
    }

    /// Index of the cycle running at `elapsed`, or `None` while delayed
    pub fn cycle_at(&self, elapsed: f32) -> Option<u64> {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return None;
        }
        let period = self.curve.duration();
        if period <= 0.0 {
            return Some(0);
        }
        Some((local / period).floor() as u64)
    }

    /// Pose at `elapsed` seconds since the tween was started
    pub fn sample(&self, elapsed: f32) -> Pose {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return self.from;
        }

        let period = self.curve.duration();
        if period <= 0.0 {
            return self.to;
        }

        let progress = match self.repeat {
            RepeatPolicy::Once => {
                if local >= period {
                    return self.to;
                }
                self.curve.progress(local)
            }
            RepeatPolicy::Forever { autoreverses } => {
                let cycle = (local / period).floor();
                let phase = (local - cycle * period).clamp(0.0, period);
                if autoreverses && cycle as u64 % 2 == 1 {
                    // Reverse playback of the same curve
                    self.curve.progress(period - phase)
                } else {
                    self.curve.progress(phase)
                }
            }
        };

        self.from.lerp(&self.to, progress)
    }

    /// Fold `elapsed` back into the first loop span (one cycle, or two when
    /// autoreversing) past the delay. The folded time samples to the same
    /// pose and stays small enough for f32.
    pub fn fold_elapsed(&self, elapsed: f64) -> f32 {
        let delay = self.delay as f64;
        let local = elapsed - delay;
        let span = match self.repeat {
            RepeatPolicy::Once => 0.0,
            RepeatPolicy::Forever { autoreverses } => {
                let period = self.curve.duration() as f64;
                if autoreverses {
                    2.0 * period
                } else {
                    period
                }
            }
        };

        if local <= 0.0 || span <= 0.0 {
            // Still delayed, or a one-shot tween holding its target
            return elapsed.min(f32::MAX as f64) as f32;
        }
        (delay + local.rem_euclid(span)) as f32
    }

    /// Turn the tween into a time → pose function
    pub fn sampler(self) -> impl Fn(f32) -> Pose {
        move |elapsed| self.sample(elapsed)
    }
}
