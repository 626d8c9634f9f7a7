//! Animation styles and per-dot parameter resolution
//!
//! Every style is a fixed pair of poses (rest and active) plus a timing
//! curve, a repeat policy, and a stagger delay. [`resolve`] turns a dot's
//! index into those parameters; nothing here holds state.
//!
//! | Style | Delay | Repeat | Animated property (rest → active) |
//! |---|---|---|---|
//! | Elastic | i·d/n | autoreverse | scale 0.8 → 1.2, offset y +10 → −10 (spring) |
//! | Pulse | i·d/n | autoreverse | scale 0.5 → 1.0 |
//! | Flashing | i·d/n | autoreverse | opacity 0.3 → 1.0 |
//! | Collision | (n−i−1)·d/n | autoreverse | offset x 0 → toward the middle dot |
//! | Typing | i·d/n | restart | scale and opacity 0 → 1 |
//! | Falling | i·d/n | restart | offset y −10 → +10 (spring) |
//! | Stretching | i·d/n | autoreverse | scale 1.0 → 1.5 |

use dotkit_animation::{Pose, RepeatPolicy, SpringConfig, TimingCurve, Tween};
use serde::{Deserialize, Serialize};

use crate::config::DotConfig;

/// Vertical travel of the elastic and falling styles, in pixels
const BOUNCE_TRAVEL: f32 = 10.0;

/// Preset dot animation styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    /// Dots bob up and down on a loose spring while growing
    #[default]
    Elastic,
    /// Dots grow from half size to full size
    Pulse,
    /// Dots fade between dim and opaque
    Flashing,
    /// Dots slide toward the middle of the row
    Collision,
    /// Dots pop in one after another, like a typing indicator
    Typing,
    /// Dots drop from above and settle
    Falling,
    /// Dots swell to one and a half times their size
    Stretching,
}

impl AnimationStyle {
    /// All styles, in declaration order
    pub const ALL: [AnimationStyle; 7] = [
        AnimationStyle::Elastic,
        AnimationStyle::Pulse,
        AnimationStyle::Flashing,
        AnimationStyle::Collision,
        AnimationStyle::Typing,
        AnimationStyle::Falling,
        AnimationStyle::Stretching,
    ];

    /// Lowercase name, as used in config files
    pub fn name(&self) -> &'static str {
        match self {
            AnimationStyle::Elastic => "elastic",
            AnimationStyle::Pulse => "pulse",
            AnimationStyle::Flashing => "flashing",
            AnimationStyle::Collision => "collision",
            AnimationStyle::Typing => "typing",
            AnimationStyle::Falling => "falling",
            AnimationStyle::Stretching => "stretching",
        }
    }

    /// Whether the loop plays back toward the rest pose. Typing and falling
    /// snap back to rest instead.
    pub fn autoreverses(&self) -> bool {
        !matches!(self, AnimationStyle::Typing | AnimationStyle::Falling)
    }

    pub fn repeat_policy(&self) -> RepeatPolicy {
        RepeatPolicy::Forever {
            autoreverses: self.autoreverses(),
        }
    }

    /// Timing curve for one cycle. Spring styles ignore `duration` and run
    /// until the spring settles.
    pub fn curve(&self, duration: f32) -> TimingCurve {
        match self {
            AnimationStyle::Elastic => TimingCurve::spring(SpringConfig::elastic()),
            AnimationStyle::Falling => TimingCurve::spring(SpringConfig::falling()),
            _ => TimingCurve::ease_in_out(duration),
        }
    }
}

impl std::fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rendering parameters for one dot at one moment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedParams {
    /// Seconds before this dot's loop starts
    pub delay: f32,
    pub curve: TimingCurve,
    pub repeat: RepeatPolicy,
    pub scale: f32,
    pub opacity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ResolvedParams {
    pub fn pose(&self) -> Pose {
        Pose {
            scale: self.scale,
            opacity: self.opacity,
            translate_x: self.offset_x,
            translate_y: self.offset_y,
        }
    }
}

/// Stagger delay for the dot at `index`.
///
/// `index` must be below `config.count`.
pub fn delay(config: &DotConfig, index: usize) -> f32 {
    debug_assert!(index < config.count, "dot index {index} out of range");
    let n = config.count as f32;
    let steps = match config.style {
        AnimationStyle::Collision => (config.count - index - 1) as f32,
        _ => index as f32,
    };
    steps * config.duration / n
}

/// Resolve the parameters of the dot at `index`, in its rest pose
/// (`entered == false`) or its active pose.
///
/// `index` must be below `config.count`.
pub fn resolve(config: &DotConfig, index: usize, entered: bool) -> ResolvedParams {
    let pick = |rest: f32, active: f32| if entered { active } else { rest };

    let (scale, opacity, offset_x, offset_y) = match config.style {
        AnimationStyle::Elastic => (
            pick(0.8, 1.2),
            1.0,
            0.0,
            pick(BOUNCE_TRAVEL, -BOUNCE_TRAVEL),
        ),
        AnimationStyle::Pulse => (pick(0.5, 1.0), 1.0, 0.0, 0.0),
        AnimationStyle::Flashing => (1.0, pick(0.3, 1.0), 0.0, 0.0),
        AnimationStyle::Collision => (1.0, 1.0, pick(0.0, collision_offset(config, index)), 0.0),
        AnimationStyle::Typing => (pick(0.0, 1.0), pick(0.0, 1.0), 0.0, 0.0),
        AnimationStyle::Falling => (1.0, 1.0, 0.0, pick(-BOUNCE_TRAVEL, BOUNCE_TRAVEL)),
        AnimationStyle::Stretching => (pick(1.0, 1.5), 1.0, 0.0, 0.0),
    };

    ResolvedParams {
        delay: delay(config, index),
        curve: config.style.curve(config.duration),
        repeat: config.style.repeat_policy(),
        scale,
        opacity,
        offset_x,
        offset_y,
    }
}

/// Active-pose X offset for collision: move by the dot's distance from the
/// middle index (`count / 2`, rounded down), toward it
fn collision_offset(config: &DotConfig, index: usize) -> f32 {
    let mid = (config.count / 2) as f32;
    let distance = (index as f32 - mid) * (config.size + config.spacing);
    -distance
}

/// The looping tween for the dot at `index`: rest pose to active pose with
/// the style's curve, stagger delay, and repeat policy
pub fn tween(config: &DotConfig, index: usize) -> Tween {
    let rest = resolve(config, index, false);
    let active = resolve(config, index, true);
    Tween::new(rest.pose(), active.pose(), active.curve)
        .delay(active.delay)
        .repeat(active.repeat)
}
