//! dotkit Animation System
//!
//! Tweens between two poses, driven by an explicit clock.
//!
//! # Features
//!
//! - **Easing**: CSS-compatible cubic bezier curves
//! - **Springs**: analytic damped-spring curves with a computed settling time
//! - **Tweens**: rest pose → active pose with delay and repeat policy,
//!   sampled as a pure function of elapsed time
//! - **Timelines**: own running tweens and advance them each frame

pub mod easing;
pub mod pose;
pub mod spring;
pub mod timeline;
pub mod timing;
pub mod tween;

pub use easing::Easing;
pub use pose::Pose;
pub use spring::SpringConfig;
pub use timeline::{Timeline, TimelineEntryId};
pub use timing::TimingCurve;
pub use tween::{RepeatPolicy, Tween};
