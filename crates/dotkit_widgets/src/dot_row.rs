//! Animated dot row
//!
//! Lays out `count` dots left to right and animates each one with the
//! tween its style resolves to. A dot starts animating the first time it
//! appears; dots appear independently and in any order, and the visual
//! stagger comes only from each dot's delay.
//!
//! # Example
//!
//! ```rust
//! use dotkit_core::Event;
//! use dotkit_widgets::{AnimationStyle, DotConfig, DotRow, Widget};
//!
//! let mut row = DotRow::new(DotConfig::new(3, AnimationStyle::Typing));
//!
//! // The host reports each dot as it becomes visible
//! for index in 0..row.len() {
//!     let id = row.dot_id(index).unwrap();
//!     row.handle_event(&Event::appear(id.raw()));
//! }
//!
//! // and drives the clock from its frame loop
//! row.update(1.0 / 60.0);
//! let frame = row.render();
//! # assert_eq!(frame.paint_list().len(), 3);
//! ```

use dotkit_animation::{Pose, Timeline};
use dotkit_core::{event_types, Affine2D, Event, Layer, Point, Size};
use rustc_hash::FxHashMap;

use crate::config::{DotConfig, DotConfigError};
use crate::dot::Dot;
use crate::style::{self, ResolvedParams};
use crate::widget::{Widget, WidgetId};

/// A horizontal row of animated dots
pub struct DotRow {
    id: WidgetId,
    config: DotConfig,
    dots: Vec<Dot>,
    by_id: FxHashMap<WidgetId, usize>,
    timeline: Timeline,
    mounted: bool,
}

impl DotRow {
    /// Build a row. The config is trusted; use [`DotRow::try_new`] to
    /// validate it first.
    pub fn new(config: DotConfig) -> Self {
        let dots: Vec<Dot> = (0..config.count)
            .map(|index| Dot::new(index, style::tween(&config, index)))
            .collect();
        let by_id = dots.iter().map(|dot| (dot.id(), dot.index())).collect();
        let id = WidgetId::next();

        tracing::debug!(
            ?id,
            count = config.count,
            style = %config.style,
            duration = config.duration,
            "dot row created"
        );

        Self {
            id,
            config,
            dots,
            by_id,
            timeline: Timeline::new(),
            mounted: true,
        }
    }

    /// Validate the config, then build a row
    pub fn try_new(config: DotConfig) -> Result<Self, DotConfigError> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "rejecting dot row config");
            return Err(err);
        }
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &DotConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Widget id of the dot at `index`
    pub fn dot_id(&self, index: usize) -> Option<WidgetId> {
        self.dots.get(index).map(Dot::id)
    }

    pub fn is_entered(&self, index: usize) -> Option<bool> {
        self.dots.get(index).map(Dot::is_entered)
    }

    /// Seconds of animation time since the row was created
    pub fn elapsed(&self) -> f64 {
        self.timeline.current_time()
    }

    /// Overall size of the row
    pub fn size(&self) -> Size {
        let n = self.dots.len();
        if n == 0 {
            return Size::ZERO;
        }
        let width = n as f32 * self.config.size + (n - 1) as f32 * self.config.spacing;
        Size::new(width, self.config.size)
    }

    /// Laid-out center of the dot at `index`, before any animation offset
    pub fn dot_center(&self, index: usize) -> Point {
        let radius = self.config.size / 2.0;
        let pitch = self.config.size + self.config.spacing;
        Point::new(radius + index as f32 * pitch, radius)
    }

    /// Mark the dot at `index` visible. Starts its animation the first
    /// time; later calls leave the running animation untouched.
    pub fn appear(&mut self, index: usize) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(dot) = self.dots.get_mut(index) else {
            return false;
        };
        if !dot.enter() {
            return false;
        }

        let tween = *dot.tween();
        let entry = self.timeline.add(tween);
        dot.attach(entry);

        tracing::trace!(
            row = ?self.id,
            index,
            delay = tween.delay_secs(),
            "dot entered"
        );
        true
    }

    /// Mark every dot visible
    pub fn appear_all(&mut self) {
        for index in 0..self.dots.len() {
            self.appear(index);
        }
    }

    /// Advance animation time by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.mounted {
            self.timeline.tick(dt);
        }
    }

    /// Tear down all running animations. The row renders nothing afterwards.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        for dot in &mut self.dots {
            if let Some(entry) = dot.detach() {
                self.timeline.remove(entry);
            }
        }
        tracing::debug!(id = ?self.id, "dot row unmounted");
    }

    /// Style parameters of the dot at `index` for its current flag
    pub fn resolved(&self, index: usize) -> Option<ResolvedParams> {
        let dot = self.dots.get(index)?;
        Some(style::resolve(&self.config, index, dot.is_entered()))
    }

    /// Current pose of the dot at `index`: the rest pose until it appears,
    /// then its tween sampled at the current time. `None` once unmounted.
    pub fn pose(&self, index: usize) -> Option<Pose> {
        if !self.mounted {
            return None;
        }
        let dot = self.dots.get(index)?;
        match dot.entry().and_then(|entry| self.timeline.value(entry)) {
            Some(pose) => Some(pose),
            None => Some(dot.tween().from_pose()),
        }
    }

    fn render_dot(&self, index: usize, pose: Pose) -> Layer {
        let center = self.dot_center(index);
        let transform =
            Affine2D::scale_about(center, pose.scale, pose.translate_x, pose.translate_y);

        Layer::circle(center, self.config.size / 2.0, self.config.color)
            .named(format!("dot-{index}"))
            .with_transform_2d(transform)
            .with_opacity(pose.opacity)
    }
}

impl Widget for DotRow {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn render(&self) -> Layer {
        if !self.mounted {
            return Layer::empty();
        }

        let layers = (0..self.dots.len())
            .filter_map(|index| self.pose(index).map(|pose| self.render_dot(index, pose)))
            .collect();

        Layer::stack(layers).named("dot-row")
    }

    fn handle_event(&mut self, event: &Event) {
        let target = WidgetId(event.target);

        if target == self.id {
            match event.event_type {
                event_types::MOUNT | event_types::APPEAR => self.appear_all(),
                event_types::UNMOUNT => self.unmount(),
                _ => {}
            }
            return;
        }

        if let Some(&index) = self.by_id.get(&target) {
            if matches!(event.event_type, event_types::MOUNT | event_types::APPEAR) {
                self.appear(index);
            }
        }
    }
}
