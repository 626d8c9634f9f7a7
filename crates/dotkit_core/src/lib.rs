//! dotkit Core
//!
//! Foundational types shared by the dotkit crates:
//!
//! - **Geometry**: points, sizes, rects, and 2D affine transforms
//! - **Layers**: the node tree a widget renders into
//! - **Events**: lifecycle events (mount, appear, unmount) that drive widgets
//!
//! # Example
//!
//! ```rust
//! use dotkit_core::{Affine2D, Color, Layer, Point};
//!
//! let dot = Layer::circle(Point::new(5.0, 5.0), 5.0, Color::BLACK)
//!     .with_transform_2d(Affine2D::translation(0.0, -10.0))
//!     .with_opacity(0.5);
//!
//! let painted = dot.paint_list();
//! assert_eq!(painted.len(), 1);
//! assert_eq!(painted[0].center, Point::new(5.0, -5.0));
//! ```

pub mod events;
pub mod layer;

pub use events::{event_types, Event, EventType};
pub use layer::{Affine2D, Color, Layer, LayerProperties, PaintedCircle, Point, Rect, Size};
