//! dotkit Widget Library
//!
//! An animated row of dots for loading and typing indicators, in one of
//! seven preset styles.
//!
//! # Example
//!
//! ```rust
//! use dotkit_core::Color;
//! use dotkit_widgets::{AnimationStyle, DotConfig, DotRow, Widget};
//!
//! let config = DotConfig::new(3, AnimationStyle::Pulse)
//!     .size(10.0)
//!     .spacing(6.0)
//!     .duration(0.9)
//!     .color(Color::from_hex(0x3366FF));
//!
//! let mut row = DotRow::new(config);
//! row.appear_all();
//! row.update(1.0 / 60.0);
//!
//! let layer = row.render();
//! assert_eq!(layer.paint_list().len(), 3);
//! ```

pub mod config;
pub mod dot;
pub mod dot_row;
pub mod style;
pub mod widget;

pub use config::{DotConfig, DotConfigError};
pub use dot::Dot;
pub use dot_row::DotRow;
pub use style::{AnimationStyle, ResolvedParams};
pub use widget::{Widget, WidgetId};
