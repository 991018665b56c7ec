//! # Circle geometry for image views
//!
//! `roundel-core` holds the pure parts of a circular image view: everything
//! that can be computed from the view size, padding, border settings and
//! source image dimensions, with no reference to a canvas or host toolkit.
//!
//! - [`compute_geometry`] inscribes the circle in the padded viewport and
//!   resolves the border width and both radii.
//! - [`compute_transform`] center-crops a bitmap into the image circle's
//!   bounding square.
//! - [`is_inside_circle`] gates pointer events.
//! - [`StateManager`] tracks which of those values are stale.
//!
//! ```rust
//! use roundel_core::*;
//!
//! let border = BorderConfig::fixed(10, Color::WHITE)
//!     .resolve(Features::default())
//!     .unwrap();
//! let g = compute_geometry(Size::new(200.0, 100.0), PaddingValues::ZERO, &border).unwrap();
//! assert_eq!(g.center, Vec2::new(100.0, 50.0));
//! assert_eq!(g.drawable_radius, 40.0);
//!
//! let t = compute_transform(400, 200, g.drawable_rect).unwrap();
//! assert_eq!(t.scale, 0.4);
//! ```
//!
//! All values are cheap to recompute and carry no identity; callers cache
//! them and recompute when [`StateManager`] says so.

pub mod animation;
pub mod border;
pub mod circle;
pub mod color;
pub mod config;
pub mod error;
pub mod features;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod outline;
pub mod shader;
pub mod source;
pub mod state;
pub mod style;
mod tests;

pub use border::*;
pub use circle::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use features::Features;
pub use geometry::*;
pub use hit::*;
pub use input::*;
pub use outline::*;
pub use shader::*;
pub use source::*;
pub use state::*;
pub use style::*;
