//! `CircleImage`, a drop-in circular image view.
//!
//! The host toolkit wires its view callbacks to [`ImageWidget`]: size
//! changes, paint and pointer events go in; redraw requests and the press
//! scale come back out through callbacks.

pub mod circle_image;
pub mod host;


pub use circle_image::*;
pub use host::*;
