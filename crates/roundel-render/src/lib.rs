//! Drawing for circular image views.
//!
//! [`Canvas`] is the seam to the host graphics API. [`paint`] turns a
//! [`Frame`] of cached geometry and appearance into at most four canvas
//! calls. [`RecordingCanvas`] and [`SoftwareCanvas`] are two ready-made
//! canvases: one for inspecting draw order, one for actual pixels.

pub mod canvas;
pub mod pipeline;
pub mod recording;
pub mod software;


pub use canvas::*;
pub use pipeline::*;
pub use recording::*;
pub use software::*;
