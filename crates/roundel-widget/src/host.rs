use std::rc::Rc;

use roundel_core::{Outline, PointerDisposition, PointerEvent, Size, SourceImage};
use roundel_render::{Canvas, PaintPath};

pub type Callback = Rc<dyn Fn()>;
pub type ScaleCallback = Rc<dyn Fn(f32)>;

/// What a host toolkit adapter needs from an image view.
pub trait ImageWidget {
    fn bind(&mut self, image: SourceImage);
    /// Size of the bound image, if any.
    fn intrinsic_size(&self) -> Option<Size>;
    fn on_size_changed(&mut self, size: Size);
    fn paint(&mut self, canvas: &mut dyn Canvas) -> Option<PaintPath>;
    fn on_pointer(&mut self, event: &PointerEvent) -> PointerDisposition;
    fn clip_outline(&self) -> Outline;
}
