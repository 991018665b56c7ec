use roundel_core::animation::{PressAnimation, spring_scale};
use roundel_core::*;
use roundel_render::{BoundImage, Canvas, Frame, PaintPath};

use crate::host::{Callback, ImageWidget, ScaleCallback};

/// Counters for the derived-state caches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub geometry_passes: u64,
    pub shader_builds: u64,
    pub frames: u64,
}

/// Image view that renders its content clipped to a circle.
///
/// Geometry and the shader transform are cached and only recomputed when
/// [`StateManager`] reports them stale; pressing, selecting and recoloring
/// only repaint.
///
/// ```
/// use roundel_core::*;
/// use roundel_render::RecordingCanvas;
/// use roundel_widget::CircleImage;
///
/// let mut view = CircleImage::new(&CircleImageConfig::default()).unwrap();
/// view.bind(SourceImage::solid(400, 200, Color::WHITE).unwrap());
/// view.resize(100.0, 100.0);
///
/// let mut canvas = RecordingCanvas::new();
/// view.paint(&mut canvas);
/// assert_eq!(view.transform().unwrap().scale, 0.5);
/// ```
pub struct CircleImage {
    features: Features,
    size: Size,
    padding: PaddingValues,
    border_width: BorderWidth,
    border_overlay: bool,
    appearance: Appearance,
    bitmap: Option<SourceImage>,
    overlay: Option<SourceImage>,
    circular: bool,
    selected: bool,
    pressed: bool,
    enabled: bool,
    state: StateManager,
    geometry: Option<CircleGeometry>,
    transform: Option<ShaderTransform>,
    press: PressAnimation,
    scale: f32,
    on_invalidate: Option<Callback>,
    on_scale: Option<ScaleCallback>,
    stats: RenderStats,
}

impl CircleImage {
    pub fn new(config: &CircleImageConfig) -> Result<Self, ConfigError> {
        let border = config.resolve_border()?;
        let mut view = Self {
            features: config.features,
            size: Size::default(),
            padding: PaddingValues::ZERO,
            border_width: border.width,
            border_overlay: border.overlay,
            appearance: Appearance::default(),
            bitmap: None,
            overlay: None,
            circular: true,
            selected: false,
            pressed: false,
            enabled: true,
            state: StateManager::new(),
            geometry: None,
            transform: None,
            press: PressAnimation::default(),
            scale: 1.0,
            on_invalidate: None,
            on_scale: None,
            stats: RenderStats::default(),
        };
        view.set_appearance(config.appearance());
        view.set_disable_circular_transformation(config.disable_circular_transformation);
        view.init();
        Ok(view)
    }

    fn init(&mut self) {
        if self.state.finish_construction() {
            log::debug!("running setup queued during construction");
            self.invalidate();
        }
    }

    fn invalidate(&self) {
        if let Some(cb) = &self.on_invalidate {
            cb();
        }
    }

    fn mark(&mut self, change: Change) {
        if self.state.mark(change) {
            self.invalidate();
        }
    }

    // Host wiring

    /// Called whenever a redraw is needed; the view never paints on its own.
    pub fn set_on_invalidate(&mut self, cb: impl Fn() + 'static) {
        self.on_invalidate = Some(std::rc::Rc::new(cb));
    }

    /// Receives the press-feedback scale for both axes.
    pub fn set_on_scale(&mut self, cb: impl Fn(f32) + 'static) {
        self.on_scale = Some(std::rc::Rc::new(cb));
    }

    // Content

    /// Replaces the current image.
    pub fn bind(&mut self, image: SourceImage) {
        self.bitmap = Some(image);
        self.mark(Change::Content);
    }

    /// Binds any drawable, rasterising it first. A drawable that cannot be
    /// rasterised leaves the view without an image; background and border
    /// still draw.
    pub fn set_drawable(&mut self, drawable: Option<Drawable>) {
        self.bitmap = match drawable.map(Drawable::into_bitmap) {
            Some(Ok(bitmap)) => Some(bitmap),
            Some(Err(e)) => {
                log::warn!("dropping drawable: {e}");
                None
            }
            None => None,
        };
        self.mark(Change::Content);
    }

    pub fn clear_image(&mut self) {
        self.set_drawable(None);
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.bitmap.as_ref()
    }

    pub fn set_overlay_sprite(&mut self, sprite: Option<SourceImage>) {
        self.overlay = sprite;
        self.mark(Change::Appearance);
    }

    // Layout

    pub fn resize(&mut self, width: f32, height: f32) {
        let size = Size::new(width, height);
        if size == self.size {
            return;
        }
        self.size = size;
        self.mark(Change::Layout);
    }

    pub fn set_padding(&mut self, padding: PaddingValues) {
        if padding == self.padding {
            return;
        }
        self.padding = padding;
        self.mark(Change::Layout);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn padding(&self) -> PaddingValues {
        self.padding
    }

    // Border

    /// Validates and applies a border. On error nothing changes.
    pub fn configure_border(&mut self, config: BorderConfig) -> Result<(), ConfigError> {
        let spec = config.resolve(self.features)?;
        self.appearance.border_color = spec.color;
        if spec.width != self.border_width || spec.overlay != self.border_overlay {
            self.border_width = spec.width;
            self.border_overlay = spec.overlay;
            self.mark(Change::Layout);
        } else {
            self.mark(Change::Appearance);
        }
        Ok(())
    }

    /// Current border; the color is the one painted.
    pub fn border(&self) -> BorderSpec {
        BorderSpec {
            width: self.border_width,
            color: self.appearance.border_color,
            overlay: self.border_overlay,
        }
    }

    pub fn set_border_color(&mut self, color: Color) {
        if color == self.appearance.border_color {
            return;
        }
        self.appearance.border_color = color;
        self.mark(Change::Appearance);
    }

    pub fn set_border_overlay(&mut self, overlay: bool) {
        if overlay == self.border_overlay {
            return;
        }
        self.border_overlay = overlay;
        self.mark(Change::Layout);
    }

    // Appearance

    fn set_appearance(&mut self, appearance: Appearance) {
        if appearance == self.appearance {
            return;
        }
        self.appearance = appearance;
        self.mark(Change::Appearance);
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn set_circle_background_color(&mut self, color: Color) {
        if color == self.appearance.background {
            return;
        }
        self.appearance.background = color;
        self.mark(Change::Appearance);
    }

    /// `None` turns the background fill off.
    pub fn set_background_color_hex(&mut self, hex: Option<&str>) -> Result<(), ConfigError> {
        let color = match hex {
            Some(hex) => Color::try_from_hex(hex)
                .ok_or_else(|| ConfigError::Parse(format!("invalid color `{hex}`")))?,
            None => Color::TRANSPARENT,
        };
        self.set_circle_background_color(color);
        Ok(())
    }

    pub fn set_image_alpha(&mut self, alpha: u8) {
        if alpha == self.appearance.image_alpha {
            return;
        }
        self.appearance.image_alpha = alpha;
        self.mark(Change::Appearance);
    }

    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        if filter == self.appearance.color_filter {
            return;
        }
        self.appearance.color_filter = filter;
        self.mark(Change::Appearance);
    }

    pub fn set_state_tints(&mut self, tints: StateTints) {
        if tints == self.appearance.tints {
            return;
        }
        self.appearance.tints = tints;
        self.mark(Change::Appearance);
    }

    // Visual state

    pub fn visual_state(&self) -> VisualState {
        if !self.enabled {
            VisualState::Disabled
        } else if self.pressed {
            VisualState::Pressed
        } else if self.selected {
            VisualState::Selected
        } else {
            VisualState::Normal
        }
    }

    /// Forces a visual state, as selection or pointer collaborators do.
    pub fn set_visual_state(&mut self, state: VisualState) {
        let before = self.visual_state();
        match state {
            VisualState::Normal => {
                self.enabled = true;
                self.pressed = false;
                self.selected = false;
            }
            VisualState::Pressed => {
                self.enabled = true;
                self.pressed = true;
            }
            VisualState::Selected => {
                self.enabled = true;
                self.pressed = false;
                self.selected = true;
            }
            VisualState::Disabled => {
                self.enabled = false;
                self.pressed = false;
            }
        }
        if self.visual_state() != before {
            self.mark(Change::Appearance);
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        if selected == self.selected {
            return;
        }
        self.selected = selected;
        self.mark(Change::Appearance);
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
        }
        self.mark(Change::Appearance);
    }

    // Mode

    pub fn set_disable_circular_transformation(&mut self, disable: bool) {
        if disable != self.circular {
            return;
        }
        self.circular = !disable;
        self.mark(Change::Content);
    }

    pub fn is_disable_circular_transformation(&self) -> bool {
        !self.circular
    }

    pub fn scale_type(&self) -> ScaleType {
        ScaleType::SUPPORTED
    }

    /// Only [`ScaleType::CenterCrop`] is accepted.
    pub fn set_scale_type(&mut self, scale_type: ScaleType) -> Result<(), ConfigError> {
        scale_type.validate().map(|_| ())
    }

    pub fn set_adjust_view_bounds(&mut self, adjust: bool) -> Result<(), ConfigError> {
        if adjust {
            return Err(ConfigError::AdjustViewBoundsUnsupported);
        }
        Ok(())
    }

    // Derived state

    /// Brings geometry and the shader transform up to date. Returns `false`
    /// while the viewport is too small to hold a circle.
    pub fn prepare(&mut self) -> bool {
        if self.state.is_dirty(Dirty::GEOMETRY) {
            match compute_geometry(self.size, self.padding, &self.border()) {
                Ok(g) => {
                    log::debug!(
                        "geometry: center={:?} drawable_radius={} border_radius={}",
                        g.center,
                        g.drawable_radius,
                        g.border_radius
                    );
                    self.geometry = Some(g);
                    self.stats.geometry_passes += 1;
                    self.state.clear(Dirty::GEOMETRY);
                }
                Err(e) => {
                    log::debug!("deferring geometry: {e}");
                    self.geometry = None;
                    return false;
                }
            }
        }
        let Some(geometry) = self.geometry else {
            return false;
        };

        if self.state.is_dirty(Dirty::SHADER) {
            self.transform = None;
            if let Some(bitmap) = &self.bitmap {
                let dst = if self.circular {
                    geometry.drawable_rect
                } else {
                    geometry.viewport
                };
                match compute_transform(bitmap.width(), bitmap.height(), dst) {
                    Ok(t) => {
                        log::debug!(
                            "shader: scale={} translate=({}, {})",
                            t.scale,
                            t.translate_x,
                            t.translate_y
                        );
                        self.transform = Some(t);
                        self.stats.shader_builds += 1;
                    }
                    Err(e) => {
                        log::warn!("dropping image: {e}");
                        self.bitmap = None;
                    }
                }
            }
            self.state.clear(Dirty::SHADER);
        }
        true
    }

    pub fn paint(&mut self, canvas: &mut dyn Canvas) -> Option<PaintPath> {
        if !self.prepare() {
            return None;
        }
        let geometry = self.geometry.as_ref()?;
        let image = match (&self.bitmap, &self.transform) {
            (Some(image), Some(transform)) => Some(BoundImage { image, transform }),
            _ => None,
        };
        let frame = Frame {
            size: self.size,
            content: geometry.viewport,
            geometry: Some(geometry),
            image,
            overlay: self.overlay.as_ref(),
            appearance: &self.appearance,
            state: self.visual_state(),
            circular: self.circular,
            features: self.features,
        };
        let path = roundel_render::paint(&frame, canvas);
        self.state.clear(Dirty::DRAW);
        self.stats.frames += 1;
        path
    }

    pub fn geometry(&self) -> Option<&CircleGeometry> {
        self.geometry.as_ref()
    }

    pub fn transform(&self) -> Option<&ShaderTransform> {
        self.transform.as_ref()
    }

    pub fn dirty(&self) -> Dirty {
        self.state.dirty()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn intrinsic_size(&self) -> Option<Size> {
        self.bitmap
            .as_ref()
            .map(|b| Size::new(b.width() as f32, b.height() as f32))
    }

    pub fn clip_outline(&self) -> Outline {
        provide_clip_outline(self.size, self.circular)
    }

    // Pointer input

    /// Whether `point` falls inside the touchable circle. Open until the
    /// first successful layout, and always open in rectangular mode.
    pub fn hit_test(&self, point: Vec2) -> bool {
        match &self.geometry {
            Some(g) if self.circular => g.hit_test(point),
            _ => true,
        }
    }

    pub fn on_pointer(&mut self, event: &PointerEvent) -> PointerDisposition {
        let inside = self.hit_test(event.position);
        log::trace!("pointer {:?} at {:?}, inside={inside}", event.event, event.position);
        match event.event {
            PointerEventKind::Down(_) => {
                if !inside {
                    return PointerDisposition::Ignore;
                }
                if self.enabled && !self.pressed {
                    self.pressed = true;
                    self.press.press();
                    self.mark(Change::Appearance);
                }
                PointerDisposition::Forward
            }
            PointerEventKind::Move => {
                if inside {
                    PointerDisposition::Forward
                } else {
                    PointerDisposition::Ignore
                }
            }
            PointerEventKind::Up(_) => {
                self.release();
                if inside {
                    PointerDisposition::Forward
                } else {
                    PointerDisposition::Ignore
                }
            }
            PointerEventKind::Cancel => {
                self.release();
                PointerDisposition::Forward
            }
        }
    }

    fn release(&mut self) {
        if self.pressed {
            self.pressed = false;
            self.press.release();
            self.mark(Change::Appearance);
        }
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.on_pointer(&PointerEvent::touch(
            PointerEventKind::Down(PointerButton::Primary),
            x,
            y,
        ))
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.on_pointer(&PointerEvent::touch(PointerEventKind::Move, x, y))
    }

    pub fn on_pointer_up(&mut self, x: f32, y: f32) -> PointerDisposition {
        self.on_pointer(&PointerEvent::touch(
            PointerEventKind::Up(PointerButton::Primary),
            x,
            y,
        ))
    }

    // Press feedback

    /// Applies a spring value from the host's physics engine.
    pub fn on_spring_update(&mut self, value: f32) -> f32 {
        self.scale = spring_scale(value);
        if let Some(cb) = &self.on_scale {
            cb(self.scale);
        }
        self.scale
    }

    /// Advances the built-in press animation. Returns `true` while more
    /// frames are needed.
    pub fn tick_animation(&mut self) -> bool {
        let running = self.press.tick();
        self.on_spring_update(self.press.value());
        running
    }

    /// Sets the spring value directly, or animates towards it.
    pub fn animate_view(&mut self, value: f32, animate: bool) {
        if animate {
            self.press.animate_to(value);
        } else {
            self.press.set_current(value);
            self.on_spring_update(value);
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl ImageWidget for CircleImage {
    fn bind(&mut self, image: SourceImage) {
        CircleImage::bind(self, image);
    }

    fn intrinsic_size(&self) -> Option<Size> {
        CircleImage::intrinsic_size(self)
    }

    fn on_size_changed(&mut self, size: Size) {
        self.resize(size.width, size.height);
    }

    fn paint(&mut self, canvas: &mut dyn Canvas) -> Option<PaintPath> {
        CircleImage::paint(self, canvas)
    }

    fn on_pointer(&mut self, event: &PointerEvent) -> PointerDisposition {
        CircleImage::on_pointer(self, event)
    }

    fn clip_outline(&self) -> Outline {
        CircleImage::clip_outline(self)
    }
}
