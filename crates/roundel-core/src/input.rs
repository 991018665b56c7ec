use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    Move,
    Cancel,
}

#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerKind,
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    /// Primary-touch event at `(x, y)`.
    pub fn touch(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            id: PointerId(0),
            kind: PointerKind::Touch,
            event,
            position: Vec2::new(x, y),
        }
    }
}

/// What a widget did with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerDisposition {
    /// Pass on to the host's default interactive behaviour.
    Forward,
    /// Outside the circle; the host should treat it as unhandled.
    Ignore,
}
