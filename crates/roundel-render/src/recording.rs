use roundel_core::*;
use smallvec::SmallVec;

use crate::canvas::{Canvas, Paint, PaintSource, PaintStyle};

/// Owned snapshot of a paint source.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    Image {
        size: (u32, u32),
        transform: ShaderTransform,
        tile: TileMode,
    },
}

impl From<&PaintSource<'_>> for Fill {
    fn from(source: &PaintSource<'_>) -> Self {
        match source {
            PaintSource::Solid(c) => Fill::Solid(*c),
            PaintSource::Image(shader) => Fill::Image {
                size: shader.image.dimensions(),
                transform: shader.transform,
                tile: shader.tile,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vec2,
        radius: f32,
        style: PaintStyle,
        fill: Fill,
        filter: Option<ColorFilter>,
        alpha: u8,
    },
    Rect {
        rect: Rect,
        fill: Fill,
        filter: Option<ColorFilter>,
        alpha: u8,
    },
    Bitmap {
        top_left: Vec2,
        size: (u32, u32),
    },
}

/// Canvas that records commands instead of rasterising them. A frame of the
/// circular pipeline is at most four commands.
#[derive(Default, Debug)]
pub struct RecordingCanvas {
    pub commands: SmallVec<[DrawCommand; 4]>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn draw_circle(&mut self, center: Vec2, radius: f32, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: paint.style,
            fill: Fill::from(&paint.source),
            filter: paint.filter,
            alpha: paint.alpha,
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint<'_>) {
        self.commands.push(DrawCommand::Rect {
            rect,
            fill: Fill::from(&paint.source),
            filter: paint.filter,
            alpha: paint.alpha,
        });
    }

    fn draw_bitmap(&mut self, image: &SourceImage, top_left: Vec2, _paint: Option<&Paint<'_>>) {
        self.commands.push(DrawCommand::Bitmap {
            top_left,
            size: image.dimensions(),
        });
    }
}
