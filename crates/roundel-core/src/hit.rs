use crate::{CircleGeometry, Vec2};

/// Boundary-inclusive circle test. A non-positive radius means geometry has
/// not been computed yet and every point counts as inside.
pub fn is_inside_circle(point: Vec2, center: Vec2, radius: f32) -> bool {
    if radius <= 0.0 {
        return true;
    }
    point.distance_sq(center) <= radius * radius
}

impl CircleGeometry {
    /// Hit test against the border circle.
    pub fn hit_test(&self, point: Vec2) -> bool {
        is_inside_circle(point, self.center, self.border_radius)
    }
}
