use crate::geometry::vector2::Vector2;
use crate::utils::number::Number;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<T: Number> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
}

impl<T: Number> Line<T> {
    pub fn new(start: Vector2<T>, end: Vector2<T>) -> Self {
        Self { start, end }
    }

    /// Squared segment length, kept in the field type.
    pub fn length2(&self) -> T {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        dx * dx + dy * dy
    }

    pub fn length(&self) -> f64 {
        self.length2().to_f64().unwrap().sqrt()
    }

    pub fn almost_equal(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.start.almost_equal(other.start, tolerance) && self.end.almost_equal(other.end, tolerance)
    }
}
