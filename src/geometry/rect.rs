use crate::constants::VERTEX_COUNT;
use crate::geometry::cycle_index;
use crate::geometry::line::Line;
use crate::geometry::vector2::Vector2;
use crate::utils::number::Number;

/// An axis-aligned rectangle positioned by its top-left corner, with y
/// growing downward. Extents are signed: contraction and clipping may
/// drive them negative and no operation clamps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<T: Number> {
    pub width: T,
    pub height: T,
    pub x: T,
    pub y: T,
}

fn non_zero_or<T: Number>(value: Option<T>, default: T) -> T {
    match value {
        Some(value) if !value.is_zero() => value,
        _ => default,
    }
}

impl<T: Number> Rect<T> {
    /// Creates a new rect. An absent or zero argument selects the default:
    /// width = 1, height = 1, x = 0, y = 0. NaN is not zero and passes
    /// through unchanged.
    pub fn new(width: Option<T>, height: Option<T>, x: Option<T>, y: Option<T>) -> Self {
        Self {
            width: non_zero_or(width, T::one()),
            height: non_zero_or(height, T::one()),
            x: non_zero_or(x, T::zero()),
            y: non_zero_or(y, T::zero()),
        }
    }

    /// The center of the rectangle as a fresh point.
    pub fn center(&self) -> Vector2<T> {
        Vector2::new(self.x + self.width.half(), self.y + self.height.half())
    }

    /// Writes the center into a caller-supplied point.
    pub fn center_into(&self, out: &mut Vector2<T>) {
        let center = self.center();
        out.set(center.x, center.y);
    }

    /// Moves the rect so that its center lands on the given point.
    /// Returns itself for chaining.
    pub fn set_center(&mut self, center: Vector2<T>) -> &mut Self {
        self.x = center.x - self.width.half();
        self.y = center.y - self.height.half();
        self
    }

    /// Multiplies both extents by `factor`; the position stays put.
    pub fn scale(&mut self, factor: T) -> &mut Self {
        self.width = self.width * factor;
        self.height = self.height * factor;
        self
    }

    /// Multiplies both extents by `factor` while keeping the same center.
    pub fn expand(&mut self, factor: T) -> &mut Self {
        // grab the center first so the resize happens around it
        let center = self.center();
        self.scale(factor);
        self.set_center(center)
    }

    /// Insets every side by `amount`: the position moves inward and each
    /// extent shrinks by twice the amount. Returns itself for chaining.
    pub fn contract(&mut self, amount: T) -> &mut Self {
        self.x = self.x + amount;
        self.y = self.y + amount;
        self.width = self.width - (amount + amount);
        self.height = self.height - (amount + amount);
        self
    }

    /// Constrains this rect to lie within `other`, one edge at a time.
    /// The left/top adjustments run before the right/bottom tests, so the
    /// far-edge clamping sees the already-adjusted position. A rect lying
    /// entirely outside `other` ends up with negative extents.
    pub fn clip(&mut self, other: &Self) -> &mut Self {
        // left edge
        if self.x < other.x {
            self.width = self.width + (self.x - other.x);
            self.x = other.x;
        }

        // right edge
        if self.x + self.width >= other.x + other.width {
            self.width = other.x + other.width - self.x;
        }

        // top edge
        if self.y < other.y {
            self.height = self.height + (self.y - other.y);
            self.y = other.y;
        }

        // bottom edge
        if self.y + self.height >= other.y + other.height {
            self.height = other.y + other.height - self.y;
        }

        self
    }

    pub fn right(&self) -> T {
        self.x + self.width
    }

    pub fn bottom(&self) -> T {
        self.y + self.height
    }

    /// Whether the point lies within the rect, all edges inclusive.
    pub fn contains(&self, point: Vector2<T>) -> bool {
        point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Corner points in clockwise order from the top left.
    pub fn vertices(&self) -> [Vector2<T>; 4] {
        [
            Vector2::new(self.x, self.y),
            Vector2::new(self.x + self.width, self.y),
            Vector2::new(self.x + self.width, self.y + self.height),
            Vector2::new(self.x, self.y + self.height),
        ]
    }

    /// Boundary segments connecting consecutive vertices into a closed
    /// loop: top, right, bottom, left.
    pub fn edges(&self) -> [Line<T>; 4] {
        let vertices = self.vertices();

        std::array::from_fn(|index| {
            Line::new(vertices[index], vertices[cycle_index(index, VERTEX_COUNT, 1)])
        })
    }

    pub fn almost_equal(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.width.almost_equal(other.width, tolerance)
            && self.height.almost_equal(other.height, tolerance)
            && self.x.almost_equal(other.x, tolerance)
            && self.y.almost_equal(other.y, tolerance)
    }

    /// The rect as a flat array in construction order.
    pub fn to_array(&self) -> [T; 4] {
        [self.width, self.height, self.x, self.y]
    }

    /// Builds a rect from a flat `[width, height, x, y]` array, truncating
    /// every element toward zero the way an integer parse would.
    ///
    /// # Arguments
    /// * `values` - 2 or 4 numeric values; with fewer than 4 the position
    ///   defaults to the origin, with fewer than 2 the missing extents
    ///   become `Number::nan()`
    ///
    /// # Returns
    /// The parsed rect. Values route through `Rect::new`, so a parsed zero
    /// extent still receives the documented default of 1.
    pub fn from_array(values: &[T]) -> Self {
        let parse = |index: usize| {
            values
                .get(index)
                .copied()
                .map(|value| value.truncated())
                .unwrap_or_else(T::nan)
        };

        let (x, y) = if values.len() >= 4 {
            (parse(2), parse(3))
        } else {
            (T::zero(), T::zero())
        };

        Self::new(Some(parse(0)), Some(parse(1)), Some(x), Some(y))
    }
}

impl<T: Number> Default for Rect<T> {
    /// The unit rect at the origin.
    fn default() -> Self {
        Self::new(None, None, None, None)
    }
}
