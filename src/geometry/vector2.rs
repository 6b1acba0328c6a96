use crate::utils::number::Number;

/// A 2D point or vector with mutable components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T: Number> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Overwrites both components. Returns itself for chaining.
    pub fn set(&mut self, x: T, y: T) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn add(&mut self, other: Self) -> &mut Self {
        self.set(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&mut self, other: Self) -> &mut Self {
        self.set(self.x - other.x, self.y - other.y)
    }

    pub fn scale(&mut self, value: T) -> &mut Self {
        self.set(self.x * value, self.y * value)
    }

    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn length2(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f64 {
        self.length2().to_f64().unwrap().sqrt()
    }

    pub fn almost_equal(&self, other: Self, tolerance: Option<T>) -> bool {
        self.x.almost_equal(other.x, tolerance) && self.y.almost_equal(other.y, tolerance)
    }
}

impl<T: Number> Default for Vector2<T> {
    /// The origin point.
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}
