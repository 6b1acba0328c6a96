// Geometry module - the rect value type and its collaborators
// Contains the rectangle, 2D vector and line segment primitives

pub mod line;
pub mod rect;
pub mod vector2;


// Re-export commonly used items for convenience
pub use line::Line;
pub use rect::Rect;
pub use vector2::Vector2;

/// Wraps `index + offset` around a cycle of `size` elements.
#[inline(always)]
pub fn cycle_index(index: usize, size: usize, offset: isize) -> usize {
    debug_assert!(size > 0, "cycle_index called with an empty cycle");
    ((index as isize + offset).rem_euclid(size as isize)) as usize
}
