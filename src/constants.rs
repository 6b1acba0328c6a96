pub const TOL_F64: f64 = 1e-9;

pub const TOL_F32: f32 = 1e-6;

// Flat buffer layout: a rect is [width, height, x, y], a point is [x, y].
pub const RECT_VALUE_COUNT: usize = 4;

pub const POINT_VALUE_COUNT: usize = 2;

pub const VERTEX_COUNT: usize = 4;
