use wasm_bindgen::prelude::*;
use web_sys::js_sys::Float32Array;

pub mod constants;
pub mod geometry;
pub mod utils;

use crate::constants::{POINT_VALUE_COUNT, RECT_VALUE_COUNT};
use crate::geometry::line::Line;
use crate::geometry::rect::Rect;
use crate::geometry::vector2::Vector2;

/// Reads a rect from a flat `[width, height, x, y]` memory segment.
///
/// # Arguments
/// * `mem_seg` - Flat array of f32 values in construction order
///
/// # Returns
/// The rect with its fields taken as-is. Unlike `Rect::from_array` nothing
/// is truncated or re-defaulted here, so zero and negative extents survive
/// a round trip across the boundary. Missing extents read as NaN, a missing
/// position reads as the origin.
pub fn rect_from_mem_seg(mem_seg: &[f32]) -> Rect<f32> {
    let value_at = |index: usize| mem_seg.get(index).copied();

    Rect {
        width: value_at(0).unwrap_or(f32::NAN),
        height: value_at(1).unwrap_or(f32::NAN),
        x: value_at(2).unwrap_or(0.0),
        y: value_at(3).unwrap_or(0.0),
    }
}

/// Packs points into a flat memory segment: [x0, y0, x1, y1, ...].
pub fn vertices_to_mem_seg(vertices: &[Vector2<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(vertices.len() * POINT_VALUE_COUNT);

    for vertex in vertices {
        out.push(vertex.x);
        out.push(vertex.y);
    }

    out
}

/// Packs segments into a flat memory segment, 4 values per edge:
/// [sx, sy, ex, ey, ...].
pub fn edges_to_mem_seg(edges: &[Line<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(edges.len() * POINT_VALUE_COUNT * 2);

    for edge in edges {
        out.push(edge.start.x);
        out.push(edge.start.y);
        out.push(edge.end.x);
        out.push(edge.end.y);
    }

    out
}

fn to_typed_array(values: &[f32]) -> Float32Array {
    let out = Float32Array::new_with_length(values.len() as u32);
    out.copy_from(values);
    out
}

fn checked_rect(mem_seg: &[f32], caller: &str) -> Rect<f32> {
    if mem_seg.len() < RECT_VALUE_COUNT {
        crate::wasm_warn!(
            "{}: rect buffer has {} of {} values",
            caller,
            mem_seg.len(),
            RECT_VALUE_COUNT
        );
    }

    rect_from_mem_seg(mem_seg)
}

#[wasm_bindgen]
pub fn rect_from_array(values: &[f32]) -> Float32Array {
    if values.len() < 2 {
        crate::wasm_warn!(
            "rect_from_array: expected at least 2 values, got {}",
            values.len()
        );
    }

    to_typed_array(&Rect::from_array(values).to_array())
}

#[wasm_bindgen]
pub fn rect_center(buff: &[f32]) -> Float32Array {
    let center = checked_rect(buff, "rect_center").center();

    to_typed_array(&[center.x, center.y])
}

#[wasm_bindgen]
pub fn rect_set_center(buff: &[f32], x: f32, y: f32) -> Float32Array {
    let mut rect = checked_rect(buff, "rect_set_center");

    rect.set_center(Vector2::new(x, y));

    to_typed_array(&rect.to_array())
}

#[wasm_bindgen]
pub fn rect_scale(buff: &[f32], factor: f32) -> Float32Array {
    let mut rect = checked_rect(buff, "rect_scale");

    rect.scale(factor);

    to_typed_array(&rect.to_array())
}

#[wasm_bindgen]
pub fn rect_expand(buff: &[f32], factor: f32) -> Float32Array {
    let mut rect = checked_rect(buff, "rect_expand");

    rect.expand(factor);

    to_typed_array(&rect.to_array())
}

#[wasm_bindgen]
pub fn rect_contract(buff: &[f32], amount: f32) -> Float32Array {
    let mut rect = checked_rect(buff, "rect_contract");

    rect.contract(amount);

    to_typed_array(&rect.to_array())
}

#[wasm_bindgen]
pub fn rect_clip(buff: &[f32], bounds: &[f32]) -> Float32Array {
    let mut rect = checked_rect(buff, "rect_clip");
    let bounds = checked_rect(bounds, "rect_clip");

    rect.clip(&bounds);

    to_typed_array(&rect.to_array())
}

#[wasm_bindgen]
pub fn rect_vertices(buff: &[f32]) -> Float32Array {
    let vertices = checked_rect(buff, "rect_vertices").vertices();

    to_typed_array(&vertices_to_mem_seg(&vertices))
}

#[wasm_bindgen]
pub fn rect_edges(buff: &[f32]) -> Float32Array {
    let edges = checked_rect(buff, "rect_edges").edges();

    to_typed_array(&edges_to_mem_seg(&edges))
}

#[wasm_bindgen]
pub fn rect_contains(buff: &[f32], x: f32, y: f32) -> bool {
    checked_rect(buff, "rect_contains").contains(Vector2::new(x, y))
}
