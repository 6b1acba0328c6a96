// Utils module - numeric support shared by the geometry types

pub mod number;
pub mod wasm_logger;
