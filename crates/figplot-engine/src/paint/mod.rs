//! Paint model shared by the rasterizer and the vector writer.

pub mod color;

pub use color::Color;
