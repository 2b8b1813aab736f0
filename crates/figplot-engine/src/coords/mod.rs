//! Data-space geometry shared by patches, layout and drivers.
//!
//! Canonical data space:
//! - Origin wherever the user puts it
//! - +X right, +Y up
//!
//! Conversion to pixel space (+Y down) happens once, in [`crate::figure`].

mod bounds;
mod vec2;

pub use bounds::Bounds;
pub use vec2::Vec2;
