//! Coordinate and geometry types shared by the surface core and renderers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Physical pixels only where explicitly noted (shader resolution)

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
