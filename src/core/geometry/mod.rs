//! Geometry - screen-space primitives shared by every resolver
//!
//! Coordinates follow the host renderer: origin at the top-left,
//! x grows to the right, y grows downward.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
