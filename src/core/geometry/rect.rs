use serde::{Deserialize, Serialize};

use super::Vec2;

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 { self.x }

    #[inline]
    pub fn right(&self) -> f32 { self.x + self.w }

    #[inline]
    pub fn top(&self) -> f32 { self.y }

    #[inline]
    pub fn bottom(&self) -> f32 { self.y + self.h }

    // Edge setters move the rect; size is preserved. The far edges are
    // derived as origin + size, so the origin is stepped down until that
    // sum no longer rounds past the requested edge.

    pub fn set_left(&mut self, left: f32) { self.x = left; }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
        while self.x + self.w > right {
            self.x = self.x.next_down();
        }
    }

    pub fn set_top(&mut self, top: f32) { self.y = top; }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
        while self.y + self.h > bottom {
            self.y = self.y.next_down();
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn top_left(&self) -> Vec2 { Vec2::new(self.left(), self.top()) }

    pub fn top_right(&self) -> Vec2 { Vec2::new(self.right(), self.top()) }

    pub fn bottom_right(&self) -> Vec2 { Vec2::new(self.right(), self.bottom()) }

    pub fn bottom_left(&self) -> Vec2 { Vec2::new(self.left(), self.bottom()) }

    pub fn has_area(&self) -> bool {
        self.w > 0.0 && self.h > 0.0
    }

    /// Interior overlap test. Shared edges do not count, and a rect
    /// without area never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.has_area()
            && other.has_area()
            && self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True when `other` lies fully inside `self` (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Grow by `margin` on every side.
    pub fn inflate(&self, margin: f32) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.w + margin * 2.0,
            self.h + margin * 2.0,
        )
    }
}
