//! Directional classifier
//!
//! Splits the full circle around a static rectangle's center into four
//! sectors bounded by its diagonals, then reports which sector the
//! mover-center -> static-center vector falls into. The answer depends
//! only on the two centers, never on velocity or penetration depth, so a
//! resting mover classifies the same way every frame.
//!
//! Sector boundaries are half-open: an angle exactly on a diagonal belongs
//! to the sector that starts there (bottom, left, top, right in rotation
//! order).

use crate::core::geometry::{Rect, Vec2};

const FULL_ROTATION: f32 = 360.0;

/// Side of the mover that struck the static rectangle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Mover landed on top of the obstacle
    Bottom,
    /// Mover hit the obstacle's right face
    Left,
    /// Mover hit the obstacle's underside
    Top,
    /// Mover hit the obstacle's left face
    Right,
}

/// Classify the contact between two rectangles already known to overlap.
///
/// Returns `None` when the static rectangle has no area or the geometry
/// is not finite; callers skip the pair.
pub fn classify(mover: &Rect, fixed: &Rect) -> Option<Side> {
    if !fixed.has_area() {
        return None;
    }
    let corners = [
        fixed.top_left(),
        fixed.top_right(),
        fixed.bottom_right(),
        fixed.bottom_left(),
    ];
    classify_points(corners, fixed.center(), mover.center())
}

/// Pure form of [`classify`].
///
/// `corners` are the static rectangle's corners in order top-left,
/// top-right, bottom-right, bottom-left.
pub fn classify_points(corners: [Vec2; 4], fixed_center: Vec2, mover_center: Vec2) -> Option<Side> {
    let spokes = corners.map(|c| fixed_center - c);
    let origin = spokes[0];

    let bounds = spokes.map(|s| wrap_degrees(origin.angle_to(s)));
    let angle = wrap_degrees(origin.angle_to(fixed_center - mover_center));
    if !angle.is_finite() || bounds.iter().any(|b| !b.is_finite()) {
        return None;
    }

    let sectors = [
        (Side::Bottom, bounds[0], bounds[1]),
        (Side::Left, bounds[1], bounds[2]),
        (Side::Top, bounds[2], bounds[3]),
        (Side::Right, bounds[3], FULL_ROTATION),
    ];
    sectors
        .iter()
        .find(|(_, lo, hi)| *lo <= angle && angle < *hi)
        .map(|(side, _, _)| *side)
}

#[inline]
fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(FULL_ROTATION);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= FULL_ROTATION { wrapped - FULL_ROTATION } else { wrapped }
}
