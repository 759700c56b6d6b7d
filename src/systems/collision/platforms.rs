//! Solid obstacles and the three platform flavours

use crate::core::geometry::Vec2;
use crate::domain::{Body, Carrier, Collider};

use super::basic::resolve_basic;
use super::direction::{classify, Side};

/// Walls and static platforms: solid from every side.
pub fn resolve_solids<B: Body, C: Collider>(bodies: &mut [B], obstacles: &[C]) -> usize {
    bodies.iter_mut().map(|b| resolve_basic(b, obstacles)).sum()
}

/// Pass-through platforms: solid only when landed on from above.
///
/// A landing only counts while the mover's bottom is within `tolerance`
/// of the platform top, so a mover jumping up through the platform is not
/// teleported onto it from far below. Upward velocity survives the snap.
pub fn resolve_directional<B: Body, C: Collider>(
    bodies: &mut [B],
    platforms: &[C],
    tolerance: f32,
) -> usize {
    let mut resolved = 0;
    for body in bodies.iter_mut() {
        for platform in platforms {
            let top = platform.rect().top();
            if !body.rect().intersects(platform.rect()) {
                continue;
            }
            if classify(body.rect(), platform.rect()) != Some(Side::Bottom) {
                continue;
            }
            if (body.rect().bottom() - top).abs() >= tolerance {
                continue;
            }

            body.rect_mut().set_bottom(top);
            body.set_on_ground(true);
            let v = body.velocity_mut();
            if v.y > 0.0 {
                v.y = 0.0;
            }
            resolved += 1;
        }
    }
    resolved
}

/// Moving platforms: solid from every side, and anything overlapping a
/// platform at the start of the pass is carried by its displacement.
pub fn resolve_moving<B: Body, M: Carrier>(bodies: &mut [B], platforms: &[M]) -> usize {
    let mut resolved = 0;
    for body in bodies.iter_mut() {
        // Overlap is sampled before the push-out, which leaves the body
        // merely touching the platform.
        let carried = platforms
            .iter()
            .filter(|m| body.rect().intersects(m.rect()))
            .fold(Vec2::zero(), |acc, m| acc + m.displacement());

        resolved += resolve_basic(body, platforms);

        if !carried.is_zero() {
            body.add_displacement(carried);
        }
    }
    resolved
}
