use crate::domain::{Body, Collider};

use super::direction::{classify, Side};

/// Push `mover` out of every obstacle it overlaps.
///
/// Each overlap is classified and the matching edge of the mover is
/// snapped flush against the obstacle, zeroing velocity on that axis.
/// Landing on top also sets the ground flag. Obstacles are never moved.
///
/// Returns the number of contacts corrected.
pub fn resolve_basic<B, C>(mover: &mut B, obstacles: &[C]) -> usize
where
    B: Body + ?Sized,
    C: Collider,
{
    let mut resolved = 0;
    for obstacle in obstacles {
        let wall = *obstacle.rect();
        if !mover.rect().intersects(&wall) {
            continue;
        }
        let Some(side) = classify(mover.rect(), &wall) else {
            log::trace!("unclassified overlap at {:?}, skipped", wall);
            continue;
        };

        match side {
            Side::Bottom => {
                mover.rect_mut().set_bottom(wall.top());
                mover.velocity_mut().y = 0.0;
                mover.set_on_ground(true);
            }
            Side::Left => {
                mover.rect_mut().set_left(wall.right());
                mover.velocity_mut().x = 0.0;
            }
            Side::Top => {
                mover.rect_mut().set_top(wall.bottom());
                mover.velocity_mut().y = 0.0;
            }
            Side::Right => {
                mover.rect_mut().set_right(wall.left());
                mover.velocity_mut().x = 0.0;
            }
        }
        resolved += 1;
    }
    resolved
}
