use crate::core::geometry::Vec2;
use crate::domain::Body;

/// Cooperative explosion: fling two overlapping players up and apart.
///
/// Both get `-speed` on y. On x the player further right gets `+speed`
/// and the other `-speed`; equal x counts the second player as left.
/// Needs exactly two bodies that overlap, otherwise nothing happens.
pub fn resolve_explosion<B: Body>(bodies: &mut [B], speed: f32) -> bool {
    let count = bodies.len();
    let [a, b] = bodies else {
        log::debug!("explosion needs exactly two players, have {}", count);
        return false;
    };
    if !a.rect().intersects(b.rect()) {
        return false;
    }

    let push = if b.rect().x > a.rect().x { speed } else { -speed };
    a.add_velocity(Vec2::new(-push, -speed));
    b.add_velocity(Vec2::new(push, -speed));
    log::debug!("explosion between players {} and {}", a.id(), b.id());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use crate::domain::Player;

    #[test]
    fn overlapping_players_fly_apart_symmetrically() {
        let mut players = [
            Player::new(1, Rect::new(0.0, 0.0, 20.0, 30.0)),
            Player::new(2, Rect::new(10.0, 0.0, 20.0, 30.0)),
        ];
        assert!(resolve_explosion(&mut players, 30.0));
        let (a, b) = (players[0].velocity, players[1].velocity);
        assert_eq!(a, Vec2::new(-30.0, -30.0));
        assert_eq!(b, Vec2::new(30.0, -30.0));
    }

    #[test]
    fn order_in_the_list_does_not_matter() {
        let mut players = [
            Player::new(1, Rect::new(10.0, 0.0, 20.0, 30.0)),
            Player::new(2, Rect::new(0.0, 0.0, 20.0, 30.0)),
        ];
        resolve_explosion(&mut players, 30.0);
        assert!(players[0].velocity.x > 0.0);
        assert!(players[1].velocity.x < 0.0);
    }

    #[test]
    fn impulse_adds_to_existing_velocity() {
        let mut players = [
            Player::new(1, Rect::new(0.0, 0.0, 20.0, 30.0)).with_velocity(5.0, 2.0),
            Player::new(2, Rect::new(10.0, 0.0, 20.0, 30.0)),
        ];
        resolve_explosion(&mut players, 30.0);
        assert_eq!(players[0].velocity, Vec2::new(-25.0, -28.0));
    }

    #[test]
    fn apart_or_alone_is_a_no_op() {
        let mut apart = [
            Player::new(1, Rect::new(0.0, 0.0, 20.0, 30.0)),
            Player::new(2, Rect::new(100.0, 0.0, 20.0, 30.0)),
        ];
        assert!(!resolve_explosion(&mut apart, 30.0));
        assert!(apart.iter().all(|p| p.velocity.is_zero()));

        let mut alone = [Player::new(1, Rect::new(0.0, 0.0, 20.0, 30.0))];
        assert!(!resolve_explosion(&mut alone, 30.0));

        let mut crowd: [Player; 3] = Default::default();
        assert!(!resolve_explosion(&mut crowd, 30.0));
    }
}
