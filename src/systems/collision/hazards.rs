//! Instant-death checks: spikes, bosses and falling out of the level

use crate::core::geometry::Rect;
use crate::domain::{Body, Collider, FrameEvent};

/// Report a death for every body touching any hazard.
///
/// At most one death per body per call. Nothing is moved; the scene
/// decides what dying means.
pub fn resolve_hazards<B: Body, C: Collider>(
    bodies: &[B],
    hazards: &[C],
    events: &mut Vec<FrameEvent>,
) -> usize {
    let mut deaths = 0;
    for body in bodies {
        if hazards.iter().any(|h| body.rect().intersects(h.rect())) {
            log::debug!("player {} hit a hazard", body.id());
            events.push(FrameEvent::PlayerDied { player: body.id() });
            deaths += 1;
        }
    }
    deaths
}

/// Report a death for every body that is not fully inside the scene
/// bounds grown by `margin`.
pub fn resolve_boundary<B: Body>(
    bodies: &[B],
    scene: &Rect,
    margin: f32,
    events: &mut Vec<FrameEvent>,
) -> usize {
    let boundary = scene.inflate(margin);
    let mut deaths = 0;
    for body in bodies {
        if !boundary.contains(body.rect()) {
            log::debug!("player {} left the level at {:?}", body.id(), body.rect());
            events.push(FrameEvent::PlayerDied { player: body.id() });
            deaths += 1;
        }
    }
    deaths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Block, Player};

    const MARGIN: f32 = 1000.0;

    fn scene() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn touching_a_spike_reports_that_player() {
        let players = [
            Player::new(1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            Player::new(2, Rect::new(100.0, 95.0, 10.0, 10.0)),
        ];
        let spikes = [Block::new(90.0, 100.0, 40.0, 10.0), Block::new(105.0, 100.0, 40.0, 10.0)];
        let mut events = Vec::new();
        assert_eq!(resolve_hazards(&players, &spikes, &mut events), 1);
        assert_eq!(events, vec![FrameEvent::PlayerDied { player: 2 }]);
        assert_eq!(players[1].rect, Rect::new(100.0, 95.0, 10.0, 10.0));
    }

    #[test]
    fn player_inside_margin_survives() {
        // Off-screen but inside the expanded boundary.
        let players = [Player::new(1, Rect::new(-900.0, 1500.0, 20.0, 30.0))];
        let mut events = Vec::new();
        assert_eq!(resolve_boundary(&players, &scene(), MARGIN, &mut events), 0);
        assert!(events.is_empty());
    }

    #[test]
    fn player_beyond_margin_dies() {
        let players = [
            Player::new(1, Rect::new(10.0, 10.0, 20.0, 30.0)),
            Player::new(2, Rect::new(100.0, 5000.0, 20.0, 30.0)),
        ];
        let mut events = Vec::new();
        assert_eq!(resolve_boundary(&players, &scene(), MARGIN, &mut events), 1);
        assert!(events[0].is_death_of(2));
    }

    #[test]
    fn straddling_the_boundary_counts_as_out() {
        let players = [Player::new(1, Rect::new(-1010.0, 0.0, 20.0, 30.0))];
        let mut events = Vec::new();
        assert_eq!(resolve_boundary(&players, &scene(), MARGIN, &mut events), 1);
    }
}
