use crate::domain::config::EXPLOSION_SOUND;
use crate::domain::{Action, Scene};
use crate::systems::collision::{resolve_doors, resolve_explosion};

use super::CollisionEngine;

/// Key-press resolution. Runs between ticks, never inside one.
pub(super) fn key_down(engine: &mut CollisionEngine, scene: &mut Scene, key: u32) {
    if key == engine.config.confirm_key {
        resolve_doors(&scene.players, &scene.doors, &mut engine.events);
    }

    let coop_jump = match scene.players.as_slice() {
        [p1, p2] => {
            p1.keybinds.is_bound(Action::CoopJump, key) || p2.keybinds.is_bound(Action::CoopJump, key)
        }
        _ => false,
    };
    if !coop_jump {
        return;
    }

    if resolve_explosion(&mut scene.players, engine.config.explosion_speed) {
        // Played by the audio update at the end of the next tick.
        engine.audio.play(EXPLOSION_SOUND);
    }
}
