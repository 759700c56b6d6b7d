//! Switches and doors: overlap-driven state, no positional correction

use crate::domain::{Body, FrameEvent, Gate, Toggle};

/// Turn off every lit switch that a moving body is touching.
///
/// A body standing perfectly still on a switch leaves it alone.
pub fn resolve_switches<B: Body, S: Toggle>(
    bodies: &[B],
    switches: &mut [S],
    events: &mut Vec<FrameEvent>,
) -> usize {
    let mut turned_off = 0;
    for (idx, switch) in switches.iter_mut().enumerate() {
        if !switch.is_on() {
            continue;
        }
        let pressed = bodies
            .iter()
            .any(|b| b.rect().intersects(switch.rect()) && b.is_moving());
        if pressed {
            switch.turn_off();
            log::debug!("switch {} turned off", idx);
            events.push(FrameEvent::SwitchOff { switch: idx });
            turned_off += 1;
        }
    }
    turned_off
}

/// Confirm on a door: completes the level once no door is left closed.
///
/// Emits at most one `LevelComplete` per call.
pub fn resolve_doors<B: Body, G: Gate>(bodies: &[B], doors: &[G], events: &mut Vec<FrameEvent>) -> bool {
    let closed = doors.iter().filter(|d| d.is_closed()).count();
    let at_door = bodies
        .iter()
        .any(|b| doors.iter().any(|d| b.rect().intersects(d.rect())));

    if !at_door {
        return false;
    }
    if closed > 0 {
        log::debug!("door confirm ignored: {} door(s) still closed", closed);
        return false;
    }
    log::debug!("level complete");
    events.push(FrameEvent::LevelComplete);
    true
}
