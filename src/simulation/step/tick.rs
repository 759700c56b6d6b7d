use crate::core::perf_timer::PerfTimer;
use crate::domain::{CollisionPass, Scene, PASS_ORDER};
use crate::systems::collision::{
    resolve_boundary, resolve_directional, resolve_hazards, resolve_moving, resolve_solids,
    resolve_switches,
};

use super::{CollisionEngine, MAX_QUEUED_EVENTS};

pub(super) fn update(engine: &mut CollisionEngine, scene: &mut Scene) {
    engine.frame += 1;
    log::trace!("collision tick: frame={} players={}", engine.frame, scene.players.len());

    let timer = engine.perf_enabled.then(PerfTimer::start);
    let events_before = engine.events.len();

    let mut contacts = 0;
    for pass in PASS_ORDER {
        contacts += run_pass(engine, scene, pass);
    }

    engine.audio.update(&mut engine.events);
    let emitted = engine.events.len() - events_before;

    let excess = engine.events.len().saturating_sub(MAX_QUEUED_EVENTS);
    if excess > 0 {
        log::warn!("event queue not drained, dropping {} oldest", excess);
        engine.events.drain(..excess);
    }

    if let Some(t) = timer {
        let stats = &mut engine.perf_stats;
        stats.step_ms = t.elapsed_ms();
        stats.frame = engine.frame;
        stats.contacts_resolved = contacts as u32;
        stats.events_emitted = emitted as u32;
        stats.players = scene.players.len() as u32;
        stats.obstacles = obstacle_count(scene) as u32;
    }
}

/// Run one category resolver. Returns how many contacts or triggers it
/// handled.
pub(super) fn run_pass(engine: &mut CollisionEngine, scene: &mut Scene, pass: CollisionPass) -> usize {
    let config = &engine.config;
    let events = &mut engine.events;

    match pass {
        CollisionPass::Walls => resolve_solids(&mut scene.players, &scene.walls),
        CollisionPass::Switches => resolve_switches(&scene.players, &mut scene.switches, events),
        CollisionPass::StaticPlatforms => resolve_solids(&mut scene.players, &scene.s_platforms),
        CollisionPass::DirectionalPlatforms => {
            resolve_directional(&mut scene.players, &scene.d_platforms, config.platform_tolerance)
        }
        CollisionPass::MovingPlatforms => resolve_moving(&mut scene.players, &scene.m_platforms),
        CollisionPass::Spikes => resolve_hazards(&scene.players, &scene.spikes, events),
        CollisionPass::Bosses => resolve_hazards(&scene.players, &scene.bosses, events),
        CollisionPass::Boundary => {
            resolve_boundary(&scene.players, &scene.rect, config.boundary_margin, events)
        }
    }
}

fn obstacle_count(scene: &Scene) -> usize {
    scene.walls.len()
        + scene.s_platforms.len()
        + scene.d_platforms.len()
        + scene.m_platforms.len()
        + scene.switches.len()
        + scene.doors.len()
        + scene.spikes.len()
        + scene.bosses.len()
}
