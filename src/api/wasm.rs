use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::core::geometry::{Rect, Vec2};
use crate::domain::{
    Action, Block, CollisionConfig, Door, MovingPlatform, Player, Scene, Switch,
};
use crate::simulation::{CollisionEngine, PerfStats};

/// JS-facing collision world: the scene mirror plus the engine.
///
/// The host pushes entity state in, calls `step()` once per frame and
/// `key_down()` per key press, then reads players back and drains events.
#[wasm_bindgen]
pub struct CollisionWorld {
    scene: Scene,
    engine: CollisionEngine,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayerView {
    num: u32,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    vx: f32,
    vy: f32,
    on_ground: bool,
    displacement: Vec2,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        PlayerView {
            num: p.num,
            x: p.rect.x,
            y: p.rect.y,
            w: p.rect.w,
            h: p.rect.h,
            vx: p.velocity.x,
            vy: p.velocity.y,
            on_ground: p.on_ground,
            displacement: p.displacement,
        }
    }
}

#[wasm_bindgen]
impl CollisionWorld {
    /// Create an empty world for a scene of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scene: Scene::new(width, height),
            engine: CollisionEngine::default(),
        }
    }

    /// Replace the whole scene from a JSON snapshot
    pub fn load_scene_json(&mut self, json: &str) -> Result<(), String> {
        self.scene = Scene::from_json(json)?;
        Ok(())
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = CollisionConfig::from_json(json)?;
        self.engine.set_config(config);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.engine.frame() }

    #[wasm_bindgen(getter)]
    pub fn player_count(&self) -> usize { self.scene.players.len() }

    // === ENTITY BUILDERS ===

    /// Returns false if a player with that number already exists
    pub fn add_player(&mut self, num: u32, x: f32, y: f32, w: f32, h: f32) -> bool {
        if self.scene.player(num).is_some() {
            return false;
        }
        self.scene.players.push(Player::new(num, Rect::new(x, y, w, h)));
        true
    }

    pub fn add_wall(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.scene.walls.push(Block::new(x, y, w, h));
    }

    pub fn add_static_platform(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.scene.s_platforms.push(Block::new(x, y, w, h));
    }

    pub fn add_directional_platform(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.scene.d_platforms.push(Block::new(x, y, w, h));
    }

    /// Returns the platform's index
    pub fn add_moving_platform(&mut self, x: f32, y: f32, w: f32, h: f32, dx: f32, dy: f32) -> usize {
        self.scene.m_platforms.push(MovingPlatform::new(Rect::new(x, y, w, h), dx, dy));
        self.scene.m_platforms.len() - 1
    }

    /// Returns the switch's index (as used in `switchOff` events)
    pub fn add_switch(&mut self, x: f32, y: f32, w: f32, h: f32, on: bool) -> usize {
        self.scene.switches.push(Switch::new(Rect::new(x, y, w, h), on));
        self.scene.switches.len() - 1
    }

    pub fn add_door(&mut self, x: f32, y: f32, w: f32, h: f32, closed: bool) -> usize {
        self.scene.doors.push(Door::new(Rect::new(x, y, w, h), closed));
        self.scene.doors.len() - 1
    }

    pub fn add_spike(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.scene.spikes.push(Block::new(x, y, w, h));
    }

    pub fn add_boss(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.scene.bosses.push(Block::new(x, y, w, h));
    }

    // === PER-FRAME STATE ===

    pub fn bind_key(&mut self, num: u32, action: &str, key: u32) -> Result<(), String> {
        let action = Action::from_name(action).ok_or_else(|| format!("unknown action '{}'", action))?;
        let player = self
            .scene
            .player_mut(num)
            .ok_or_else(|| format!("no player {}", num))?;
        player.keybinds.bind(action, key);
        Ok(())
    }

    /// Push the integrator's latest position and velocity for a player
    pub fn set_player_motion(&mut self, num: u32, x: f32, y: f32, vx: f32, vy: f32) -> bool {
        let Some(player) = self.scene.player_mut(num) else {
            return false;
        };
        player.rect.x = x;
        player.rect.y = y;
        player.velocity = Vec2::new(vx, vy);
        player.on_ground = false;
        true
    }

    pub fn set_moving_platform(&mut self, idx: usize, x: f32, y: f32, dx: f32, dy: f32) -> bool {
        let Some(m) = self.scene.m_platforms.get_mut(idx) else {
            return false;
        };
        m.rect.x = x;
        m.rect.y = y;
        m.dx = dx;
        m.dy = dy;
        true
    }

    pub fn set_door_closed(&mut self, idx: usize, closed: bool) -> bool {
        let Some(door) = self.scene.doors.get_mut(idx) else {
            return false;
        };
        door.closed = closed;
        true
    }

    pub fn is_switch_on(&self, idx: usize) -> bool {
        self.scene.switches.get(idx).map(|s| s.on).unwrap_or(false)
    }

    // === RESOLUTION ===

    /// Run one collision tick
    pub fn step(&mut self) {
        self.engine.update(&mut self.scene);
    }

    pub fn key_down(&mut self, key: u32) {
        self.engine.key_down(&mut self.scene, key);
    }

    // === READBACK ===

    pub fn players_json(&self) -> String {
        let views: Vec<PlayerView> = self.scene.players.iter().map(PlayerView::from).collect();
        serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string())
    }

    /// Drain queued events as a JSON array
    pub fn drain_events_json(&mut self) -> String {
        let events = self.engine.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Hand platform displacement to the integrator: `[{num, x, y}]`,
    /// accumulators reset to zero.
    pub fn take_displacements_json(&mut self) -> String {
        #[derive(Serialize)]
        struct Taken {
            num: u32,
            x: f32,
            y: f32,
        }
        let taken: Vec<Taken> = self
            .scene
            .players
            .iter_mut()
            .map(|p| {
                let d = p.take_displacement();
                Taken { num: p.num, x: d.x, y: d.y }
            })
            .collect();
        serde_json::to_string(&taken).unwrap_or_else(|_| "[]".to_string())
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.engine.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.engine.perf_stats()
    }
}

impl CollisionWorld {
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn engine(&self) -> &CollisionEngine {
        &self.engine
    }
}
