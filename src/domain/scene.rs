//! Scene - the entity collections the engine resolves against
//!
//! The host owns the real scene graph; this container mirrors the parts
//! collision cares about, either built entity by entity or loaded from a
//! JSON snapshot.

use serde::Deserialize;

use crate::core::geometry::{Rect, Vec2};

use super::entity::{Block, Door, MovingPlatform, Player, Switch};
use super::keys::KeyBindings;

#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Scene bounds; the world boundary is derived from this
    pub rect: Rect,
    pub players: Vec<Player>,
    pub walls: Vec<Block>,
    pub s_platforms: Vec<Block>,
    pub d_platforms: Vec<Block>,
    pub m_platforms: Vec<MovingPlatform>,
    pub switches: Vec<Switch>,
    pub doors: Vec<Door>,
    pub spikes: Vec<Block>,
    pub bosses: Vec<Block>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, width, height),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let snapshot: SceneSnapshot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        snapshot.into_scene()
    }

    pub fn player(&self, num: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.num == num)
    }

    pub fn player_mut(&mut self, num: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.num == num)
    }

    pub fn closed_door_count(&self) -> usize {
        self.doors.iter().filter(|d| d.closed).count()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SceneSnapshot {
    width: f32,
    height: f32,
    #[serde(default)]
    players: Vec<PlayerSnapshot>,
    #[serde(default)]
    walls: Vec<Rect>,
    #[serde(default)]
    static_platforms: Vec<Rect>,
    #[serde(default)]
    directional_platforms: Vec<Rect>,
    #[serde(default)]
    moving_platforms: Vec<MovingPlatformSnapshot>,
    #[serde(default)]
    switches: Vec<SwitchSnapshot>,
    #[serde(default)]
    doors: Vec<DoorSnapshot>,
    #[serde(default)]
    spikes: Vec<Rect>,
    #[serde(default)]
    bosses: Vec<Rect>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerSnapshot {
    num: u32,
    #[serde(flatten)]
    rect: Rect,
    #[serde(default)]
    vx: f32,
    #[serde(default)]
    vy: f32,
    #[serde(default)]
    keybinds: KeyBindings,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovingPlatformSnapshot {
    #[serde(flatten)]
    rect: Rect,
    #[serde(default)]
    dx: f32,
    #[serde(default)]
    dy: f32,
}

#[derive(Deserialize)]
struct SwitchSnapshot {
    #[serde(flatten)]
    rect: Rect,
    #[serde(default = "default_true")]
    on: bool,
}

#[derive(Deserialize)]
struct DoorSnapshot {
    #[serde(flatten)]
    rect: Rect,
    #[serde(default = "default_true")]
    closed: bool,
}

fn default_true() -> bool {
    true
}

fn blocks(rects: Vec<Rect>) -> Vec<Block> {
    rects.into_iter().map(|rect| Block { rect }).collect()
}

impl SceneSnapshot {
    fn into_scene(self) -> Result<Scene, String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!("scene size must be positive (got {}x{})", self.width, self.height));
        }
        let mut seen = Vec::with_capacity(self.players.len());
        for p in &self.players {
            if seen.contains(&p.num) {
                return Err(format!("duplicate player num {}", p.num));
            }
            seen.push(p.num);
        }

        Ok(Scene {
            rect: Rect::new(0.0, 0.0, self.width, self.height),
            players: self
                .players
                .into_iter()
                .map(|p| Player {
                    num: p.num,
                    rect: p.rect,
                    velocity: Vec2::new(p.vx, p.vy),
                    on_ground: false,
                    displacement: Vec2::zero(),
                    keybinds: p.keybinds,
                })
                .collect(),
            walls: blocks(self.walls),
            s_platforms: blocks(self.static_platforms),
            d_platforms: blocks(self.directional_platforms),
            m_platforms: self
                .moving_platforms
                .into_iter()
                .map(|m| MovingPlatform::new(m.rect, m.dx, m.dy))
                .collect(),
            switches: self.switches.into_iter().map(|s| Switch::new(s.rect, s.on)).collect(),
            doors: self.doors.into_iter().map(|d| Door::new(d.rect, d.closed)).collect(),
            spikes: blocks(self.spikes),
            bosses: blocks(self.bosses),
        })
    }
}
