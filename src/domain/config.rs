//! Collision settings and the per-tick pass order

use serde::{Deserialize, Serialize};

/// One category resolver in the per-tick pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionPass {
    Walls,
    Switches,
    StaticPlatforms,
    DirectionalPlatforms,
    MovingPlatforms,
    Spikes,
    Bosses,
    Boundary,
}

/// Fixed resolution order for every tick.
///
/// Later passes may overwrite corrections made by earlier ones. Moving
/// platforms must come after static solids so carried players are pushed
/// out before their displacement is added.
pub const PASS_ORDER: [CollisionPass; 8] = [
    CollisionPass::Walls,
    CollisionPass::Switches,
    CollisionPass::StaticPlatforms,
    CollisionPass::DirectionalPlatforms,
    CollisionPass::MovingPlatforms,
    CollisionPass::Spikes,
    CollisionPass::Bosses,
    CollisionPass::Boundary,
];

pub const DEFAULT_PLATFORM_TOLERANCE: f32 = 30.0;
pub const DEFAULT_BOUNDARY_MARGIN: f32 = 1000.0;
pub const DEFAULT_EXPLOSION_SPEED: f32 = 30.0;
/// Enter
pub const DEFAULT_CONFIRM_KEY: u32 = 13;
pub const EXPLOSION_SOUND: &str = "explosion";
pub const DEFAULT_EXPLOSION_RESOURCE: &str = "cat_coop_jump";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollisionConfig {
    /// Max gap between mover bottom and platform top for a
    /// pass-through platform to catch the mover
    pub platform_tolerance: f32,
    /// How far outside the scene rect a player may stray before dying
    pub boundary_margin: f32,
    /// Impulse magnitude of the cooperative explosion, on both axes
    pub explosion_speed: f32,
    pub confirm_key: u32,
    pub explosion_sound: String,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            platform_tolerance: DEFAULT_PLATFORM_TOLERANCE,
            boundary_margin: DEFAULT_BOUNDARY_MARGIN,
            explosion_speed: DEFAULT_EXPLOSION_SPEED,
            confirm_key: DEFAULT_CONFIRM_KEY,
            explosion_sound: DEFAULT_EXPLOSION_RESOURCE.to_string(),
        }
    }
}

impl CollisionConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: CollisionConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("platformTolerance", self.platform_tolerance),
            ("boundaryMargin", self.boundary_margin),
            ("explosionSpeed", self.explosion_speed),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a finite, non-negative number (got {})", name, value));
            }
        }
        if self.explosion_sound.is_empty() {
            return Err("explosionSound must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_order_puts_solids_before_hazards() {
        let pos = |p: CollisionPass| PASS_ORDER.iter().position(|&q| q == p).unwrap();
        assert_eq!(PASS_ORDER[0], CollisionPass::Walls);
        assert!(pos(CollisionPass::StaticPlatforms) < pos(CollisionPass::MovingPlatforms));
        assert!(pos(CollisionPass::MovingPlatforms) < pos(CollisionPass::Spikes));
        assert_eq!(PASS_ORDER[PASS_ORDER.len() - 1], CollisionPass::Boundary);
    }

    #[test]
    fn pass_order_is_exact() {
        use CollisionPass::*;
        assert_eq!(
            PASS_ORDER,
            [
                Walls,
                Switches,
                StaticPlatforms,
                DirectionalPlatforms,
                MovingPlatforms,
                Spikes,
                Bosses,
                Boundary,
            ]
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = CollisionConfig::from_json(r#"{"explosionSpeed": 12.5}"#).unwrap();
        assert_eq!(config.explosion_speed, 12.5);
        assert_eq!(config.platform_tolerance, DEFAULT_PLATFORM_TOLERANCE);
        assert_eq!(config.confirm_key, DEFAULT_CONFIRM_KEY);
    }

    #[test]
    fn negative_margin_is_rejected() {
        let err = CollisionConfig::from_json(r#"{"boundaryMargin": -1}"#).unwrap_err();
        assert!(err.contains("boundaryMargin"));
        assert!(CollisionConfig::from_json("not json").is_err());
    }
}
