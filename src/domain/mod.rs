//! Domain - scene entities, configuration and outbound events

pub mod config;
pub mod entity;
pub mod events;
pub mod keys;
pub mod scene;

pub use config::{CollisionConfig, CollisionPass, PASS_ORDER};
pub use entity::{Block, Body, Carrier, Collider, Door, Gate, MovingPlatform, Player, Switch, Toggle};
pub use events::FrameEvent;
pub use keys::{Action, KeyBindings};
pub use scene::Scene;
