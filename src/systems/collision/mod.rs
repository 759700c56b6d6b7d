//! Collision resolution for the platformer scene
//!
//! Layered leaves first:
//! - `direction`: angular-sector side classifier (pure geometry)
//! - `basic`: push a body out of solid obstacles
//! - `platforms`, `triggers`, `hazards`, `explosion`: per-category policy
//!
//! Everything here is generic over the `domain` traits, so the same code
//! runs against the scene container or any other entity representation.

mod basic;
mod direction;
mod explosion;
mod hazards;
mod platforms;
mod triggers;

pub use basic::resolve_basic;
pub use direction::{classify, classify_points, Side};
pub use explosion::resolve_explosion;
pub use hazards::{resolve_boundary, resolve_hazards};
pub use platforms::{resolve_directional, resolve_moving, resolve_solids};
pub use triggers::{resolve_doors, resolve_switches};
