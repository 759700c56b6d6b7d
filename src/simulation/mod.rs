//! CollisionEngine - per-frame and per-keypress collision orchestration
//!
//! The engine holds no entities. Every call borrows the scene, runs the
//! resolvers in their fixed order, and queues `FrameEvent`s for the host
//! to drain:
//! - `update`: once per tick, every pass in `PASS_ORDER`, then audio
//! - `key_down`: on discrete key presses (door confirm, coop explosion)
//!
//! Nothing here can fail. Anomalies (missing players, unclassifiable
//! overlaps) degrade to "do nothing this tick".
//!
//! The host is expected to drain events every frame. Conditions such as a
//! player outside the boundary re-fire each tick, so an undrained queue is
//! capped at `MAX_QUEUED_EVENTS`, dropping the oldest entries.

use crate::domain::{CollisionConfig, CollisionPass, FrameEvent, Scene};
use crate::systems::audio::AudioChannel;

#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/tick.rs"]
mod tick;
#[path = "input/input.rs"]
mod input;
#[path = "init/settings.rs"]
mod settings;

pub use perf_stats::PerfStats;

/// Upper bound on undrained events
pub const MAX_QUEUED_EVENTS: usize = 1024;

pub struct CollisionEngine {
    config: CollisionConfig,
    audio: AudioChannel,
    events: Vec<FrameEvent>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl CollisionEngine {
    pub fn new(config: CollisionConfig) -> Self {
        settings::create_engine(config)
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replace the settings; the explosion sound is re-registered.
    pub fn set_config(&mut self, config: CollisionConfig) {
        settings::set_config(self, config);
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn audio(&self) -> &AudioChannel { &self.audio }

    /// Enable or disable per-tick perf metrics
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Run one simulation tick over the scene.
    pub fn update(&mut self, scene: &mut Scene) {
        tick::update(self, scene);
    }

    /// Run a single category pass. `update` runs all of them in order.
    pub fn run_pass(&mut self, scene: &mut Scene, pass: CollisionPass) -> usize {
        tick::run_pass(self, scene, pass)
    }

    /// Handle a key press from the host's input layer.
    pub fn key_down(&mut self, scene: &mut Scene, key: u32) {
        input::key_down(self, scene, key);
    }

    /// Events queued so far, without draining them
    pub fn events(&self) -> &[FrameEvent] {
        &self.events
    }

    /// Hand all queued events to the caller. Call once per frame.
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for CollisionEngine {
    fn default() -> Self {
        Self::new(CollisionConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
