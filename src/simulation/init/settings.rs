use crate::domain::config::EXPLOSION_SOUND;
use crate::domain::CollisionConfig;
use crate::systems::audio::AudioChannel;

use super::perf_stats::PerfStats;
use super::CollisionEngine;

pub(super) fn create_engine(config: CollisionConfig) -> CollisionEngine {
    let mut audio = AudioChannel::new();
    audio.add(EXPLOSION_SOUND, &config.explosion_sound);

    CollisionEngine {
        config,
        audio,
        events: Vec::with_capacity(16),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn set_config(engine: &mut CollisionEngine, config: CollisionConfig) {
    engine.audio.add(EXPLOSION_SOUND, &config.explosion_sound);
    engine.config = config;
}

pub(super) fn enable_perf_metrics(engine: &mut CollisionEngine, enabled: bool) {
    engine.perf_enabled = enabled;
    if !enabled {
        engine.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(engine: &CollisionEngine) -> PerfStats {
    engine.perf_stats.clone()
}
