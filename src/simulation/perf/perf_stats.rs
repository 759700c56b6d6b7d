use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) frame: u64,
    pub(super) contacts_resolved: u32,
    pub(super) events_emitted: u32,
    pub(super) players: u32,
    pub(super) obstacles: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn events_emitted(&self) -> u32 { self.events_emitted }
    #[wasm_bindgen(getter)]
    pub fn players(&self) -> u32 { self.players }
    #[wasm_bindgen(getter)]
    pub fn obstacles(&self) -> u32 { self.obstacles }
}
