//! Browser-side checks, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use tandem_engine::CollisionWorld;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_and_step_in_browser() {
    tandem_engine::init();
    let mut world = CollisionWorld::new(320.0, 240.0);
    world.add_player(1, 10.0, 190.0, 20.0, 30.0);
    world.add_wall(0.0, 200.0, 320.0, 40.0);
    world.enable_perf_metrics(true);
    world.step();
    assert_eq!(world.get_perf_stats().contacts_resolved(), 1);
    assert!(world.players_json().contains("\"onGround\":true"));
}
