use serde_json::Value;
use tandem_engine::{CollisionWorld, FrameEvent, Scene};

const LEVEL: &str = r#"{
    "width": 640, "height": 480,
    "players": [
        {"num": 1, "x": 100, "y": 372, "w": 20, "h": 30, "vy": 4, "keybinds": {"coopJump": 87}},
        {"num": 2, "x": 110, "y": 372, "w": 20, "h": 30, "keybinds": {"coopJump": 38}}
    ],
    "walls": [{"x": 0, "y": 400, "w": 640, "h": 40}],
    "directionalPlatforms": [{"x": 300, "y": 300, "w": 80, "h": 10}],
    "movingPlatforms": [{"x": 500, "y": 350, "w": 60, "h": 10, "dx": -1, "dy": 0}],
    "switches": [{"x": 200, "y": 380, "w": 10, "h": 20}],
    "doors": [{"x": 600, "y": 340, "w": 30, "h": 60, "closed": true}],
    "spikes": [{"x": 400, "y": 390, "w": 40, "h": 10}]
}"#;

fn players(world: &CollisionWorld) -> Vec<Value> {
    serde_json::from_str::<Vec<Value>>(&world.players_json()).unwrap()
}

#[test]
fn snapshot_round_trip_through_the_facade() {
    let mut world = CollisionWorld::new(1.0, 1.0);
    world.load_scene_json(LEVEL).unwrap();
    assert_eq!(world.player_count(), 2);

    world.step();

    let ps = players(&world);
    assert_eq!(ps[0]["num"], 1);
    assert_eq!(ps[0]["y"].as_f64(), Some(370.0));
    assert_eq!(ps[0]["vy"].as_f64(), Some(0.0));
    assert_eq!(ps[0]["onGround"], true);
    assert_eq!(world.drain_events_json(), "[]");
}

#[test]
fn bad_snapshot_is_reported_not_panicked() {
    let mut world = CollisionWorld::new(640.0, 480.0);
    assert!(world.load_scene_json("{\"width\": 640}").is_err());
    assert!(world.load_config_json("{\"explosionSpeed\": -3}").is_err());
    assert!(world.bind_key(9, "coopJump", 1).is_err());
    assert!(world.bind_key(9, "fly", 1).is_err());
}

#[test]
fn coop_jump_then_sound_event() {
    let mut world = CollisionWorld::new(640.0, 480.0);
    world.load_scene_json(LEVEL).unwrap();
    world.step();
    world.drain_events_json();

    world.key_down(38);
    let ps = players(&world);
    assert_eq!(ps[0]["vx"].as_f64(), Some(-30.0));
    assert_eq!(ps[1]["vx"].as_f64(), Some(30.0));
    assert_eq!(ps[0]["vy"].as_f64(), Some(-30.0));

    world.step();
    let events: Vec<Value> = serde_json::from_str(&world.drain_events_json()).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["type"], "playSound");
    assert_eq!(events[0]["resource"], "cat_coop_jump");
}

#[test]
fn doors_gate_completion_until_opened() {
    let mut world = CollisionWorld::new(640.0, 480.0);
    world.load_scene_json(LEVEL).unwrap();
    world.set_player_motion(1, 605.0, 360.0, 0.0, 0.0);

    world.key_down(13);
    assert_eq!(world.drain_events_json(), "[]");

    assert!(world.set_door_closed(0, false));
    world.key_down(13);
    assert_eq!(world.drain_events_json(), r#"[{"type":"levelComplete"}]"#);
}

#[test]
fn switch_spike_and_platform_through_the_facade() {
    let mut world = CollisionWorld::new(640.0, 480.0);
    world.load_scene_json(LEVEL).unwrap();

    // Walk across the switch.
    world.set_player_motion(1, 195.0, 370.0, 2.0, 0.0);
    // Stand on the moving platform.
    world.set_player_motion(2, 520.0, 322.0, 0.0, 1.0);
    world.step();
    assert!(!world.is_switch_on(0));

    let taken: Vec<Value> = serde_json::from_str(&world.take_displacements_json()).unwrap();
    assert_eq!(taken[1]["x"].as_f64(), Some(-1.0));
    assert_eq!(taken[0]["x"].as_f64(), Some(0.0));

    world.drain_events_json();
    world.set_player_motion(2, 405.0, 365.0, 0.0, 0.0);
    world.step();
    let scene = world.scene();
    assert_eq!(scene.switches.len(), 1);
    assert!(world
        .engine()
        .events()
        .iter()
        .any(|e| *e == FrameEvent::PlayerDied { player: 2 }));
}

#[test]
fn scene_parses_without_the_facade() {
    let scene = Scene::from_json(LEVEL).unwrap();
    assert_eq!(scene.d_platforms.len(), 1);
    assert_eq!(scene.closed_door_count(), 1);
}
