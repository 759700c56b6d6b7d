use serde::Serialize;

/// Outbound notifications produced while resolving a frame or a key press.
///
/// The scene drains these after each call; the engine never learns what
/// the scene does with them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FrameEvent {
    /// A player touched a hazard or fell out of the level
    PlayerDied { player: u32 },
    /// Every door is open and a player confirmed on one of them
    LevelComplete,
    /// Index into the scene's switch list
    SwitchOff { switch: usize },
    /// One-shot sound effect for the audio collaborator
    PlaySound { name: String, resource: String },
}

impl FrameEvent {
    pub fn is_death_of(&self, num: u32) -> bool {
        matches!(self, FrameEvent::PlayerDied { player } if *player == num)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&FrameEvent::PlayerDied { player: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"playerDied","player":2}"#);
        let json = serde_json::to_string(&FrameEvent::LevelComplete).unwrap();
        assert_eq!(json, r#"{"type":"levelComplete"}"#);
    }
}
