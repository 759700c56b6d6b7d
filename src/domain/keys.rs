use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Player actions a key can be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Left,
    Right,
    Jump,
    CoopJump,
}

impl Action {
    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "jump" => Some(Action::Jump),
            "coopJump" | "coop_jump" => Some(Action::CoopJump),
            _ => None,
        }
    }
}

/// Per-player action -> key code map
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    keys: HashMap<Action, u32>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, action: Action, key: u32) {
        self.keys.insert(action, key);
    }

    pub fn key(&self, action: Action) -> Option<u32> {
        self.keys.get(&action).copied()
    }

    pub fn is_bound(&self, action: Action, key: u32) -> bool {
        self.key(action) == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_parse_from_camel_case_json() {
        let kb: KeyBindings = serde_json::from_str(r#"{"coopJump": 87, "left": 65}"#).unwrap();
        assert!(kb.is_bound(Action::CoopJump, 87));
        assert_eq!(kb.key(Action::Left), Some(65));
        assert_eq!(kb.key(Action::Jump), None);
    }

    #[test]
    fn action_names_accept_both_spellings() {
        assert_eq!(Action::from_name("coop_jump"), Some(Action::CoopJump));
        assert_eq!(Action::from_name("coopJump"), Some(Action::CoopJump));
        assert_eq!(Action::from_name("dash"), None);
    }
}
