//! AudioChannel - one-shot sound cues as events
//!
//! The engine never touches audio playback. Code paths that want a sound
//! set `state`; `update()` runs once per tick and turns that into a single
//! `PlaySound` event for the audio collaborator, then clears it.

use std::collections::HashMap;

use crate::domain::FrameEvent;

#[derive(Clone, Debug, Default)]
pub struct AudioChannel {
    /// effect name -> sample resource key
    effects: HashMap<String, String>,
    /// Pending effect, fired on the next `update()`
    pub state: Option<String>,
}

impl AudioChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, resource: &str) {
        self.effects.insert(name.to_string(), resource.to_string());
    }

    /// Sample resource registered for `name`
    pub fn resource(&self, name: &str) -> Option<&str> {
        self.effects.get(name).map(String::as_str)
    }

    pub fn play(&mut self, name: &str) {
        self.state = Some(name.to_string());
    }

    /// Emit the pending cue, if any. Returns true when a sound was queued.
    pub fn update(&mut self, events: &mut Vec<FrameEvent>) -> bool {
        let Some(name) = self.state.take() else {
            return false;
        };
        match self.effects.get(&name) {
            Some(resource) => {
                events.push(FrameEvent::PlaySound {
                    name,
                    resource: resource.clone(),
                });
                true
            }
            None => {
                log::warn!("no sound registered for '{}', dropped", name);
                false
            }
        }
    }
}
