//! Systems - collision resolution and the audio cue channel

pub mod audio;
pub mod collision;
