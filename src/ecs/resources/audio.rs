use bevy_ecs::resource::Resource;

use crate::model::SoundCue;

/// One-shot sounds requested this session, in order. The audio backend
/// drains it.
#[derive(Resource, Debug, Clone, Default)]
pub struct SoundQueue {
    pub played: Vec<(u64, SoundCue)>,
}

impl SoundQueue {
    pub fn play(&mut self, frame: u64, cue: SoundCue) {
        self.played.push((frame, cue));
    }

    pub fn drain(&mut self) -> impl Iterator<Item = (u64, SoundCue)> + '_ {
        self.played.drain(..)
    }
}
