use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;
use serde::Serialize;

use crate::model::MessageSeverity;

/// One message shown to the player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggedMessage {
    pub id: u64,
    pub frame: u64,
    pub real_seconds: f64,
    pub alert: String,
    pub severity: MessageSeverity,
    pub text: String,
    /// Entity bits of the look targets attached to the message.
    pub targets: Vec<u64>,
}

/// Accumulates player-facing messages between flushes.
#[derive(Resource, Debug, Clone, Default)]
pub struct MessageLog {
    pub messages: Vec<LoggedMessage>,
    next_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        frame: u64,
        real_seconds: f64,
        alert: &str,
        severity: MessageSeverity,
        text: String,
        targets: &[Entity],
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(LoggedMessage {
            id,
            frame,
            real_seconds,
            alert: alert.to_string(),
            severity,
            text,
            targets: targets.iter().map(|e| e.to_bits()).collect(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop flushed messages. Ids keep counting up.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
