use crate::model::{MessageSeverity, SoundCue, TargetRef};

/// Outward request produced by the alert core during a tick or a click.
///
/// The core never touches the audio, messaging, or camera collaborators
/// directly; it returns these and the ECS layer applies them.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertEffect {
    PlaySound(SoundCue),
    Message {
        alert: &'static str,
        severity: MessageSeverity,
        text: String,
        targets: Vec<TargetRef>,
    },
    JumpTo {
        alert: &'static str,
        target: TargetRef,
    },
}
