use bevy_ecs::message::Message;

use crate::alerts::ClickButton;

/// The player clicked the banner of the alert named `key`.
///
/// Written by the UI layer and consumed by `handle_alert_clicks` in
/// `SimPhase::PostUpdate`.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct AlertClick {
    pub key: String,
    pub button: ClickButton,
}

impl AlertClick {
    pub fn primary(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            button: ClickButton::Primary,
        }
    }

    pub fn secondary(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            button: ClickButton::Secondary,
        }
    }
}
