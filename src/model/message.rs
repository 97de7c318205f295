use serde::{Deserialize, Serialize};

/// Severity of a player-facing message, least to most alarming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSeverity {
    Neutral,
    Caution,
    ThreatSmall,
    ThreatBig,
}

/// One-shot sounds the alert readout can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    /// Short bell played when a high-priority alert starts.
    TinyBell,
}

impl SoundCue {
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundCue::TinyBell => "tiny_bell",
        }
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
