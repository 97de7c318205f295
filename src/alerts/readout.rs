use serde::Serialize;

use crate::model::{AlertPriority, BgColor};

pub const BANNER_WIDTH: f32 = 154.0;
pub const BANNER_HEIGHT: f32 = 28.0;

/// Axis-aligned screen rectangle, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Screen area the readout is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

/// One active alert as the readout should draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertBanner {
    pub key: &'static str,
    pub label: String,
    pub priority: AlertPriority,
    #[serde(skip)]
    pub bg_color: BgColor,
    pub rect: Rect,
}

/// Input to [`layout_banners`], one per active alert in registration order.
#[derive(Debug, Clone)]
pub struct BannerEntry {
    pub key: &'static str,
    pub label: String,
    pub priority: AlertPriority,
    pub bg_color: BgColor,
    pub bounce_offset: f32,
}

/// Sort entries most urgent first and stack them upward from the bottom
/// right corner of the screen. Equal priorities keep registration order.
pub fn layout_banners(mut entries: Vec<BannerEntry>, screen: ScreenSize) -> Vec<AlertBanner> {
    // Stable sort, so ties keep registration order.
    entries.sort_by(|a, b| b.priority.cmp(&a.priority));

    let top = screen.height - entries.len() as f32 * BANNER_HEIGHT;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| AlertBanner {
            key: entry.key,
            label: entry.label,
            priority: entry.priority,
            bg_color: entry.bg_color,
            rect: Rect {
                x: screen.width - BANNER_WIDTH - entry.bounce_offset,
                y: top + i as f32 * BANNER_HEIGHT,
                width: BANNER_WIDTH,
                height: BANNER_HEIGHT,
            },
        })
        .collect()
}
