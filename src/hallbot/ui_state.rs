use chrono::{DateTime, Local};
use hallbot_model::transcript::Turn;
use hallbot_model::Speaker;
use serde::Serialize;

use super::config::{Config, Preset};
use super::markup;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTurn {
    pub speaker: Speaker,
    pub content: String,
    pub html: String,
    pub timestamp: DateTime<Local>,
    pub time_label: String,
}

impl From<&Turn> for UiTurn {
    fn from(turn: &Turn) -> Self {
        UiTurn {
            speaker: turn.speaker,
            content: turn.content.clone(),
            html: markup::render_html(&turn.content),
            timestamp: turn.timestamp,
            time_label: turn.timestamp.format("%H:%M:%S").to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub assistant_name: String,

    pub turns: Vec<UiTurn>,

    /// True while a reply timer is running; the frontend shows the typing
    /// indicator and the backend ignores further submissions.
    pub reply_pending: bool,

    pub presets: Vec<Preset>,

    pub max_message_len: usize,
    pub counter_warn_at: usize,
}

impl UiState {
    pub fn new(config: &Config, turns: &[Turn], reply_pending: bool) -> Self {
        UiState {
            assistant_name: config.assistant_name.clone(),
            turns: turns.iter().map(UiTurn::from).collect(),
            reply_pending,
            presets: config.presets.clone(),
            max_message_len: config.max_message_len,
            counter_warn_at: config.counter_warn_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_turn_carries_raw_content_next_to_rendered_html() {
        let turn = Turn::user("**bold** and *italic* and https://example.com");
        let ui_turn = UiTurn::from(&turn);
        assert_eq!(ui_turn.content, "**bold** and *italic* and https://example.com");
        assert!(ui_turn.html.contains("<strong>bold</strong>"));
        assert!(ui_turn.html.contains("<em>italic</em>"));
        assert!(ui_turn.html.contains("<a href=\"https://example.com\""));
        assert_eq!(ui_turn.time_label, turn.timestamp.format("%H:%M:%S").to_string());
    }
}
