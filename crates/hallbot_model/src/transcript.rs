use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::Speaker;

/// One message exchanged in the chat, tagged with its speaker and time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl Turn {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Turn {
            speaker,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Turn::new(Speaker::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Turn::new(Speaker::Assistant, content)
    }
}

/// Append-only, insertion-ordered message log. Always starts with a welcome
/// turn; `clear` resets back to that turn alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn with_welcome(welcome_message: impl Into<String>) -> Self {
        Transcript {
            turns: vec![Turn::assistant(welcome_message)],
        }
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn clear(&mut self) {
        self.turns.truncate(1);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_welcome_turn() {
        let transcript = Transcript::with_welcome("Hello!");
        assert_eq!(transcript.turns().len(), 1);
        assert_eq!(transcript.turns()[0].speaker, Speaker::Assistant);
        assert_eq!(transcript.turns()[0].content, "Hello!");
    }

    #[test]
    fn push_appends_in_order() {
        let mut transcript = Transcript::with_welcome("Hello!");
        transcript.push(Turn::user("first"));
        transcript.push(Turn::assistant("second"));
        let contents: Vec<_> = transcript.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["Hello!", "first", "second"]);
    }

    #[test]
    fn clear_keeps_only_the_welcome_turn() {
        let mut transcript = Transcript::with_welcome("Hello!");
        let welcome = transcript.turns()[0].clone();
        transcript.push(Turn::user("anything"));
        transcript.push(Turn::assistant("a reply"));
        transcript.clear();
        assert_eq!(transcript.turns(), [welcome]);
    }
}
