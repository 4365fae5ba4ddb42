use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod transcript;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Speaker::User => "You",
            Speaker::Assistant => "Assistant",
        })
    }
}

#[derive(Error, Debug)]
#[error("Invalid value: {0}")]
pub struct FromStrError(String);

impl TryFrom<&str> for Speaker {
    type Error = FromStrError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Speaker::User),
            "assistant" => Ok(Speaker::Assistant),
            other => Err(FromStrError(other.to_string())),
        }
    }
}

impl TryFrom<String> for Speaker {
    type Error = FromStrError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Speaker::try_from(value.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct PresetId(String);

impl PresetId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for PresetId {
    fn from(value: String) -> Self {
        PresetId(value)
    }
}

impl From<&str> for PresetId {
    fn from(value: &str) -> Self {
        PresetId(String::from(value))
    }
}

impl From<PresetId> for String {
    fn from(value: PresetId) -> Self {
        value.0
    }
}

impl Display for PresetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str_error() {
        assert_eq!(
            &Speaker::try_from("moderator").unwrap_err().to_string(),
            "Invalid value: moderator"
        );
    }

    #[test]
    fn speaker_round_trip() {
        assert!(matches!(Speaker::try_from("user"), Ok(Speaker::User)));
        assert!(matches!(
            Speaker::try_from("assistant"),
            Ok(Speaker::Assistant)
        ));
    }
}
