use std::path::PathBuf;

use hallbot_model::PresetId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// First transcript entry; survives the clear action.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,

    /// Quick-action buttons: fixed messages submitted on click.
    #[serde(default = "default_presets")]
    pub presets: Vec<Preset>,

    /// Bounds of the simulated typing delay before a reply lands.
    #[serde(default = "default_reply_delay_min_ms")]
    pub reply_delay_min_ms: u64,

    #[serde(default = "default_reply_delay_max_ms")]
    pub reply_delay_max_ms: u64,

    /// How long the frontend keeps a notice banner on screen.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,

    /// Soft input limit: the counter flags it, nothing is rejected.
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,

    #[serde(default = "default_counter_warn_at")]
    pub counter_warn_at: usize,

    #[serde(default = "default_static_serving_dir")]
    pub static_serving_dir: PathBuf,

    #[serde(default = "default_serving_addr")]
    pub serving_addr: String,
}

fn default_assistant_name() -> String {
    "Accommodation Assistant".into()
}

fn default_welcome_message() -> String {
    "Hello! I'm your University Accommodation Assistant. Ask me anything about halls, mess facilities, or hostel life.".into()
}

fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: PresetId::from("hall-furniture"),
            label: "Hall furniture".into(),
            message: "What furniture is provided in SUST halls?".into(),
        },
        Preset {
            id: PresetId::from("bill-split"),
            label: "Splitting bills".into(),
            message: "How do we split the electricity bill in our mess?".into(),
        },
        Preset {
            id: PresetId::from("hostel-shopping"),
            label: "Hostel shopping".into(),
            message: "What do I need to buy for a hostel room?".into(),
        },
    ]
}

fn default_reply_delay_min_ms() -> u64 {
    1000
}

fn default_reply_delay_max_ms() -> u64 {
    3000
}

fn default_notice_ttl_ms() -> u64 {
    3 * 1000
}

fn default_max_message_len() -> usize {
    500
}

fn default_counter_warn_at() -> usize {
    450
}

fn default_static_serving_dir() -> PathBuf {
    "ui/dist".into()
}

fn default_serving_addr() -> String {
    "0.0.0.0:3000".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            welcome_message: default_welcome_message(),
            presets: default_presets(),
            reply_delay_min_ms: default_reply_delay_min_ms(),
            reply_delay_max_ms: default_reply_delay_max_ms(),
            notice_ttl_ms: default_notice_ttl_ms(),
            max_message_len: default_max_message_len(),
            counter_warn_at: default_counter_warn_at(),
            static_serving_dir: default_static_serving_dir(),
            serving_addr: default_serving_addr(),
        }
    }
}

impl Config {
    pub fn preset(&self, id: &PresetId) -> Option<&Preset> {
        self.presets.iter().find(|p| &p.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: PresetId,
    pub label: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn deserialize_partial_config() -> Result<()> {
        let yaml = "assistantName: Warden Bot\nreplyDelayMinMs: 5\n";
        let config: Config = serde_yaml::from_str(yaml)?;
        assert_eq!(config.assistant_name, "Warden Bot");
        assert_eq!(config.reply_delay_min_ms, 5);
        assert_eq!(config.reply_delay_max_ms, default_reply_delay_max_ms());
        assert_eq!(config.serving_addr, default_serving_addr());
        Ok(())
    }

    #[test]
    fn preset_lookup() {
        let config = Config::default();
        let preset = config.preset(&PresetId::from("bill-split")).unwrap();
        assert!(preset.message.contains("electricity"));
        assert!(config.preset(&PresetId::from("no-such-preset")).is_none());
    }
}
