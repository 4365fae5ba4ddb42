use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;

use super::config::Config;

fn config_file_path() -> PathBuf {
    data_dir().join("config.yaml")
}

pub fn data_dir() -> PathBuf {
    let project_dirs = directories::ProjectDirs::from("com", "hallbot", "hallbot")
        .expect("Cannot retrieve project dirs");
    project_dirs.data_dir().to_owned()
}

pub fn load_config() -> Result<Config> {
    info!("Config file: {}", config_file_path().to_string_lossy());
    load_config_from(&config_file_path())
}

fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!("Config file does not exist, creating.");
        store_default_config(path)?;
    }
    let config_file = File::open(path)?;
    let config: Config = serde_yaml::from_reader(config_file)?;
    let preset_ids: String = config.presets.iter().map(|p| &p.id).join(", ");
    info!("Loaded {} presets: {preset_ids}", config.presets.len());
    Ok(config)
}

fn store_default_config(path: &Path) -> Result<()> {
    ensure_dir_created(path)?;
    let config_file = File::create(path)?;
    Ok(serde_yaml::to_writer(config_file, &Config::default())?)
}

fn ensure_dir_created(path: &Path) -> Result<()> {
    let dir = path.parent().expect("Parent directory");
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create {}", &dir.to_string_lossy()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn creates_default_config_when_missing() -> Result<()> {
        let dir = TempDir::new("hallbot-store")?;
        let path = dir.path().join("nested").join("config.yaml");
        let config = load_config_from(&path)?;
        assert_eq!(config, Config::default());
        assert!(path.is_file());
        Ok(())
    }

    #[test]
    fn fills_missing_fields_with_defaults() -> Result<()> {
        let dir = TempDir::new("hallbot-store")?;
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "assistantName: Warden Bot\n")?;
        let config = load_config_from(&path)?;
        assert_eq!(config.assistant_name, "Warden Bot");
        assert_eq!(config.serving_addr, Config::default().serving_addr);
        Ok(())
    }
}
