use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use topup_config::Config;

/// Load the default config shipped in the repo
fn load_repo_default_config() -> anyhow::Result<Config> {
    tracing::info!("loading repo default config");
    let file = File::open("config.json")?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

fn topup_root() -> anyhow::Result<PathBuf> {
    let base = dirs::config_dir().context("no config directory on this platform")?;
    Ok(base.join("topup"))
}

fn profiles_dir() -> anyhow::Result<PathBuf> {
    Ok(topup_root()?.join("profiles"))
}

/// Represents a deployment profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    let dir = profiles_dir()?;
    fs::create_dir_all(&dir)?;

    let main_profile = dir.join("main.json");

    if !main_profile.exists() {
        // Use repo default as the initial main profile
        let default_config = load_repo_default_config().unwrap_or_else(|_| Config::new());
        let profile = Profile {
            name: "main".into(),
            value: default_config,
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("created main profile");
    }

    Ok(())
}

/// Load a deployment profile by name, falling back to main, then the repo
/// default, then built-in defaults
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let dir = profiles_dir()?;
    let profile_file = dir.join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("profile {name} not found, falling back to main profile or repo default");
        let main_file = dir.join("main.json");
        if main_file.exists() {
            let data = fs::read_to_string(main_file)?;
            let profile: Profile = serde_json::from_str(&data)?;
            Ok(profile.value)
        } else {
            load_repo_default_config().or_else(|_| Ok(Config::new()))
        }
    }
}
