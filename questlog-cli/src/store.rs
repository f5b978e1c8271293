//! Snapshot and profile persistence under `~/.questlog/`.

use anyhow::{Context, Result};
use questlog_core::AppState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub fn questlog_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".questlog"))
}

pub fn ensure_questlog_home() -> Result<PathBuf> {
    let dir = questlog_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub created_at_utc: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            created_at_utc: None,
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_questlog_home()?.join("profile.json"))
}

pub fn state_path() -> Result<PathBuf> {
    Ok(ensure_questlog_home()?.join("state.json"))
}

pub fn read_profile() -> Result<Profile> {
    let p = profile_path()?;
    if !p.exists() {
        return Ok(Profile::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn write_profile(profile: &Profile) -> Result<()> {
    let p = profile_path()?;
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Load the snapshot, or start from the initial catalogs when none exists.
pub fn load_state() -> Result<AppState> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(AppState::new());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    serde_json::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

/// Overwrite the snapshot. Called after every mutating command.
pub fn save_state(state: &AppState) -> Result<()> {
    let p = state_path()?;
    let json = serde_json::to_string_pretty(state)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
