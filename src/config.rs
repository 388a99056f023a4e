//! Configuration handling for the form

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_TOAST_DURATION_MS: u64 = 3500;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 900;

const DEFAULT_POSITIONS: [&str; 4] = [
    "Frontend Engineer",
    "Backend Engineer",
    "Product Designer",
    "Data Analyst",
];

const DEFAULT_PRESET_SKILLS: [&str; 5] = ["JavaScript", "TypeScript", "Rust", "SQL", "Figma"];

/// User configuration for the application form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// How long the confirmation toast stays up
    pub toast_duration_ms: Option<u64>,
    /// Simulated submission round-trip
    pub submit_delay_ms: Option<u64>,
    /// Openings offered in the position field
    pub positions: Option<Vec<String>>,
    /// Skills listed before the applicant adds any
    pub preset_skills: Option<Vec<String>>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "apply", "apply-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn positions(&self) -> Vec<String> {
        self.positions
            .clone()
            .unwrap_or_else(|| DEFAULT_POSITIONS.iter().map(|s| s.to_string()).collect())
    }

    pub fn preset_skills(&self) -> Vec<String> {
        self.preset_skills
            .clone()
            .unwrap_or_else(|| DEFAULT_PRESET_SKILLS.iter().map(|s| s.to_string()).collect())
    }
}
