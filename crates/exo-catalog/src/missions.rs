//! Space mission timeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One entry of the mission timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub link: Option<String>,
}

pub fn load_missions(path: &Path) -> Result<Vec<Mission>> {
    let content = fs::read_to_string(path)?;
    let missions = parse_missions(&content)?;
    tracing::info!("loaded {} missions from {}", missions.len(), path.display());
    Ok(missions)
}

/// Parse a JSON array of missions, newest first. Missions from the same year
/// keep file order.
pub fn parse_missions(json: &str) -> Result<Vec<Mission>> {
    let mut missions: Vec<Mission> = serde_json::from_str(json)?;
    missions.sort_by(|a, b| b.year.cmp(&a.year));
    Ok(missions)
}
