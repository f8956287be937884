use serde::{Deserialize, Serialize};
use tracing::error;

const ROSTER: &str = include_str!("../../data/speakers.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Speaker {
    pub id: u32,
    pub name: String,
    pub role: String,
    /// Card accent colour, as a CSS hex string
    pub color: String,
    pub image: String,
}

/// Speakers bundled with the site, in display order
pub fn load_speakers() -> Vec<Speaker> {
    serde_json::from_str(ROSTER).unwrap_or_else(|err| {
        error!("Bundled speaker roster is invalid: {:?}", err);
        Vec::new()
    })
}
