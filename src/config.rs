// mesa/src/config.rs
// Game tuning knobs. Defaults match the published rules; a conf file can
// override them for house-rule sessions. Game state itself is never
// persisted.

use crate::claim::ClaimLabel;
use crate::defs::{
    MAX_RESEED_FILL, MIN_FILLED_SPOTS, MIN_RESEED_FILL, POINTS_NOT_OCCURRED, POINTS_OCCURRED,
    POINTS_ORDERED,
};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub min_filled_spots: usize,
    pub reseed_fill_min: usize,
    pub reseed_fill_max: usize,
    pub points_ordered: i32,
    pub points_occurred: i32,
    pub points_not_occurred: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_filled_spots: MIN_FILLED_SPOTS,
            reseed_fill_min: MIN_RESEED_FILL,
            reseed_fill_max: MAX_RESEED_FILL,
            points_ordered: POINTS_ORDERED,
            points_occurred: POINTS_OCCURRED,
            points_not_occurred: POINTS_NOT_OCCURRED,
        }
    }
}

impl GameConfig {
    /// Base points wagered on a claim type under this configuration.
    pub fn points_for(&self, claim_label: ClaimLabel) -> i32 {
        match claim_label {
            ClaimLabel::OccurredInOrder => self.points_ordered,
            ClaimLabel::Occurred => self.points_occurred,
            ClaimLabel::DidNotOccur => self.points_not_occurred,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config_map = parse_config(&content)?;
        let defaults = Self::default();

        let min_filled_spots = config_map
            .get("min_filled_spots")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.min_filled_spots);

        let reseed_fill_min = config_map
            .get("reseed_fill_min")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.reseed_fill_min);

        let reseed_fill_max = config_map
            .get("reseed_fill_max")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(defaults.reseed_fill_max);

        let points_ordered = config_map
            .get("points_ordered")
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(defaults.points_ordered);

        let points_occurred = config_map
            .get("points_occurred")
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(defaults.points_occurred);

        let points_not_occurred = config_map
            .get("points_not_occurred")
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(defaults.points_not_occurred);

        Ok(GameConfig {
            min_filled_spots,
            reseed_fill_min,
            reseed_fill_max,
            points_ordered,
            points_occurred,
            points_not_occurred,
        })
    }

    pub fn load_or_default() -> Self {
        let config_path = "conf/game.conf";

        match Self::from_file(config_path) {
            Ok(config) => {
                println!("📄 Loaded game configuration from {}", config_path);
                config
            }
            Err(e) => {
                println!(
                    "⚠️  Could not load game config from {}: {}. Using defaults.",
                    config_path, e
                );
                Self::default()
            }
        }
    }
}

fn parse_config(content: &str) -> Result<HashMap<String, String>, Box<dyn std::error::Error>> {
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Parse key = value pairs
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            let value = value.trim().to_string();
            config.insert(key, value);
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let content = r#"
            # House rules
            points_ordered = 50
            min_filled_spots = 5
            # Another comment
            points_occurred = 15
        "#;

        let config = parse_config(content).unwrap();
        assert_eq!(config.get("points_ordered"), Some(&"50".to_string()));
        assert_eq!(config.get("min_filled_spots"), Some(&"5".to_string()));
        assert_eq!(config.get("points_occurred"), Some(&"15".to_string()));
    }

    #[test]
    fn test_game_config_default() {
        let config = GameConfig::default();
        assert_eq!(config.min_filled_spots, 4);
        assert_eq!(config.reseed_fill_min, 4);
        assert_eq!(config.reseed_fill_max, 6);
        assert_eq!(config.points_ordered, 30);
        assert_eq!(config.points_occurred, 10);
        assert_eq!(config.points_not_occurred, 20);
    }

    #[test]
    fn test_points_for_claim_type() {
        let config = GameConfig::default();
        assert_eq!(config.points_for(ClaimLabel::OccurredInOrder), 30);
        assert_eq!(config.points_for(ClaimLabel::Occurred), 10);
        assert_eq!(config.points_for(ClaimLabel::DidNotOccur), 20);
    }
}
