//! Configuration for the assistant.
//!
//! Loads settings from config.json at startup. Every field is optional; missing
//! fields take their defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::counting::betting::DEFAULT_TIERS;
use crate::counting::{BetPolicy, CountTracker};

/// Global configuration instance, initialized once at startup.
static CONFIG: OnceLock<AssistantConfig> = OnceLock::new();

/// Where recognized cards come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// OCR over region screenshots
    Tesseract,
    /// Recorded observations from `replay_path`
    Replay,
}

/// Complete assistant configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Decks in the shoe at the start (and after every New Shoe)
    pub initial_decks: f64,
    /// Lowest deck estimate used for the true count
    pub deck_floor: f64,
    /// Wagers for true counts <=0, 1, 2, 3, 4, >4
    pub bet_tiers: [u32; 6],
    /// Pause between observation cycles (milliseconds)
    pub cycle_interval_ms: u64,
    pub source: SourceKind,
    /// Observation file for `SourceKind::Replay`, relative to the executable
    pub replay_path: String,
    /// Player region screenshot, relative to the executable
    pub player_region_image: String,
    /// Dealer region screenshot, relative to the executable
    pub dealer_region_image: String,
    /// Explicit Tesseract executable; searched for when unset
    pub tesseract_path: Option<PathBuf>,
    /// OCR words below this confidence (0-100) are ignored
    pub min_confidence: f32,
    /// Log advice instead of opening the overlay
    pub headless: bool,
    /// Overlay window position in screen points
    pub overlay_position: [f32; 2],
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            initial_decks: 4.0,
            deck_floor: 0.25,
            bet_tiers: DEFAULT_TIERS,
            cycle_interval_ms: 1000,
            source: SourceKind::Tesseract,
            replay_path: "replay.json".to_string(),
            player_region_image: "frames/player.png".to_string(),
            dealer_region_image: "frames/dealer.png".to_string(),
            tesseract_path: None,
            min_confidence: 60.0,
            headless: false,
            overlay_position: [50.0, 50.0],
        }
    }
}

impl AssistantConfig {
    pub fn count_tracker(&self) -> CountTracker {
        CountTracker::new(self.initial_decks, self.deck_floor)
    }

    /// Bet policy from `bet_tiers`, or the default ramp if the tiers decrease.
    pub fn bet_policy(&self) -> BetPolicy {
        match BetPolicy::new(self.bet_tiers) {
            Ok(policy) => policy,
            Err(e) => {
                tracing::warn!("Invalid bet_tiers in config: {}. Using defaults.", e);
                BetPolicy::default()
            }
        }
    }

    pub fn player_region_path(&self) -> PathBuf {
        crate::paths::resolve(&self.player_region_image)
    }

    pub fn dealer_region_path(&self) -> PathBuf {
        crate::paths::resolve(&self.dealer_region_image)
    }

    pub fn replay_file_path(&self) -> PathBuf {
        crate::paths::resolve(&self.replay_path)
    }

    /// Replaces values that would break the count with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.deck_floor > 0.0 && self.deck_floor.is_finite()) {
            tracing::warn!(value = self.deck_floor, "deck_floor must be positive. Using default.");
            self.deck_floor = defaults.deck_floor;
        }
        if !(self.initial_decks >= self.deck_floor && self.initial_decks.is_finite()) {
            tracing::warn!(
                value = self.initial_decks,
                "initial_decks must be at least deck_floor. Using default."
            );
            self.initial_decks = defaults.initial_decks.max(self.deck_floor);
        }
        self
    }
}

/// Parses a configuration file's contents.
pub fn parse_config(contents: &str) -> serde_json::Result<AssistantConfig> {
    serde_json::from_str::<AssistantConfig>(contents).map(AssistantConfig::sanitized)
}

/// Loads configuration from `path` or returns defaults.
pub fn load_config(path: &Path) -> AssistantConfig {
    tracing::info!("Looking for config at: {}", path.display());

    if !path.exists() {
        tracing::info!("config.json not found. Using default config.");
        return AssistantConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => {
                tracing::info!("Config loaded from config.json");
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config.json: {}. Using defaults.", e);
                AssistantConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config.json: {}. Using defaults.", e);
            AssistantConfig::default()
        }
    }
}

/// Initializes the global configuration from config.json next to the
/// executable. Call once at startup.
pub fn init_config() {
    let _ = CONFIG.set(load_config(&crate::paths::get_config_path()));
}

/// Returns the global configuration, or defaults if init_config() was never
/// called.
pub fn get_config() -> &'static AssistantConfig {
    CONFIG.get_or_init(AssistantConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = parse_config(r#"{ "initial_decks": 6.0, "headless": true }"#).unwrap();
        assert_eq!(config.initial_decks, 6.0);
        assert!(config.headless);
        assert_eq!(config.deck_floor, 0.25);
        assert_eq!(config.bet_tiers, DEFAULT_TIERS);
        assert_eq!(config.source, SourceKind::Tesseract);
        assert_eq!(config.cycle_interval_ms, 1000);
    }

    #[test]
    fn test_source_kind_is_lowercase() {
        let config = parse_config(r#"{ "source": "replay", "replay_path": "r.json" }"#).unwrap();
        assert_eq!(config.source, SourceKind::Replay);
        assert_eq!(config.replay_path, "r.json");
    }

    #[test]
    fn test_invalid_deck_settings_fall_back() {
        let config = parse_config(r#"{ "deck_floor": 0.0, "initial_decks": -2.0 }"#).unwrap();
        assert_eq!(config.deck_floor, 0.25);
        assert_eq!(config.initial_decks, 4.0);
    }

    #[test]
    fn test_decreasing_bet_tiers_fall_back() {
        let config = parse_config(r#"{ "bet_tiers": [5, 4, 3, 2, 1, 0] }"#).unwrap();
        assert_eq!(config.bet_policy(), BetPolicy::default());

        let config = parse_config(r#"{ "bet_tiers": [1, 2, 4, 6, 8, 10] }"#).unwrap();
        assert_eq!(config.bet_policy().bet_size(2.0), 4);
    }

    #[test]
    fn test_count_tracker_uses_configured_depth() {
        let config = parse_config(r#"{ "initial_decks": 8.0 }"#).unwrap();
        assert_eq!(config.count_tracker().decks_remaining(), 8.0);
    }

    #[test]
    fn test_load_config_reads_file_and_falls_back() {
        let dir = tempdir().unwrap();

        let missing = load_config(&dir.path().join("config.json"));
        assert_eq!(missing.initial_decks, 4.0);

        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "cycle_interval_ms": 500 }"#).unwrap();
        assert_eq!(load_config(&path).cycle_interval_ms, 500);

        fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_config(&path).cycle_interval_ms, 1000);
    }
}
