//! Replays recorded observations from a JSON file.
//!
//! File format: an array of frames, one per cycle.
//!
//! ```json
//! [
//!   { "player": ["8", "8"], "dealer": ["6"] },
//!   { "player": ["K", "7"], "dealer": ["10"] }
//! ]
//! ```
//!
//! Tokens are the raw strings a recognizer would have produced, so noise in
//! the file is filtered the same way as live OCR noise.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{RecognitionError, RecognitionSource, RegionRole};
use crate::counting::CardSymbol;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayFrame {
    #[serde(default)]
    pub player: Vec<String>,
    #[serde(default)]
    pub dealer: Vec<String>,
}

/// Steps through recorded frames; yields empty regions once exhausted.
#[derive(Debug)]
pub struct ReplaySource {
    frames: Vec<ReplayFrame>,
    /// Index of the frame for the current cycle, `None` before the first cycle.
    cursor: Option<usize>,
}

impl ReplaySource {
    pub fn new(frames: Vec<ReplayFrame>) -> Self {
        Self {
            frames,
            cursor: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, RecognitionError> {
        let contents = fs::read_to_string(path)?;
        let frames: Vec<ReplayFrame> = serde_json::from_str(&contents)?;
        tracing::info!(frames = frames.len(), path = %path.display(), "loaded replay file");
        Ok(Self::new(frames))
    }

    fn current(&self) -> Option<&ReplayFrame> {
        self.cursor.and_then(|i| self.frames.get(i))
    }
}

impl RecognitionSource for ReplaySource {
    fn is_finished(&self) -> bool {
        self.cursor.is_some_and(|i| i >= self.frames.len())
    }

    fn next_cycle(&mut self) {
        self.cursor = Some(self.cursor.map_or(0, |i| i + 1));
    }

    fn recognize(&mut self, role: RegionRole) -> Result<Vec<CardSymbol>, RecognitionError> {
        let Some(frame) = self.current() else {
            return Ok(Vec::new());
        };
        let tokens = match role {
            RegionRole::Player => &frame.player,
            RegionRole::Dealer => &frame.dealer,
        };
        Ok(CardSymbol::parse_all(tokens))
    }
}
