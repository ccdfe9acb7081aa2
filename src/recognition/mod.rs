//! Sources of recognized cards.
//!
//! A source is asked once per cycle for each table region. Sources report
//! what they read as card symbols; tokens that are not cards never leave the
//! source.

pub mod replay;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::counting::CardSymbol;

pub use replay::ReplaySource;

/// Table region a recognition pass reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRole {
    Player,
    Dealer,
}

impl fmt::Display for RegionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionRole::Player => write!(f, "player"),
            RegionRole::Dealer => write!(f, "dealer"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("region image not found: {0}")]
    MissingFrame(PathBuf),

    #[error("failed to load region image: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tesseract not found. Please install Tesseract-OCR or set tesseract_path.")]
    TesseractNotFound,

    #[error("Tesseract failed: {0}")]
    Tesseract(String),

    #[error("invalid card pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid replay file: {0}")]
    Replay(#[from] serde_json::Error),
}

/// Supplies recognized cards for each table region.
pub trait RecognitionSource {
    /// Called once before the regions of a new cycle are read.
    fn next_cycle(&mut self) {}

    /// Cards visible in `role`'s region, left to right. Empty when nothing
    /// was recognized.
    fn recognize(&mut self, role: RegionRole) -> Result<Vec<CardSymbol>, RecognitionError>;

    /// True once the source has nothing more to offer. Live sources never
    /// finish.
    fn is_finished(&self) -> bool {
        false
    }
}
