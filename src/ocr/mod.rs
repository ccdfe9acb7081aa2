pub mod engine;
pub mod extract;
pub mod setup;

use std::path::PathBuf;

use crate::assistant::config::AssistantConfig;
use crate::counting::CardSymbol;
use crate::recognition::{RecognitionError, RecognitionSource, RegionRole};
use engine::recognize_image;
use extract::extract_cards;
use setup::locate_tesseract;

/// Reads cards from region screenshots with Tesseract.
///
/// An external capture tool keeps one image per region up to date; each
/// recognition pass reads whatever image is current.
pub struct TesseractSource {
    player_image: PathBuf,
    dealer_image: PathBuf,
    executable: PathBuf,
    tessdata: Option<PathBuf>,
    min_confidence: f32,
}

impl TesseractSource {
    pub fn new(config: &AssistantConfig) -> Result<Self, RecognitionError> {
        let paths = locate_tesseract(config.tesseract_path.as_deref())?;
        Ok(Self {
            player_image: config.player_region_path(),
            dealer_image: config.dealer_region_path(),
            executable: paths.executable,
            tessdata: paths.tessdata,
            min_confidence: config.min_confidence,
        })
    }

    fn region_path(&self, role: RegionRole) -> &PathBuf {
        match role {
            RegionRole::Player => &self.player_image,
            RegionRole::Dealer => &self.dealer_image,
        }
    }
}

impl RecognitionSource for TesseractSource {
    fn recognize(&mut self, role: RegionRole) -> Result<Vec<CardSymbol>, RecognitionError> {
        let path = self.region_path(role);
        if !path.exists() {
            return Err(RecognitionError::MissingFrame(path.clone()));
        }

        let gray = image::open(path)?.to_luma8();
        let lines = recognize_image(&gray, &self.executable, self.tessdata.as_deref())?;
        for line in &lines {
            tracing::debug!(%role, text = %line.text, confidence = line.confidence, "OCR line");
        }

        Ok(extract_cards(&lines, self.min_confidence)?)
    }
}
