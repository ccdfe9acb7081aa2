use std::path::{Path, PathBuf};
use std::process::Command;

use crate::recognition::RecognitionError;

#[cfg(windows)]
const EXECUTABLE_NAME: &str = "tesseract.exe";
#[cfg(not(windows))]
const EXECUTABLE_NAME: &str = "tesseract";

/// Common install locations, checked after the local dir and PATH.
const COMMON_PATHS: &[&str] = &[
    r"C:\Program Files\Tesseract-OCR\tesseract.exe",
    r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
    "/opt/homebrew/bin/tesseract",
    "/usr/local/bin/tesseract",
    "/usr/bin/tesseract",
];

pub struct TesseractPaths {
    pub executable: PathBuf,
    /// `None` lets Tesseract use its built-in or TESSDATA_PREFIX location.
    pub tessdata: Option<PathBuf>,
}

/// Returns the directory for a locally installed Tesseract
pub fn get_tesseract_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("blackjack-assistant")
        .join("tesseract")
}

/// Locates Tesseract once at startup.
pub fn locate_tesseract(configured: Option<&Path>) -> Result<TesseractPaths, RecognitionError> {
    let executable = find_tesseract_executable(configured)?;
    let tessdata = find_tessdata_dir();
    tracing::info!(
        executable = %executable.display(),
        tessdata = ?tessdata,
        "Tesseract found"
    );
    Ok(TesseractPaths {
        executable,
        tessdata,
    })
}

/// Finds the Tesseract executable: configured path, local dir, PATH, then
/// common install locations.
pub fn find_tesseract_executable(configured: Option<&Path>) -> Result<PathBuf, RecognitionError> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "configured tesseract_path does not exist");
    }

    let local_exe = get_tesseract_dir().join(EXECUTABLE_NAME);
    if local_exe.exists() {
        return Ok(local_exe);
    }

    // Check PATH
    if let Ok(output) = Command::new("tesseract").arg("--version").output() {
        if output.status.success() {
            return Ok(PathBuf::from("tesseract"));
        }
    }

    COMMON_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .ok_or(RecognitionError::TesseractNotFound)
}

/// Finds a tessdata directory holding eng.traineddata, if one is installed
/// next to a local Tesseract.
pub fn find_tessdata_dir() -> Option<PathBuf> {
    let local_tessdata = get_tesseract_dir().join("tessdata");
    if local_tessdata.join("eng.traineddata").exists() {
        return Some(local_tessdata);
    }
    None
}
