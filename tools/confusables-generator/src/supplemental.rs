//! # Supplemental Confusables
//!
//! Loads the manually curated confusables that the Unicode data does not cover.
//! The file is a JSON object mapping an escaped confusable sequence to its
//! escaped target, e.g. `{"\\U00000131": "\\U00000069"}`. Its entries are
//! merged as-is and are not checked against [`crate::parser::is_allowed`].

use crate::{error::GeneratorError, parser::ConfusableMap};
use log::{info, warn};
use std::{fs::OpenOptions, io::Read, path::Path};

/// Loads the supplemental confusables, carrying on with an empty map on failure.
///
/// A missing file is created empty. Open and decode failures are logged, never returned.
///
/// # Arguments
///
/// * `path` - Location of the supplemental JSON file.
///
/// # Returns
///
/// The supplemental mapping, empty if the file is empty or unusable.
pub fn load_supplemental(path: &Path) -> ConfusableMap {
	match read_supplemental(path) {
		Ok(confusables) => confusables,
		Err(e) => {
			warn!("{e}: {}", error_cause(&e));
			ConfusableMap::new()
		},
	}
}

/// Reads and decodes the supplemental confusables, creating the file if it is missing.
///
/// # Errors
///
/// [`GeneratorError::OpenSupplemental`], [`GeneratorError::ReadSupplemental`] or
/// [`GeneratorError::DecodeSupplemental`] depending on where it went wrong.
pub fn read_supplemental(path: &Path) -> Result<ConfusableMap, GeneratorError> {
	let mut file = OpenOptions::new()
		.read(true)
		.write(true)
		.create(true)
		.open(path)
		.map_err(|source| GeneratorError::OpenSupplemental { path: path.to_path_buf(), source })?;

	let mut content = String::new();
	file.read_to_string(&mut content)
		.map_err(|source| GeneratorError::ReadSupplemental { path: path.to_path_buf(), source })?;

	if content.trim().is_empty() {
		info!("Supplemental file {} is empty", path.display());
		return Ok(ConfusableMap::new())
	}

	serde_json::from_str(&content)
		.map_err(|source| GeneratorError::DecodeSupplemental { path: path.to_path_buf(), source })
}

fn error_cause(e: &GeneratorError) -> String {
	std::error::Error::source(e).map_or_else(String::new, ToString::to_string)
}
