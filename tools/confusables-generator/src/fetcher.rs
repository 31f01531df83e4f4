//! Downloads the upstream confusables document.

use crate::error::GeneratorError;
use log::debug;
use std::io::{BufRead, BufReader};

/// Issues a single blocking GET and hands back the body as a line source.
///
/// No retries and no explicit timeout: the default `ureq` agent applies.
///
/// # Errors
///
/// [`GeneratorError::Fetch`] on any transport failure or non-success status.
pub fn fetch_confusables(uri: &str) -> Result<impl BufRead, GeneratorError> {
	debug!("Fetching {uri}");
	let response = ureq::get(uri)
		.call()
		.map_err(|e| GeneratorError::Fetch { uri: uri.to_string(), source: Box::new(e) })?;
	debug!("{uri} answered {} {}", response.status(), response.status_text());

	Ok(BufReader::new(response.into_reader()))
}
