//! # Confusables Generator
//!
//! Builds the static confusables table from the Unicode security data.
//!
//! A run loads the manually curated supplemental mappings, downloads
//! `confusables.txt` from unicode.org, keeps only the entries that map a single
//! non Basic Latin character onto text an attacker could pass off as Latin, and
//! writes the merged mapping as a generated Rust source file.
// Strong Documentation Lints
#![deny(
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs,
	rustdoc::invalid_codeblock_attributes,
	missing_docs
)]

pub mod config;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod renderer;
pub mod supplemental;

pub use config::*;
pub use error::GeneratorError;
pub use parser::{ConfusableMap, ParseStats};

use log::info;

/// Runs the whole pipeline: load, fetch, parse, render and write.
///
/// # Arguments
///
/// * `config` - Where to fetch from, what to merge in and where to write.
///
/// # Returns
///
/// The number of entries written to the generated table.
///
/// # Errors
///
/// Any fatal failure: fetching the upstream document, reading it, or creating,
/// formatting and writing the output file. Problems with the supplemental file
/// are logged and do not stop the run.
pub fn run(config: &GeneratorConfig) -> Result<usize, GeneratorError> {
	let mut confusables = supplemental::load_supplemental(&config.extra_confusables_path);
	info!(
		"Loaded {} supplemental confusables from {}",
		confusables.len(),
		config.extra_confusables_path.display()
	);

	let upstream = fetcher::fetch_confusables(&config.confusables_uri)?;
	let stats = parser::collect_confusables(upstream, &mut confusables)?;
	info!(
		"Read {} upstream lines: {} matched, {} accepted",
		stats.lines, stats.matched, stats.accepted
	);

	let table = renderer::render_table(&confusables);
	renderer::write_source_file(&config.output_path, &config.module_name, &table)?;
	info!("Wrote {} confusables to {}", confusables.len(), config.output_path.display());

	Ok(confusables.len())
}

#[cfg(test)]
mod tests;
