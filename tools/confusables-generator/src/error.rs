//! Errors raised while generating the confusables table.

use std::{io, path::PathBuf};

/// Failures of a generator run.
///
/// The supplemental variants are only ever logged; every other variant ends the run.
#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
	/// The supplemental file could not be opened or created.
	#[error("could not open supplemental file {}", path.display())]
	OpenSupplemental {
		/// Supplemental file path
		path: PathBuf,
		/// Underlying I/O error
		source: io::Error,
	},
	/// The supplemental file could not be read.
	#[error("could not read supplemental file {}", path.display())]
	ReadSupplemental {
		/// Supplemental file path
		path: PathBuf,
		/// Underlying I/O error
		source: io::Error,
	},
	/// The supplemental file is not a JSON object of strings.
	#[error("could not decode supplemental file {}", path.display())]
	DecodeSupplemental {
		/// Supplemental file path
		path: PathBuf,
		/// Underlying decode error
		source: serde_json::Error,
	},
	/// The upstream request failed.
	#[error("could not fetch {uri}")]
	Fetch {
		/// Requested URI
		uri: String,
		/// Underlying HTTP client error
		source: Box<ureq::Error>,
	},
	/// The upstream body could not be read to the end.
	#[error("could not read upstream confusables")]
	Read(#[source] io::Error),
	/// The output file could not be created.
	#[error("could not create file {}", path.display())]
	CreateOutput {
		/// Output path
		path: PathBuf,
		/// Underlying I/O error
		source: io::Error,
	},
	/// The generated header could not be written.
	#[error("error writing header to {}", path.display())]
	WriteHeader {
		/// Output path
		path: PathBuf,
		/// Underlying I/O error
		source: io::Error,
	},
	/// The rendered table is not valid Rust. The unformatted table is left in the file.
	#[error("error formatting file {}", path.display())]
	Format {
		/// Output path
		path: PathBuf,
		/// Parse error reported by the formatter
		source: syn::Error,
	},
	/// The generated table could not be written.
	#[error("error writing file {}", path.display())]
	WriteOutput {
		/// Output path
		path: PathBuf,
		/// Underlying I/O error
		source: io::Error,
	},
}
