//! Compiled-in locations for a generator run.

use std::path::PathBuf;

/// Upstream Unicode confusables definition document.
pub const CONFUSABLES_URI: &str =
	"https://www.unicode.org/Public/security/revision-06/confusables.txt";

/// Manually curated mappings merged in before the upstream ones.
pub const EXTRA_CONFUSABLES_FILE: &str = "./extra_confusables.json";

/// Generated table destination.
pub const OUTPUT_FILE: &str = "./confusables_table.rs";

/// Module the generated table belongs to, named in the file header.
pub const OUTPUT_MODULE: &str = "confusables";

/// Everything a run needs to know about its inputs and output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// URI of the upstream `confusables.txt`.
	pub confusables_uri: String,
	/// Path of the supplemental JSON mapping file.
	pub extra_confusables_path: PathBuf,
	/// Path of the generated Rust source file.
	pub output_path: PathBuf,
	/// Module name written into the generated header.
	pub module_name: String,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			confusables_uri: CONFUSABLES_URI.to_string(),
			extra_confusables_path: PathBuf::from(EXTRA_CONFUSABLES_FILE),
			output_path: PathBuf::from(OUTPUT_FILE),
			module_name: OUTPUT_MODULE.to_string(),
		}
	}
}
