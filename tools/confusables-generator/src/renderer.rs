//! # Table Renderer
//!
//! Writes the merged confusables as a generated Rust source file:
//!
//! ```text
//! // ***** THIS FILE IS AUTO-GENERATED.  DO NOT EDIT! *****
//! pub static CONFUSABLES: &[(&str, &str)] = &[
//!     ("\u{430}", "\u{61}"),
//! ];
//! ```

use crate::{error::GeneratorError, parser::ConfusableMap};
use regex::{Captures, Regex};
use std::{fs::File, io::Write, path::Path, sync::OnceLock};

const TABLE_OPEN: &str = "/// Confusable sequences paired with the Latin text they can pass for.\n\
	pub static CONFUSABLES: &[(&str, &str)] = &[\n";
const TABLE_CLOSE: &str = "];\n";

const UNICODE_ESCAPE_PATTERN: &str = r"\\U([0-9A-Fa-f]{8})";

fn unicode_escape_regex() -> &'static Regex {
	static REGEX: OnceLock<Regex> = OnceLock::new();
	REGEX.get_or_init(|| Regex::new(UNICODE_ESCAPE_PATTERN).expect("Should create regex."))
}

/// The banner written above the table, naming the module it is generated for.
pub fn header(module: &str) -> String {
	format!(
		"// ******************************************************\n\
		 // ***** THIS FILE IS AUTO-GENERATED.  DO NOT EDIT! *****\n\
		 // ******************************************************\n\
		 // Generated by confusables-generator for the `{module}` module.\n\n"
	)
}

/// Rewrites every `\UXXXXXXXX` escape as a Rust `\u{X}` escape. Other text is left alone.
pub fn rust_escapes(escaped: &str) -> String {
	unicode_escape_regex()
		.replace_all(escaped, |captures: &Captures<'_>| {
			let digits = captures[1].trim_start_matches('0');
			format!("\\u{{{}}}", if digits.is_empty() { "0" } else { digits })
		})
		.into_owned()
}

/// Renders the table declaration, one `(confusable, target)` pair per line.
///
/// Entries are copied into the string literals unchecked, so anything that is not
/// valid literal text shows up later as a formatting error.
pub fn render_table(confusables: &ConfusableMap) -> String {
	let mut content = String::from(TABLE_OPEN);

	for (confusable, target) in confusables {
		content.push_str(&format!(
			"\t(\"{}\", \"{}\"),\n",
			rust_escapes(confusable),
			rust_escapes(target)
		));
	}

	content.push_str(TABLE_CLOSE);
	content
}

/// Canonical formatting pass over generated Rust source.
///
/// # Errors
///
/// The parse error if `source` is not a valid Rust file.
pub fn format_source(source: &str) -> Result<String, syn::Error> {
	let file = syn::parse_file(source)?;
	Ok(prettyplease::unparse(&file))
}

/// Creates (or truncates) `path` and writes the header followed by the formatted table.
///
/// # Arguments
///
/// * `path` - Output file.
/// * `module` - Module name for the header.
/// * `table` - Rendered table, see [`render_table`].
///
/// # Errors
///
/// Creating the file, writing the header, formatting and writing the table are
/// each reported as their own [`GeneratorError`] variant. When formatting fails
/// the unformatted table is still written so the error can be located.
pub fn write_source_file(path: &Path, module: &str, table: &str) -> Result<(), GeneratorError> {
	let mut file = File::create(path)
		.map_err(|source| GeneratorError::CreateOutput { path: path.to_path_buf(), source })?;

	file.write_all(header(module).as_bytes())
		.map_err(|source| GeneratorError::WriteHeader { path: path.to_path_buf(), source })?;

	let table = table.trim_start_matches('\n');
	match format_source(table) {
		Ok(formatted) => file
			.write_all(formatted.as_bytes())
			.map_err(|source| GeneratorError::WriteOutput { path: path.to_path_buf(), source }),
		Err(source) => {
			_ = file.write_all(table.as_bytes());
			Err(GeneratorError::Format { path: path.to_path_buf(), source })
		},
	}
}
