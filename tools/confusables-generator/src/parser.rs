//! # Confusables Parser
//!
//! Extracts confusable mappings from the lines of the Unicode `confusables.txt`.
//!
//! A data line looks like
//! `0430 ;	0061 ;	MA	# ( а → a ) CYRILLIC SMALL LETTER A → LATIN SMALL LETTER A	# `.
//! Only lines that map one non Basic Latin character onto text containing Basic
//! Latin or whitespace are kept, since those are the ones that can pass for
//! ordinary Latin text.

use crate::error::GeneratorError;
use core::ops::RangeInclusive;
use log::debug;
use regex::Regex;
use std::{collections::BTreeMap, io::BufRead, sync::OnceLock};

/// Escaped confusable sequence to escaped target sequence, e.g. `\U00000430` => `\U00000061`.
pub type ConfusableMap = BTreeMap<String, String>;

/// Printable ASCII, without space.
pub const BASIC_LATIN: RangeInclusive<u32> = 0x0021..=0x007E;

// The intermediate steps of a chained mapping, `( a → b → c )`, are matched but not captured.
const CONFUSABLE_LINE_PATTERN: &str = r"^(?P<source>[0-9A-Fa-f]+(?: [0-9A-Fa-f]+)*) ;\t(?P<target>[0-9A-Fa-f]+(?: [0-9A-Fa-f]+)*) ;\t[A-Za-z]{2,}\t#\*? \( (?P<source_char>.+?) →(?: .+? →)* (?P<target_char>.+?) \) .+ → .+";

fn confusable_line_regex() -> &'static Regex {
	static REGEX: OnceLock<Regex> = OnceLock::new();
	REGEX.get_or_init(|| Regex::new(CONFUSABLE_LINE_PATTERN).expect("Should create regex."))
}

/// The captured fields of one upstream data line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfusableLine<'a> {
	/// Space separated hex code points of the confusable, e.g. `0430`.
	pub source_ids: &'a str,
	/// Space separated hex code points of the target, e.g. `0072 006E`.
	pub target_ids: &'a str,
	/// The confusable as rendered in the comment.
	pub source_char: &'a str,
	/// The final target as rendered in the comment.
	pub target_char: &'a str,
}

impl ConfusableLine<'_> {
	/// See [`is_allowed`].
	pub fn is_allowed(&self) -> bool {
		is_allowed(self.source_char, self.target_char)
	}

	/// The `(confusable, target)` pair in the escaped form stored in a [`ConfusableMap`].
	pub fn escaped(&self) -> (String, String) {
		(format_unicode_ids(self.source_ids), format_unicode_ids(self.target_ids))
	}
}

/// Counters for one pass over the upstream document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
	/// Lines read
	pub lines: usize,
	/// Lines that matched the data line pattern
	pub matched: usize,
	/// Matched lines that passed [`is_allowed`]
	pub accepted: usize,
}

/// Matches a single upstream line.
///
/// # Returns
///
/// The captured fields, or `None` for comments, blank lines and anything else
/// that is not a data line.
pub fn parse_line(line: &str) -> Option<ConfusableLine<'_>> {
	let captures = confusable_line_regex().captures(line)?;
	Some(ConfusableLine {
		source_ids: captures.name("source")?.as_str(),
		target_ids: captures.name("target")?.as_str(),
		source_char: captures.name("source_char")?.as_str(),
		target_char: captures.name("target_char")?.as_str(),
	})
}

/// Checks whether a code point is printable ASCII other than space.
pub fn is_basic_latin(character: char) -> bool {
	BASIC_LATIN.contains(&u32::from(character))
}

/// Decides whether an upstream mapping belongs in the table.
///
/// # Arguments
///
/// * `confusable` - The rendered confusable.
/// * `target` - The rendered target.
///
/// # Returns
///
/// `false` if `confusable` is more than one code point or is itself Basic Latin.
/// Otherwise `true` only when `target` contains a Basic Latin or whitespace character.
pub fn is_allowed(confusable: &str, target: &str) -> bool {
	if confusable.chars().count() > 1 {
		return false
	}

	if confusable.chars().any(is_basic_latin) {
		return false
	}

	target.chars().any(|character| is_basic_latin(character) || character.is_whitespace())
}

/// Converts space separated hex code points into concatenated `\U` escapes.
///
/// Each id is left padded with zeros to eight digits: `"41 42"` becomes
/// `\U00000041\U00000042`.
pub fn format_unicode_ids(ids: &str) -> String {
	ids.split(' ').map(|id| format!("\\U{id:0>8}")).collect()
}

/// Parses every line of `reader` and inserts the allowed mappings into `confusables`.
///
/// Existing keys are overwritten, so upstream entries take precedence over
/// anything loaded before.
///
/// # Errors
///
/// [`GeneratorError::Read`] if a line cannot be read.
pub fn collect_confusables<R: BufRead>(
	reader: R,
	confusables: &mut ConfusableMap,
) -> Result<ParseStats, GeneratorError> {
	let mut stats = ParseStats::default();

	for line in reader.lines() {
		let line = line.map_err(GeneratorError::Read)?;
		stats.lines += 1;

		let Some(entry) = parse_line(&line) else { continue };
		stats.matched += 1;

		if !entry.is_allowed() {
			continue
		}

		let (confusable, target) = entry.escaped();
		debug!("{} → {}: {confusable} => {target}", entry.source_char, entry.target_char);
		confusables.insert(confusable, target);
		stats.accepted += 1;
	}

	Ok(stats)
}

#[test]
fn ensure_confusable_line_pattern_compiles() {
	assert!(Regex::new(CONFUSABLE_LINE_PATTERN).is_ok());
}
