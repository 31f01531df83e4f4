use crate::{
	renderer::{format_source, header, render_table, rust_escapes, write_source_file},
	ConfusableMap, GeneratorError,
};
use pretty_assertions::assert_eq;
use std::fs;

fn cyrillic_table() -> ConfusableMap {
	ConfusableMap::from([
		("\\U00000430".to_string(), "\\U00000061".to_string()),
		("\\U0000FB01".to_string(), "\\U00000066\\U00000069".to_string()),
	])
}

#[test]
fn rust_escapes_rewrites_unicode_escapes() {
	assert_eq!(rust_escapes("\\U00000430"), "\\u{430}");
	assert_eq!(rust_escapes("\\U00000066\\U00000069"), "\\u{66}\\u{69}");
	assert_eq!(rust_escapes("\\U0001F600"), "\\u{1F600}");
	assert_eq!(rust_escapes("\\U00000000"), "\\u{0}");
}

#[test]
fn rust_escapes_leaves_plain_text_alone() {
	assert_eq!(rust_escapes("A"), "A");
	assert_eq!(rust_escapes("\\u{430}"), "\\u{430}");
	assert_eq!(rust_escapes("\\U0430"), "\\U0430");
}

#[test]
fn render_table_writes_one_pair_per_line() {
	let table = render_table(&cyrillic_table());
	let lines: Vec<&str> = table.lines().collect();

	assert_eq!(
		lines,
		vec![
			"/// Confusable sequences paired with the Latin text they can pass for.",
			"pub static CONFUSABLES: &[(&str, &str)] = &[",
			"\t(\"\\u{430}\", \"\\u{61}\"),",
			"\t(\"\\u{FB01}\", \"\\u{66}\\u{69}\"),",
			"];",
		]
	);
}

#[test]
fn rendered_tables_are_valid_rust() {
	let formatted = format_source(&render_table(&cyrillic_table())).unwrap();
	assert!(formatted.contains("pub static CONFUSABLES: &[(&str, &str)]"));
	assert!(formatted.contains(r#"("\u{430}", "\u{61}")"#));
	assert!(formatted.contains(r#"("\u{FB01}", "\u{66}\u{69}")"#));

	assert!(format_source(&render_table(&ConfusableMap::new())).is_ok());
}

#[test]
fn format_source_rejects_broken_literals() {
	let table = ConfusableMap::from([("a\"b".to_string(), "c".to_string())]);
	assert!(format_source(&render_table(&table)).is_err());
}

#[test]
fn header_names_the_module() {
	let header = header("confusables");
	assert!(header.contains("THIS FILE IS AUTO-GENERATED.  DO NOT EDIT!"));
	assert!(header.contains("`confusables` module"));
	assert!(header.lines().all(|line| line.is_empty() || line.starts_with("//")));
}

#[test]
fn write_source_file_writes_header_then_formatted_table() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("confusables_table.rs");
	let table = format!("\n\n{}", render_table(&cyrillic_table()));

	write_source_file(&path, "confusables", &table).unwrap();

	let content = fs::read_to_string(&path).unwrap();
	let header = header("confusables");
	assert!(content.starts_with(&header));
	let body = &content[header.len()..];
	assert!(!body.starts_with('\n'));
	assert!(body.contains(r#"("\u{430}", "\u{61}")"#));
	assert!(syn::parse_file(&content).is_ok());
}

#[test]
fn write_source_file_truncates_existing_output() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("confusables_table.rs");
	fs::write(&path, "stale content that is much longer than nothing at all").unwrap();

	write_source_file(&path, "confusables", &render_table(&ConfusableMap::new())).unwrap();

	let content = fs::read_to_string(&path).unwrap();
	assert!(!content.contains("stale content"));
}

#[test]
fn write_source_file_keeps_unformatted_table_on_format_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("confusables_table.rs");
	let table = render_table(&ConfusableMap::from([("a\"b".to_string(), "c".to_string())]));

	let result = write_source_file(&path, "confusables", &table);

	assert!(matches!(result, Err(GeneratorError::Format { .. })));
	let content = fs::read_to_string(&path).unwrap();
	assert_eq!(content, format!("{}{table}", header("confusables")));
}

#[test]
fn write_source_file_reports_create_errors() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing").join("confusables_table.rs");

	let result = write_source_file(&path, "confusables", &render_table(&cyrillic_table()));

	match result {
		Err(GeneratorError::CreateOutput { path: failed, .. }) => assert_eq!(failed, path),
		other => panic!("expected CreateOutput, got {other:?}"),
	}
}
