//! Regenerates `confusables_table.rs` from the Unicode security data.
//!
//! Usage:
//!  confusables-generator
//!
//! Run it from the folder holding `extra_confusables.json`; the table is written
//! next to it. Set `RUST_LOG=debug` to see every accepted mapping.
use confusables_generator::{run, GeneratorConfig};
use log::{error, info};
use std::{error::Error, process};

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = GeneratorConfig::default();
	match run(&config) {
		Ok(count) => info!("✓ Generated {count} confusables for `{}`", config.module_name),
		Err(e) => {
			error!("{e}");
			let mut cause = e.source();
			while let Some(inner) = cause {
				error!("  caused by: {inner}");
				cause = inner.source();
			}
			process::exit(1);
		},
	}
}
