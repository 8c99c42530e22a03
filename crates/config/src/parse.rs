//! KDL parsing for [`LegatoConfig`].

use std::time::Duration;

use kdl::{KdlDocument, KdlNode, KdlValue};
use legato_primitives::Color;
use legato_scope::{Palette, PaletteEntry};

use crate::LegatoConfig;
use crate::display::Setting;
use crate::error::{ConfigError, Result};

const SECTIONS: &[&str] = &["gutter", "palette", "scheduler", "tabs", "files"];
const GUTTER_KEYS: &[&str] = &[
	"indicator-height",
	"indicator-width",
	"indicator-offset",
	"indicator-opacity",
];
const PALETTE_KEYS: &[&str] = &["color"];
const SCHEDULER_KEYS: &[&str] = &["quiet-window-ms"];
const TABS_KEYS: &[&str] = &["delimiter-guard"];
const FILES_KEYS: &[&str] = &["extensions"];

/// Largest accepted quiet window.
const MAX_QUIET_WINDOW_MS: i128 = 60_000;

pub(crate) fn parse_config(input: &str) -> Result<LegatoConfig> {
	let doc: KdlDocument = input.parse()?;
	let mut config = LegatoConfig::default();

	for node in doc.nodes() {
		let section = node.name().value();
		match section {
			"gutter" => parse_gutter(node, &mut config)?,
			"palette" => config.palette = parse_palette(node)?,
			"scheduler" => parse_scheduler(node, &mut config)?,
			"tabs" => parse_tabs(node, &mut config)?,
			"files" => parse_files(node, &mut config)?,
			other => return Err(unknown(other, SECTIONS)),
		}
	}

	Ok(config)
}

fn parse_gutter(node: &KdlNode, config: &mut LegatoConfig) -> Result<()> {
	for child in children(node) {
		let key = child.name().value();
		let setting = Setting::from_kdl_key(key).ok_or_else(|| unknown(key, GUTTER_KEYS))?;
		let value = integer_arg(child, 0, i128::from(setting.max()))?;
		config.display.set(setting, value as u32);
	}
	Ok(())
}

fn parse_palette(node: &KdlNode) -> Result<Palette> {
	let mut entries = Vec::new();
	for child in children(node) {
		let key = child.name().value();
		if key != "color" {
			return Err(unknown(key, PALETTE_KEYS));
		}

		let args = string_args(child)?;
		let (name, hex) = match args.as_slice() {
			[hex] => (*hex, *hex),
			[name, hex] => (*name, *hex),
			_ => return Err(ConfigError::MissingField("color value".into())),
		};
		let color = Color::from_hex(hex).map_err(|e| ConfigError::InvalidColor(e.0))?;
		entries.push(PaletteEntry::new(name, color));
	}
	Ok(Palette::new(entries)?)
}

fn parse_scheduler(node: &KdlNode, config: &mut LegatoConfig) -> Result<()> {
	for child in children(node) {
		let key = child.name().value();
		if key != "quiet-window-ms" {
			return Err(unknown(key, SCHEDULER_KEYS));
		}
		let ms = integer_arg(child, 0, MAX_QUIET_WINDOW_MS)?;
		config.quiet_window = Duration::from_millis(ms as u64);
	}
	Ok(())
}

fn parse_tabs(node: &KdlNode, config: &mut LegatoConfig) -> Result<()> {
	for child in children(node) {
		let key = child.name().value();
		if key != "delimiter-guard" {
			return Err(unknown(key, TABS_KEYS));
		}
		let args = string_args(child)?;
		let [guard] = args.as_slice() else {
			return Err(ConfigError::MissingField(key.to_string()));
		};
		config.delimiter_guard = guard.parse()?;
	}
	Ok(())
}

fn parse_files(node: &KdlNode, config: &mut LegatoConfig) -> Result<()> {
	for child in children(node) {
		let key = child.name().value();
		if key != "extensions" {
			return Err(unknown(key, FILES_KEYS));
		}
		config.extensions = string_args(child)?
			.into_iter()
			.map(|ext| ext.trim_start_matches('.').to_string())
			.collect();
	}
	Ok(())
}

fn children(node: &KdlNode) -> &[KdlNode] {
	node.children().map(KdlDocument::nodes).unwrap_or_default()
}

fn integer_arg(node: &KdlNode, min: i128, max: i128) -> Result<i128> {
	let option = node.name().value();
	let value = node
		.entries()
		.first()
		.map(|entry| entry.value())
		.ok_or_else(|| ConfigError::MissingField(option.to_string()))?;
	let Some(int) = value.as_integer() else {
		return Err(ConfigError::OptionTypeMismatch {
			option: option.to_string(),
			expected: "int",
			got: value_type_name(value),
		});
	};
	if !(min..=max).contains(&int) {
		return Err(ConfigError::OutOfRange {
			option: option.to_string(),
			value: int,
			min,
			max,
		});
	}
	Ok(int)
}

fn string_args(node: &KdlNode) -> Result<Vec<&str>> {
	node.entries()
		.iter()
		.map(|entry| {
			entry.value().as_string().ok_or_else(|| ConfigError::OptionTypeMismatch {
				option: node.name().value().to_string(),
				expected: "string",
				got: value_type_name(entry.value()),
			})
		})
		.collect()
}

fn value_type_name(value: &KdlValue) -> &'static str {
	if value.is_string() {
		"string"
	} else if value.is_integer() {
		"int"
	} else if value.is_float() {
		"float"
	} else if value.is_bool() {
		"bool"
	} else {
		"null"
	}
}

fn unknown(key: &str, known: &[&str]) -> ConfigError {
	ConfigError::UnknownOption {
		key: key.to_string(),
		suggestion: suggest(key, known),
	}
}

/// Closest known key within an edit distance of 3.
fn suggest(key: &str, known: &[&str]) -> Option<String> {
	known
		.iter()
		.min_by_key(|k| strsim::levenshtein(key, k))
		.filter(|k| strsim::levenshtein(key, k) <= 3)
		.map(|k| k.to_string())
}
