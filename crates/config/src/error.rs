//! Error types for configuration parsing.

use std::path::PathBuf;

use legato_scope::ScopeError;
use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing KDL syntax.
	#[error("KDL parse error: {0}")]
	Kdl(#[from] kdl::KdlError),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A required value is missing from a node.
	#[error("missing required field: {0}")]
	MissingField(String),

	/// A color value could not be parsed.
	#[error("invalid color format: {0}")]
	InvalidColor(String),

	/// An unknown section or option was specified.
	#[error("unknown option: {key}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	UnknownOption {
		/// The unrecognized key.
		key: String,
		/// A suggested alternative, if one is close enough.
		suggestion: Option<String>,
	},

	/// An option value has the wrong type.
	#[error("type mismatch for option '{option}': expected {expected}, got {got}")]
	OptionTypeMismatch {
		/// The option's KDL key.
		option: String,
		/// Expected value type.
		expected: &'static str,
		/// Actual value type.
		got: &'static str,
	},

	/// A numeric option is outside its accepted range.
	#[error("value {value} for option '{option}' is out of range ({min}..={max})")]
	OutOfRange {
		/// The option's KDL key.
		option: String,
		/// The rejected value.
		value: i128,
		/// Smallest accepted value.
		min: i128,
		/// Largest accepted value.
		max: i128,
	},

	/// Palette or grammar settings were rejected.
	#[error(transparent)]
	Scope(#[from] ScopeError),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
