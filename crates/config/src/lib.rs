//! Configuration for the scope gutter engine.
//!
//! Hosts normally supply display settings themselves through
//! [`SettingsSource`]. A KDL (v2) file can provide the rest of the engine
//! setup and fallback display values:
//!
//! ```kdl
//! gutter {
//!     indicator-height 16
//!     indicator-width 4
//!     indicator-offset 2
//!     indicator-opacity 80
//! }
//!
//! palette {
//!     color "React Blue" "#61dafb"
//!     color "Vue Green" "#42b883"
//! }
//!
//! scheduler {
//!     quiet-window-ms 500
//! }
//!
//! tabs {
//!     delimiter-guard "after-heading"
//! }
//!
//! files {
//!     extensions "md" "markdown"
//! }
//! ```
//!
//! Every section is optional; omitted values keep their defaults.

pub mod display;
pub mod error;
mod parse;

use std::path::Path;
use std::time::Duration;

pub use display::{DisplayConfig, Setting, SettingsSource};
pub use error::{ConfigError, Result};
use legato_scope::{DelimiterGuard, Palette};

/// Default debounce quiet window.
pub const DEFAULT_QUIET_WINDOW: Duration = Duration::from_millis(500);

/// Parsed engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LegatoConfig {
	/// Fallback display settings.
	pub display: DisplayConfig,
	/// Colors handed out to spans by position.
	pub palette: Palette,
	/// Debounce quiet window for recomputation.
	pub quiet_window: Duration,
	/// Which `---` delimiters count as tab tokens.
	pub delimiter_guard: DelimiterGuard,
	/// File extensions (without the dot) the engine decorates.
	pub extensions: Vec<String>,
}

impl Default for LegatoConfig {
	fn default() -> Self {
		Self {
			display: DisplayConfig::default(),
			palette: Palette::default(),
			quiet_window: DEFAULT_QUIET_WINDOW,
			delimiter_guard: DelimiterGuard::default(),
			extensions: vec!["md".into(), "markdown".into()],
		}
	}
}

impl LegatoConfig {
	/// Parse a KDL string into a [`LegatoConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		parse::parse_config(input)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %path.display(), "Loaded configuration");
		Ok(config)
	}

	/// Returns true if `path` has one of the recognized extensions.
	pub fn recognizes(&self, path: &Path) -> bool {
		path.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| self.extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
	}
}

impl SettingsSource for LegatoConfig {
	fn read_setting(&self, setting: Setting, _default: f64) -> f64 {
		f64::from(self.display.get(setting))
	}
}
