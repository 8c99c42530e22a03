//! Gutter indicator display settings.
//!
//! Hosts own these settings; the engine asks for a fresh [`DisplayConfig`]
//! snapshot on every pass so edits take effect without a restart.

/// One of the four numeric display settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
	/// Indicator height in pixels.
	IndicatorHeight,
	/// Indicator bar width in pixels.
	IndicatorWidth,
	/// Horizontal offset from the gutter edge in pixels.
	IndicatorOffset,
	/// Indicator opacity in percent.
	IndicatorOpacity,
}

impl Setting {
	pub const ALL: [Setting; 4] = [
		Self::IndicatorHeight,
		Self::IndicatorWidth,
		Self::IndicatorOffset,
		Self::IndicatorOpacity,
	];

	/// Host configuration key, e.g. `gutterIndicatorHeight`.
	pub const fn key(self) -> &'static str {
		match self {
			Self::IndicatorHeight => "gutterIndicatorHeight",
			Self::IndicatorWidth => "gutterIndicatorWidth",
			Self::IndicatorOffset => "gutterIndicatorOffset",
			Self::IndicatorOpacity => "gutterIndicatorOpacity",
		}
	}

	/// Key inside the `gutter { }` block of a config file.
	pub const fn kdl_key(self) -> &'static str {
		match self {
			Self::IndicatorHeight => "indicator-height",
			Self::IndicatorWidth => "indicator-width",
			Self::IndicatorOffset => "indicator-offset",
			Self::IndicatorOpacity => "indicator-opacity",
		}
	}

	/// Largest accepted value.
	pub const fn max(self) -> u32 {
		match self {
			Self::IndicatorOpacity => 100,
			_ => 256,
		}
	}

	/// Finds a setting by its KDL key.
	pub fn from_kdl_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|s| s.kdl_key() == key)
	}
}

/// Read-only access to the host's display settings.
pub trait SettingsSource {
	/// Returns the current value of `setting`, or `default` when unset.
	fn read_setting(&self, setting: Setting, default: f64) -> f64;
}

/// Snapshot of the four indicator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayConfig {
	pub height: u32,
	pub width: u32,
	pub offset: u32,
	/// Opacity in percent (0..=100).
	pub opacity: u32,
}

impl Default for DisplayConfig {
	fn default() -> Self {
		Self {
			height: 16,
			width: 4,
			offset: 2,
			opacity: 80,
		}
	}
}

impl DisplayConfig {
	/// Reads a snapshot from `source`, falling back to `self` for each value.
	///
	/// Values that are not finite, negative or above [`Setting::max`] are
	/// replaced by the fallback.
	pub fn read_with_fallback(&self, source: &(impl SettingsSource + ?Sized)) -> Self {
		let read = |setting: Setting| {
			let fallback = self.get(setting);
			let raw = source.read_setting(setting, f64::from(fallback));
			if raw.is_finite() && (0.0..=f64::from(setting.max())).contains(&raw) {
				raw as u32
			} else {
				tracing::warn!(setting = setting.key(), value = raw, fallback, "Ignoring out-of-range display setting");
				fallback
			}
		};

		Self {
			height: read(Setting::IndicatorHeight),
			width: read(Setting::IndicatorWidth),
			offset: read(Setting::IndicatorOffset),
			opacity: read(Setting::IndicatorOpacity),
		}
	}

	/// Reads a snapshot from `source` with the built-in defaults as fallback.
	pub fn read(source: &(impl SettingsSource + ?Sized)) -> Self {
		Self::default().read_with_fallback(source)
	}

	pub fn get(&self, setting: Setting) -> u32 {
		match setting {
			Setting::IndicatorHeight => self.height,
			Setting::IndicatorWidth => self.width,
			Setting::IndicatorOffset => self.offset,
			Setting::IndicatorOpacity => self.opacity,
		}
	}

	pub(crate) fn set(&mut self, setting: Setting, value: u32) {
		match setting {
			Setting::IndicatorHeight => self.height = value,
			Setting::IndicatorWidth => self.width = value,
			Setting::IndicatorOffset => self.offset = value,
			Setting::IndicatorOpacity => self.opacity = value,
		}
	}

	/// Opacity as an 8-bit alpha channel: `floor(opacity * 255 / 100)`.
	pub fn alpha(&self) -> u8 {
		(self.opacity.min(100) * 255 / 100) as u8
	}

	/// Alpha as the two-digit hex suffix appended to `#rrggbb`.
	pub fn alpha_hex(&self) -> String {
		format!("{:02x}", self.alpha())
	}
}

impl SettingsSource for DisplayConfig {
	fn read_setting(&self, setting: Setting, _default: f64) -> f64 {
		f64::from(self.get(setting))
	}
}
