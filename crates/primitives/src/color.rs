//! RGB color identities.
//!
//! Palettes are written as `#RRGGBB` (or `#RGB`) hex strings; icons render
//! them back in the same form with an alpha suffix appended by the caller.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A true-color RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color format: {0}")]
pub struct ParseColorError(pub String);

impl Color {
	/// Creates a color from its components.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parses `#RGB` or `#RRGGBB`; the leading `#` is optional.
	pub fn from_hex(value: &str) -> Result<Self, ParseColorError> {
		let hex = value.trim().trim_start_matches('#');
		let err = || ParseColorError(value.trim().to_string());
		if !hex.is_ascii() {
			return Err(err());
		}

		match hex.len() {
			3 => {
				let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).map_err(|_| err())?;
				let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).map_err(|_| err())?;
				let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).map_err(|_| err())?;
				Ok(Self::rgb(r, g, b))
			}
			6 => {
				let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| err())?;
				let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| err())?;
				let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| err())?;
				Ok(Self::rgb(r, g, b))
			}
			_ => Err(err()),
		}
	}
}

impl FromStr for Color {
	type Err = ParseColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_hex(s)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_parse_long_hex() {
		assert_eq!(Color::from_hex("#61dafb"), Ok(Color::rgb(0x61, 0xda, 0xfb)));
		assert_eq!("007FFF".parse(), Ok(Color::rgb(0x00, 0x7f, 0xff)));
	}

	#[test]
	fn test_parse_short_hex() {
		assert_eq!(Color::from_hex("#f0a"), Ok(Color::rgb(0xff, 0x00, 0xaa)));
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!(Color::from_hex("#12345").is_err());
		assert!(Color::from_hex("#gggggg").is_err());
		assert!(Color::from_hex("#ééé").is_err());
		assert_eq!(
			Color::from_hex("blue").unwrap_err().to_string(),
			"invalid color format: blue"
		);
	}

	proptest! {
		#[test]
		fn display_parses_back(r: u8, g: u8, b: u8) {
			let color = Color::rgb(r, g, b);
			prop_assert_eq!(color.to_string().parse::<Color>(), Ok(color));
		}
	}
}
