//! Gutter icon rendering.
//!
//! The indicator is a vertical bar `width` pixels wide and `height` tall,
//! `offset` pixels from the gutter edge. The icon on a span's first line
//! adds a short stroke along the top; the remaining lines get the bare bar.

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use legato_config::DisplayConfig;
use legato_primitives::Color;

/// Which part of a span an icon is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
	/// The span's first line: bar plus top stroke.
	Start,
	/// Every following line: bar only.
	Continuation,
}

/// An SVG icon ready to hand to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
	svg: String,
}

impl IconImage {
	/// Renders the `kind` indicator for `color` with the given settings.
	pub fn render(color: Color, kind: IconKind, config: &DisplayConfig) -> Self {
		let fill = format!("{color}{}", config.alpha_hex());
		let mut svg = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg">"#);
		if kind == IconKind::Start {
			rect(
				&mut svg,
				config.offset + config.width,
				config.height.saturating_sub(config.width),
				config.width,
				&fill,
			);
		}
		rect(&mut svg, config.offset, config.width, config.height, &fill);
		svg.push_str("</svg>");
		Self { svg }
	}

	/// The SVG source.
	pub fn svg(&self) -> &str {
		&self.svg
	}

	/// The icon as a base64 `data:` URI.
	pub fn data_uri(&self) -> String {
		format!("data:image/svg+xml;base64,{}", STANDARD.encode(&self.svg))
	}
}

fn rect(svg: &mut String, x: u32, width: u32, height: u32, fill: &str) {
	let _ = write!(
		svg,
		r#"<rect x="{x}" y="0" width="{width}" height="{height}" style="fill: {fill};"></rect>"#
	);
}
