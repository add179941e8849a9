//! Visual theming for the animated background.
//!
//! A [`Theme`] bundles the background gradient with a [`ParticleStyle`], the
//! tagged variant that selects both the palette and the shape drawn for each
//! particle (blossoms in light mode, stars in dark mode).

use serde::Deserialize;

/// Number of entries in every particle palette.
pub const PALETTE_SIZE: usize = 10;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Two-valued presentation mode shared with the rest of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	/// Pastel blossoms over a lavender sky.
	#[default]
	Light,
	/// Twinkling stars over a deep blue night.
	Dark,
}

impl ThemeMode {
	/// The other mode.
	pub fn toggle(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Attribute value used for `<html data-theme="...">`.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// Parses `"light"` / `"dark"` (case-insensitive).
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"light" => Some(ThemeMode::Light),
			"dark" => Some(ThemeMode::Dark),
			_ => None,
		}
	}
}

/// Fixed-size particle palette. Indices sampled at creation stay valid for
/// the lifetime of the theme.
#[derive(Clone, Debug)]
pub struct Palette {
	pub colors: [Color; PALETTE_SIZE],
}

impl Palette {
	/// Soft pastel flowers for the light theme.
	pub fn pastel() -> Self {
		Self {
			colors: [
				Color::rgb(255, 179, 184), // Pastel pink
				Color::rgb(255, 182, 193), // Light pink
				Color::rgb(253, 181, 179), // Pastel red
				Color::rgb(245, 224, 254), // Pastel purple
				Color::rgb(220, 237, 243), // Pastel blue
				Color::rgb(198, 239, 206), // Pastel green
				Color::rgb(255, 229, 153), // Pastel yellow
				Color::rgb(255, 204, 188), // Pastel peach
				Color::rgb(225, 190, 231), // Pastel lavender
				Color::rgb(200, 224, 255), // Pastel sky blue
			],
		}
	}

	/// Whites and pale blues for the dark theme.
	pub fn starlight() -> Self {
		Self {
			colors: [
				Color::rgb(255, 255, 255), // Pure white
				Color::rgb(220, 237, 243), // Blue white
				Color::rgb(245, 245, 255), // Ghost white
				Color::rgb(230, 245, 255), // Alice blue
				Color::rgb(240, 248, 255), // Very light blue
				Color::rgb(200, 220, 255), // Light periwinkle
				Color::rgb(200, 230, 255), // Light blue
				Color::rgb(220, 220, 255), // Light lavender
				Color::rgb(255, 250, 240), // Floral white
				Color::rgb(245, 245, 250), // Ghost white
			],
		}
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}
}

/// One stop of the vertical background gradient.
#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
	/// Position along the canvas height, 0.0 (top) to 1.0 (bottom).
	pub offset: f64,
	pub color: Color,
}

/// Full-canvas vertical gradient repainted every frame.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub stops: [GradientStop; 5],
}

/// Light-mode flower shape.
#[derive(Clone, Debug)]
pub struct BlossomStyle {
	pub palette: Palette,
	pub petal_count: usize,
	/// Petal minor axis relative to the major axis.
	pub petal_width: f64,
	/// Flower center radius relative to the effective size.
	pub center_radius: f64,
	/// Hover halo radius relative to the effective size.
	pub glow_radius: f64,
	pub glow_blur: f64,
}

/// Dark-mode star shape.
#[derive(Clone, Debug)]
pub struct StarStyle {
	pub palette: Palette,
	pub points: usize,
	/// Inner vertex radius relative to the outer radius.
	pub inner_ratio: f64,
	/// Overlay star outer/inner radii relative to the effective size.
	pub overlay_outer: f64,
	pub overlay_inner: f64,
	/// Shadow color; its alpha is replaced by the twinkle-modulated value.
	pub glow_color: Color,
	pub glow_blur: f64,
}

/// Per-theme particle shape and palette.
#[derive(Clone, Debug)]
pub enum ParticleStyle {
	Blossom(BlossomStyle),
	Star(StarStyle),
}

impl ParticleStyle {
	pub fn palette(&self) -> &Palette {
		match self {
			ParticleStyle::Blossom(style) => &style.palette,
			ParticleStyle::Star(style) => &style.palette,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub mode: ThemeMode,
	pub background: BackgroundStyle,
	pub particles: ParticleStyle,
}

impl Theme {
	/// Pastel violet-to-blue sky with drifting blossoms.
	pub fn light() -> Self {
		Self {
			mode: ThemeMode::Light,
			background: BackgroundStyle {
				stops: [
					GradientStop {
						offset: 0.0,
						color: Color::rgba(237, 233, 254, 1.0), // Very light violet
					},
					GradientStop {
						offset: 0.25,
						color: Color::rgba(230, 230, 250, 0.99), // Soft lavender
					},
					GradientStop {
						offset: 0.5,
						color: Color::rgba(240, 245, 255, 0.98), // Blue-white
					},
					GradientStop {
						offset: 0.75,
						color: Color::rgba(219, 234, 254, 0.99), // Pale blue
					},
					GradientStop {
						offset: 1.0,
						color: Color::rgba(243, 232, 255, 1.0), // Soft lavender
					},
				],
			},
			particles: ParticleStyle::Blossom(BlossomStyle {
				palette: Palette::pastel(),
				petal_count: 5,
				petal_width: 0.6,
				center_radius: 0.5,
				glow_radius: 3.5,
				glow_blur: 30.0,
			}),
		}
	}

	/// Deep blue night fading to black, with twinkling stars.
	pub fn dark() -> Self {
		Self {
			mode: ThemeMode::Dark,
			background: BackgroundStyle {
				stops: [
					GradientStop {
						offset: 0.0,
						color: Color::rgba(30, 58, 138, 1.0), // Deep blue
					},
					GradientStop {
						offset: 0.3,
						color: Color::rgba(25, 50, 120, 0.98), // Darker blue
					},
					GradientStop {
						offset: 0.6,
						color: Color::rgba(20, 35, 90, 0.96),
					},
					GradientStop {
						offset: 0.85,
						color: Color::rgba(10, 20, 50, 0.97), // Very dark blue
					},
					GradientStop {
						offset: 1.0,
						color: Color::rgba(5, 10, 25, 1.0), // Almost black
					},
				],
			},
			particles: ParticleStyle::Star(StarStyle {
				palette: Palette::starlight(),
				points: 4,
				inner_ratio: 0.4,
				overlay_outer: 1.3,
				overlay_inner: 0.5,
				glow_color: Color::rgb(168, 85, 247),
				glow_blur: 20.0,
			}),
		}
	}

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Light => Self::light(),
			ThemeMode::Dark => Self::dark(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::light()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_flips_between_modes() {
		assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
		assert_eq!(ThemeMode::Light.toggle().toggle(), ThemeMode::Light);
	}

	#[test]
	fn parse_accepts_attribute_values() {
		assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
		assert_eq!(ThemeMode::parse(" Light "), Some(ThemeMode::Light));
		assert_eq!(ThemeMode::parse("sepia"), None);
		assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
	}

	#[test]
	fn theme_mode_deserializes_lowercase() {
		let mode: ThemeMode = serde_json::from_str("\"dark\"").unwrap();
		assert_eq!(mode, ThemeMode::Dark);
	}

	#[test]
	fn each_mode_selects_its_shape() {
		assert!(matches!(Theme::light().particles, ParticleStyle::Blossom(_)));
		assert!(matches!(Theme::dark().particles, ParticleStyle::Star(_)));
		assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
	}

	#[test]
	fn palettes_have_ten_entries() {
		assert_eq!(Theme::light().particles.palette().len(), PALETTE_SIZE);
		assert_eq!(Theme::dark().particles.palette().len(), PALETTE_SIZE);
	}

	#[test]
	fn gradient_stops_are_ordered_and_span_the_canvas() {
		for theme in [Theme::light(), Theme::dark()] {
			let stops = &theme.background.stops;
			assert_eq!(stops[0].offset, 0.0);
			assert_eq!(stops[stops.len() - 1].offset, 1.0);
			assert!(stops.windows(2).all(|w| w[0].offset < w[1].offset));
		}
	}

	#[test]
	fn to_css_emits_rgba() {
		assert_eq!(
			Color::rgb(168, 85, 247).with_alpha(0.5).to_css(),
			"rgba(168, 85, 247, 0.5)"
		);
	}
}
