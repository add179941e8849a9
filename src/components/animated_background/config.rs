//! Tunable constants for the particle field.
//!
//! Every value that shapes sampling, motion, or the hover response lives here
//! so the simulation code never hard-codes a number. Defaults reproduce the
//! site's stock look; a page may override any subset through a JSON block
//! (see [`crate::load_config`]).

use serde::Deserialize;

use super::theme::ThemeMode;

/// Half-open sampling interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Swap inverted bounds so sampling never runs backwards.
	fn normalized(self) -> Self {
		if self.min > self.max {
			Self::new(self.max, self.min)
		} else {
			self
		}
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// Size tier chosen by a single uniform draw against cumulative thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SizeTiers {
	/// Draws below this pick the small tier.
	pub small_below: f64,
	/// Draws below this (and not small) pick the medium tier; the rest are large.
	pub medium_below: f64,
	pub small: Range,
	pub medium: Range,
	pub large: Range,
}

impl Default for SizeTiers {
	fn default() -> Self {
		Self {
			small_below: 0.3,
			medium_below: 0.8,
			small: Range::new(0.68, 2.04),
			medium: Range::new(1.7, 3.74),
			large: Range::new(3.74, 6.8),
		}
	}
}

/// Pointer-proximity emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
	/// Distance (px) under which a particle counts as hovered.
	pub radius: f64,
	/// Extra scale at zero distance; scale = 1 + proximity * boost.
	pub scale_boost: f64,
	/// Flat opacity bonus while hovered.
	pub opacity_bonus: f64,
}

impl Default for HoverConfig {
	fn default() -> Self {
		Self {
			radius: 150.0,
			scale_boost: 1.5,
			opacity_bonus: 0.4,
		}
	}
}

/// Everything the field needs to sample and animate particles.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
	pub light_count: usize,
	pub dark_count: usize,
	pub sizes: SizeTiers,
	/// Downward pixels per frame.
	pub fall_speed: Range,
	/// Rotation speed is sampled in `[-max, max]` radians per frame.
	pub rotation_speed_max: f64,
	pub opacity: Range,
	pub hover: HoverConfig,
	/// Recycled particles re-enter at `-base_size * reentry_factor`.
	pub reentry_factor: f64,
	/// Fixed RNG seed; `None` seeds from the host.
	pub seed: Option<u64>,
}

impl Default for BackdropConfig {
	fn default() -> Self {
		Self {
			light_count: 50,
			dark_count: 70,
			sizes: SizeTiers::default(),
			fall_speed: Range::new(0.15, 0.45),
			rotation_speed_max: 0.015,
			opacity: Range::new(0.25, 0.65),
			hover: HoverConfig::default(),
			reentry_factor: 2.0,
			seed: None,
		}
	}
}

impl BackdropConfig {
	/// Particle count for the active theme.
	pub fn particle_count(&self, mode: ThemeMode) -> usize {
		match mode {
			ThemeMode::Light => self.light_count,
			ThemeMode::Dark => self.dark_count,
		}
	}

	/// Repair values a hand-written override could get wrong.
	pub fn sanitized(mut self) -> Self {
		self.fall_speed = self.fall_speed.normalized();
		self.opacity = self.opacity.normalized();
		self.sizes.small = self.sizes.small.normalized();
		self.sizes.medium = self.sizes.medium.normalized();
		self.sizes.large = self.sizes.large.normalized();
		if self.sizes.small_below > self.sizes.medium_below {
			std::mem::swap(&mut self.sizes.small_below, &mut self.sizes.medium_below);
		}
		self.rotation_speed_max = self.rotation_speed_max.abs();
		self.hover.radius = self.hover.radius.max(0.0);
		self
	}
}
