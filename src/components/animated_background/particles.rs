//! Falling decorative particles: sampling, per-frame stepping, hover response.
//!
//! Motion uses a fixed per-frame increment rather than delta-time scaling, so
//! the display refresh rate sets the perceived speed.

use std::f64::consts::TAU;

use super::config::{BackdropConfig, HoverConfig, Range};
use super::rng::Xorshift64;
use super::theme::{PALETTE_SIZE, ThemeMode};

/// Drawable area in CSS pixels. Both sides are at least 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	/// Clamps degenerate sizes to 1 so sampling ranges stay non-empty.
	pub fn new(width: f64, height: f64) -> Self {
		let clamp = |v: f64| if v.is_finite() { v.max(1.0) } else { 1.0 };
		Self {
			width: clamp(width),
			height: clamp(height),
		}
	}
}

/// Last observed pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	/// Far outside any viewport, so nothing hovers before the first move.
	pub const OFFSCREEN: Pointer = Pointer {
		x: -1.0e6,
		y: -1.0e6,
	};

	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Default for Pointer {
	fn default() -> Self {
		Self::OFFSCREEN
	}
}

/// One falling blossom or star.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub base_size: f64,
	pub fall_speed: f64,
	/// Radians; grows without bound, trig handles the wrap.
	pub rotation: f64,
	pub rotation_speed: f64,
	pub opacity_base: f64,
	/// Index into the active theme's palette.
	pub color_index: usize,
}

/// Transient per-frame emphasis. Never stored on the particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderHint {
	pub scale: f64,
	pub opacity: f64,
	pub hovered: bool,
}

impl RenderHint {
	/// Size to draw this frame.
	pub fn effective_size(&self, particle: &Particle) -> f64 {
		particle.base_size * self.scale
	}
}

/// Scale and opacity for a particle `distance` pixels from the pointer.
///
/// Inside the radius, scale ramps linearly from 1 at the edge to
/// `1 + scale_boost` at the center, and opacity gets a flat bonus.
pub fn hover_response(distance: f64, opacity_base: f64, hover: &HoverConfig) -> RenderHint {
	if distance < hover.radius {
		let proximity = 1.0 - distance / hover.radius;
		RenderHint {
			scale: 1.0 + proximity * hover.scale_boost,
			opacity: opacity_base + hover.opacity_bonus,
			hovered: true,
		}
	} else {
		RenderHint {
			scale: 1.0,
			opacity: opacity_base,
			hovered: false,
		}
	}
}

fn sample(rng: &mut Xorshift64, range: Range) -> f64 {
	rng.next_range(range.min, range.max)
}

impl Particle {
	/// Samples a fresh particle somewhere above the visible area.
	pub fn spawn(config: &BackdropConfig, viewport: Viewport, rng: &mut Xorshift64) -> Self {
		let tiers = &config.sizes;
		let tier = rng.next_f64();
		let base_size = if tier < tiers.small_below {
			sample(rng, tiers.small)
		} else if tier < tiers.medium_below {
			sample(rng, tiers.medium)
		} else {
			sample(rng, tiers.large)
		};

		Self {
			base_size,
			color_index: rng.next_index(PALETTE_SIZE),
			x: rng.next_range(0.0, viewport.width),
			y: rng.next_range(-viewport.height, 0.0),
			fall_speed: sample(rng, config.fall_speed),
			rotation: rng.next_range(0.0, TAU),
			rotation_speed: rng.next_range(-config.rotation_speed_max, config.rotation_speed_max),
			opacity_base: sample(rng, config.opacity),
		}
	}

	/// Puts a particle that fell past the bottom back just above the top.
	fn recycle(&mut self, viewport: Viewport, reentry_factor: f64, rng: &mut Xorshift64) {
		self.y = -self.base_size * reentry_factor;
		self.x = rng.next_range(0.0, viewport.width);
		self.rotation = rng.next_range(0.0, TAU);
	}

	/// Advances one frame and returns this frame's hover emphasis.
	pub fn advance(
		&mut self,
		viewport: Viewport,
		pointer: Pointer,
		config: &BackdropConfig,
		rng: &mut Xorshift64,
	) -> RenderHint {
		self.y += self.fall_speed;
		self.rotation += self.rotation_speed;

		if self.y > viewport.height {
			self.recycle(viewport, config.reentry_factor, rng);
		}

		let (dx, dy) = (pointer.x - self.x, pointer.y - self.y);
		let distance = (dx * dx + dy * dy).sqrt();
		hover_response(distance, self.opacity_base, &config.hover)
	}
}

/// The live particle collection for one theme.
///
/// Built whole by [`ParticleField::initialize`]; its length never changes
/// afterwards. A theme switch builds a new field instead of migrating this one.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	mode: ThemeMode,
}

impl ParticleField {
	pub fn initialize(
		mode: ThemeMode,
		viewport: Viewport,
		config: &BackdropConfig,
		rng: &mut Xorshift64,
	) -> Self {
		let count = config.particle_count(mode);
		let particles = (0..count)
			.map(|_| Particle::spawn(config, viewport, rng))
			.collect();
		Self { particles, mode }
	}

	pub fn mode(&self) -> ThemeMode {
		self.mode
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Steps every particle in collection order, writing one hint per particle.
	pub fn advance_all(
		&mut self,
		viewport: Viewport,
		pointer: Pointer,
		config: &BackdropConfig,
		rng: &mut Xorshift64,
		hints: &mut Vec<RenderHint>,
	) {
		hints.clear();
		hints.extend(
			self.particles
				.iter_mut()
				.map(|p| p.advance(viewport, pointer, config, rng)),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(mode: ThemeMode, seed: u64) -> (ParticleField, BackdropConfig, Xorshift64) {
		let config = BackdropConfig::default();
		let mut rng = Xorshift64::new(seed);
		let field = ParticleField::initialize(mode, Viewport::new(800.0, 600.0), &config, &mut rng);
		(field, config, rng)
	}

	fn in_some_tier(config: &BackdropConfig, size: f64) -> bool {
		let t = &config.sizes;
		t.small.contains(size) || t.medium.contains(size) || t.large.contains(size)
	}

	#[test]
	fn initialize_counts_per_theme() {
		assert_eq!(field(ThemeMode::Light, 1).0.len(), 50);
		assert_eq!(field(ThemeMode::Dark, 1).0.len(), 70);
	}

	#[test]
	fn initialize_samples_within_ranges() {
		let (field, config, _) = field(ThemeMode::Dark, 11);
		for p in &field.particles {
			assert!(p.color_index < PALETTE_SIZE);
			assert!(in_some_tier(&config, p.base_size), "size {}", p.base_size);
			assert!((0.0..800.0).contains(&p.x));
			assert!((-600.0..0.0).contains(&p.y));
			assert!((0.15..0.45).contains(&p.fall_speed));
			assert!((0.0..TAU).contains(&p.rotation));
			assert!(p.rotation_speed.abs() <= 0.015);
			assert!((0.25..=0.65).contains(&p.opacity_base));
		}
	}

	#[test]
	fn initialize_uses_every_size_tier() {
		let config = BackdropConfig::default();
		let mut rng = Xorshift64::new(5);
		let mut small = 0;
		let mut large = 0;
		for _ in 0..2000 {
			let p = Particle::spawn(&config, Viewport::new(800.0, 600.0), &mut rng);
			if p.base_size < 1.7 {
				small += 1;
			}
			if p.base_size > 3.74 {
				large += 1;
			}
		}
		// Three quarters of the small tier sits below 1.7, so ~22.5% overall.
		assert!((300..600).contains(&small), "small = {small}");
		assert!((250..550).contains(&large), "large = {large}");
	}

	#[test]
	fn advance_moves_by_fall_speed() {
		let (mut field, config, mut rng) = field(ThemeMode::Light, 2);
		let viewport = Viewport::new(800.0, 600.0);
		let p = &mut field.particles[0];
		p.y = 10.0;
		for _ in 0..5 {
			let (before, rotation) = (p.y, p.rotation);
			p.advance(viewport, Pointer::OFFSCREEN, &config, &mut rng);
			assert_eq!(p.y, before + p.fall_speed);
			assert_eq!(p.rotation, rotation + p.rotation_speed);
		}
	}

	#[test]
	fn advance_recycles_past_bottom() {
		let (mut field, config, mut rng) = field(ThemeMode::Light, 3);
		let viewport = Viewport::new(800.0, 600.0);
		let p = &mut field.particles[0];
		p.y = 600.5;
		p.advance(viewport, Pointer::OFFSCREEN, &config, &mut rng);
		assert!(p.y < 0.0);
		assert_eq!(p.y, -p.base_size * 2.0);
		assert!((0.0..800.0).contains(&p.x));
		assert!((0.0..TAU).contains(&p.rotation));
	}

	#[test]
	fn hover_response_at_center_and_edge() {
		let hover = HoverConfig::default();
		let center = hover_response(0.0, 0.3, &hover);
		assert_eq!(center.scale, 2.5);
		assert_eq!(center.opacity, 0.3 + 0.4);
		assert!(center.hovered);

		for d in [150.0, 150.1, 1000.0] {
			let outside = hover_response(d, 0.3, &hover);
			assert_eq!(outside.scale, 1.0);
			assert_eq!(outside.opacity, 0.3);
			assert!(!outside.hovered);
		}

		let halfway = hover_response(75.0, 0.3, &hover);
		assert_eq!(halfway.scale, 1.75);
	}

	#[test]
	fn advance_hover_follows_pointer() {
		let config = BackdropConfig::default();
		let mut rng = Xorshift64::new(4);
		let viewport = Viewport::new(800.0, 600.0);
		let mut p = Particle::spawn(&config, viewport, &mut rng);
		p.x = 100.0;
		p.y = 100.0;
		let hint = p.advance(viewport, Pointer::new(100.0, 100.0 + p.fall_speed), &config, &mut rng);
		assert!(hint.hovered);
		assert_eq!(hint.scale, 2.5);
		assert_eq!(hint.effective_size(&p), p.base_size * 2.5);
	}

	#[test]
	fn offscreen_pointer_never_hovers() {
		let (mut field, config, mut rng) = field(ThemeMode::Dark, 6);
		let mut hints = Vec::new();
		for _ in 0..100 {
			field.advance_all(
				Viewport::new(800.0, 600.0),
				Pointer::default(),
				&config,
				&mut rng,
				&mut hints,
			);
			assert_eq!(hints.len(), field.len());
			assert!(hints.iter().all(|h| !h.hovered && h.scale == 1.0));
		}
	}

	#[test]
	fn theme_switch_replaces_field() {
		let (light, config, mut rng) = field(ThemeMode::Light, 8);
		let dark = ParticleField::initialize(
			light.mode().toggle(),
			Viewport::new(800.0, 600.0),
			&config,
			&mut rng,
		);
		assert_eq!(light.len(), 50);
		assert_eq!(dark.len(), 70);
		assert_eq!(dark.mode(), ThemeMode::Dark);
		assert!(dark.particles.iter().all(|p| p.color_index < PALETTE_SIZE));
	}

	#[test]
	fn field_stays_bounded_over_time() {
		let (mut field, config, mut rng) = field(ThemeMode::Light, 9);
		let viewport = Viewport::new(800.0, 600.0);
		let pointer = Pointer::new(-1000.0, -1000.0);
		let mut hints = Vec::new();

		for _ in 0..1000 {
			field.advance_all(viewport, pointer, &config, &mut rng, &mut hints);
		}
		for p in &field.particles {
			assert!(p.y >= -600.0 && p.y <= 600.0, "y = {}", p.y);
		}

		// Slowest fall (0.15/frame) needs 8000 frames to clear 1200px, after
		// which every particle has been recycled at least once.
		for _ in 0..9000 {
			field.advance_all(viewport, pointer, &config, &mut rng, &mut hints);
		}
		for p in &field.particles {
			assert!(
				p.y >= -p.base_size * 2.0 && p.y <= 600.0,
				"y = {} base = {}",
				p.y,
				p.base_size
			);
		}
		assert_eq!(field.len(), 50);
	}

	#[test]
	fn degenerate_viewport_is_clamped() {
		let viewport = Viewport::new(0.0, f64::NAN);
		assert_eq!(viewport, Viewport::new(1.0, 1.0));
		let config = BackdropConfig::default();
		let mut rng = Xorshift64::new(10);
		let field = ParticleField::initialize(ThemeMode::Light, viewport, &config, &mut rng);
		assert!(field.particles.iter().all(|p| (0.0..1.0).contains(&p.x)));
	}

	mod proptests {
		use super::*;
		use proptest::prelude::*;

		proptest! {
			#[test]
			fn initialize_respects_bounds_for_any_viewport(
				seed: u64,
				width in 1u32..4000,
				height in 1u32..4000,
				dark: bool,
			) {
				let mode = if dark { ThemeMode::Dark } else { ThemeMode::Light };
				let config = BackdropConfig::default();
				let mut rng = Xorshift64::new(seed);
				let viewport = Viewport::new(width as f64, height as f64);
				let field = ParticleField::initialize(mode, viewport, &config, &mut rng);
				prop_assert_eq!(field.len(), config.particle_count(mode));
				for p in &field.particles {
					prop_assert!(p.color_index < PALETTE_SIZE);
					prop_assert!(p.x >= 0.0 && p.x < viewport.width);
					prop_assert!(p.y >= -viewport.height && p.y < 0.0);
					prop_assert!(p.base_size >= 0.68 && p.base_size <= 6.8);
				}
			}

			#[test]
			fn recycled_particle_lands_above_top(seed: u64, overshoot in 0.001f64..50.0) {
				let config = BackdropConfig::default();
				let mut rng = Xorshift64::new(seed);
				let viewport = Viewport::new(1024.0, 768.0);
				let mut p = Particle::spawn(&config, viewport, &mut rng);
				p.y = viewport.height + overshoot;
				p.advance(viewport, Pointer::OFFSCREEN, &config, &mut rng);
				prop_assert!(p.y < 0.0);
				prop_assert!(p.x >= 0.0 && p.x < viewport.width);
			}
		}
	}
}
