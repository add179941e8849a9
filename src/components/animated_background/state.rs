//! Mutable state owned by one running background loop.
//!
//! Pointer position and viewport size are fields here, written only by the
//! loop's own event handlers and read by its step/paint. Everything runs on
//! the UI thread; an event handler never interleaves with a frame in flight.

use log::debug;
use web_sys::HtmlCanvasElement;

use super::config::BackdropConfig;
use super::particles::{ParticleField, Pointer, RenderHint, Viewport};
use super::render;
use super::rng::Xorshift64;
use super::surface::{Surface, SurfaceError};
use super::theme::{Theme, ThemeMode};

/// Field, inputs and paint target for one theme's lifetime.
pub struct BackdropState {
	pub field: ParticleField,
	pub theme: Theme,
	pub viewport: Viewport,
	pub pointer: Pointer,
	config: BackdropConfig,
	rng: Xorshift64,
	hints: Vec<RenderHint>,
	canvas: Option<HtmlCanvasElement>,
	surface: Option<Surface>,
	/// Set while frames are being skipped, so the reason is logged once.
	skipping: bool,
}

impl BackdropState {
	pub fn new(
		mode: ThemeMode,
		viewport: Viewport,
		config: BackdropConfig,
		mut rng: Xorshift64,
	) -> Self {
		let field = ParticleField::initialize(mode, viewport, &config, &mut rng);
		Self {
			hints: Vec::with_capacity(field.len()),
			field,
			theme: Theme::for_mode(mode),
			viewport,
			pointer: Pointer::OFFSCREEN,
			config,
			rng,
			canvas: None,
			surface: None,
			skipping: false,
		}
	}

	pub fn mode(&self) -> ThemeMode {
		self.theme.mode
	}

	/// Paint into `canvas` from the next frame on. The 2D context is acquired
	/// lazily, so a canvas that is not mounted yet just delays painting.
	pub fn attach(&mut self, canvas: HtmlCanvasElement) {
		self.canvas = Some(canvas);
		self.surface = None;
	}

	fn ensure_surface(&mut self) -> Result<&Surface, SurfaceError> {
		if self.surface.is_none() {
			let surface = Surface::acquire(self.canvas.as_ref())?;
			surface.resize(self.viewport);
			self.surface = Some(surface);
		}
		self.surface.as_ref().ok_or(SurfaceError::Detached)
	}

	pub fn on_pointer_move(&mut self, x: f64, y: f64) {
		self.pointer = Pointer::new(x, y);
	}

	/// New bounds for recycling and painting. Existing particles stay where
	/// they are; only a theme change rebuilds the field.
	pub fn on_resize(&mut self, width: f64, height: f64) {
		self.viewport = Viewport::new(width, height);
		if let Some(surface) = &self.surface {
			surface.resize(self.viewport);
		}
		debug!(
			"backdrop: resized to {}x{}",
			self.viewport.width, self.viewport.height
		);
	}

	/// Advances every particle one frame; returns this frame's hints.
	pub fn step(&mut self) -> &[RenderHint] {
		self.field.advance_all(
			self.viewport,
			self.pointer,
			&self.config,
			&mut self.rng,
			&mut self.hints,
		);
		&self.hints
	}

	/// One scheduling tick: step then paint. Skipped entirely while the
	/// surface is unavailable.
	pub fn frame(&mut self, now_ms: f64) -> Result<(), SurfaceError> {
		if let Err(err) = self.ensure_surface().and_then(|s| s.context().map(|_| ())) {
			if !self.skipping {
				debug!("backdrop: skipping frames: {err}");
				self.skipping = true;
			}
			return Err(err);
		}
		self.skipping = false;

		self.step();
		let Some(surface) = &self.surface else {
			return Err(SurfaceError::Detached);
		};
		render::render(
			surface.context()?,
			self.viewport,
			&self.theme,
			&self.field.particles,
			&self.hints,
			now_ms,
		);
		Ok(())
	}
}
