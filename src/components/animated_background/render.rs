//! Canvas painting for the animated background.
//!
//! Each frame repaints everything: the full-canvas gradient first, then every
//! particle in collection order (no depth sorting). The particle shape comes
//! from the theme's [`ParticleStyle`]:
//! - light: five-petal blossom with a shaded center and a hover halo
//! - dark: four-pointed star with a twinkling purple-glow overlay
//!
//! Shadow state is cleared after every particle and again at frame end so a
//! glow never bleeds into later draws.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Particle, RenderHint, Viewport};
use super::theme::{BackgroundStyle, BlossomStyle, Color, ParticleStyle, StarStyle, Theme};

/// Host clock (ms) to twinkle phase.
const TWINKLE_RATE: f64 = 0.003;

/// Pulsing glow factor in [0, 1], offset by `x` so neighbours twinkle out of phase.
pub fn twinkle_factor(now_ms: f64, x: f64) -> f64 {
	(now_ms * TWINKLE_RATE + x).sin() * 0.5 + 0.5
}

/// Darker shade for the flower center, kept in the light pastel band.
pub fn center_shade(color: Color) -> Color {
	let shade = |channel: u8, offset: i16, floor: i16| {
		(channel as i16 - offset).clamp(floor, 255) as u8
	};
	Color::rgb(
		shade(color.r, 50, 200),
		shade(color.g, 30, 150),
		shade(color.b, 30, 150),
	)
}

/// Centers of `count` petals spaced evenly on a circle of radius `size`.
pub fn petal_offsets(count: usize, size: f64) -> impl Iterator<Item = (f64, f64)> {
	(0..count).map(move |i| {
		let angle = i as f64 / count as f64 * TAU;
		(angle.cos() * size, angle.sin() * size)
	})
}

/// Vertices of a star with `points` tips, alternating outer and inner radius.
pub fn star_vertices(points: usize, outer: f64, inner: f64) -> impl Iterator<Item = (f64, f64)> {
	let vertices = points * 2;
	(0..vertices).map(move |i| {
		let angle = i as f64 / vertices as f64 * TAU;
		let radius = if i % 2 == 0 { outer } else { inner };
		(angle.cos() * radius, angle.sin() * radius)
	})
}

/// Paints one full frame. `hints` holds one entry per particle.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	viewport: Viewport,
	theme: &Theme,
	particles: &[Particle],
	hints: &[RenderHint],
	now_ms: f64,
) {
	draw_background(ctx, viewport, &theme.background);

	for (particle, hint) in particles.iter().zip(hints) {
		ctx.save();
		let _ = ctx.translate(particle.x, particle.y);
		let _ = ctx.rotate(particle.rotation);

		match &theme.particles {
			ParticleStyle::Blossom(style) => draw_blossom(ctx, style, particle, hint),
			ParticleStyle::Star(style) => draw_star(ctx, style, particle, hint, now_ms),
		}

		ctx.restore();
		reset_shadow(ctx);
	}

	reset_shadow(ctx);
}

fn reset_shadow(ctx: &CanvasRenderingContext2d) {
	ctx.set_shadow_color("rgba(0, 0, 0, 0)");
	ctx.set_shadow_blur(0.0);
}

fn draw_background(ctx: &CanvasRenderingContext2d, viewport: Viewport, style: &BackgroundStyle) {
	let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, viewport.height);
	for stop in &style.stops {
		let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
	}

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

fn draw_blossom(
	ctx: &CanvasRenderingContext2d,
	style: &BlossomStyle,
	particle: &Particle,
	hint: &RenderHint,
) {
	let size = hint.effective_size(particle);
	let color = style.palette.get(particle.color_index);

	ctx.set_fill_style_str(&color.with_alpha(hint.opacity * 0.7).to_css());
	for (px, py) in petal_offsets(style.petal_count, size) {
		ctx.begin_path();
		let _ = ctx.ellipse(px, py, size * style.petal_width, size, 0.0, 0.0, TAU);
		ctx.fill();
	}

	ctx.set_fill_style_str(&center_shade(color).with_alpha(hint.opacity * 0.8).to_css());
	ctx.begin_path();
	let _ = ctx.arc(0.0, 0.0, size * style.center_radius, 0.0, TAU);
	ctx.fill();

	if hint.hovered {
		ctx.set_shadow_color(&color.with_alpha(0.6).to_css());
		ctx.set_shadow_blur(style.glow_blur);
		ctx.set_fill_style_str(&color.with_alpha(hint.opacity * 0.15).to_css());
		ctx.begin_path();
		let _ = ctx.arc(0.0, 0.0, size * style.glow_radius, 0.0, TAU);
		ctx.fill();
	}
}

fn draw_star(
	ctx: &CanvasRenderingContext2d,
	style: &StarStyle,
	particle: &Particle,
	hint: &RenderHint,
	now_ms: f64,
) {
	let size = hint.effective_size(particle);
	let color = style.palette.get(particle.color_index);

	ctx.set_fill_style_str(&color.with_alpha(hint.opacity).to_css());
	trace_star(ctx, star_vertices(style.points, size, size * style.inner_ratio));
	ctx.fill();

	let twinkle = twinkle_factor(now_ms, particle.x);
	ctx.set_shadow_color(&style.glow_color.with_alpha(0.5 + twinkle * 0.5).to_css());
	ctx.set_shadow_blur(style.glow_blur);

	ctx.set_fill_style_str(&color.with_alpha((hint.opacity + twinkle * 0.3) * 0.7).to_css());
	trace_star(
		ctx,
		star_vertices(
			style.points,
			size * style.overlay_outer,
			size * style.overlay_inner,
		),
	);
	ctx.fill();
}

fn trace_star(ctx: &CanvasRenderingContext2d, vertices: impl Iterator<Item = (f64, f64)>) {
	ctx.begin_path();
	for (i, (x, y)) in vertices.enumerate() {
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.close_path();
}
