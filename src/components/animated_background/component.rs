//! Leptos component hosting the background canvas.
//!
//! The canvas is fixed behind the page and ignores pointer input. Whenever the
//! theme changes the running [`BackdropLoop`] is stopped and a fresh one is
//! started with a newly sampled field; unmounting stops the last loop.

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::BackdropConfig;
use super::frame_loop::{BackdropLoop, window_size};
use super::particles::Viewport;
use super::rng::Xorshift64;
use super::state::BackdropState;
use crate::components::theme_toggle::use_theme;

fn stop_current(running: StoredValue<Option<BackdropLoop>, LocalStorage>) {
	running.try_update_value(|slot| {
		if let Some(mut backdrop) = slot.take() {
			backdrop.stop();
		}
	});
}

/// Full-viewport animated background that follows the page theme.
///
/// `config` overrides the stock particle settings; see [`BackdropConfig`].
#[component]
pub fn AnimatedBackground(#[prop(optional)] config: Option<BackdropConfig>) -> impl IntoView {
	let theme = use_theme();
	let config = config.unwrap_or_default().sanitized();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<BackdropLoop>);

	Effect::new(move |_| {
		let mode = theme.mode.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		stop_current(running);

		let (w, h) = web_sys::window()
			.as_ref()
			.and_then(window_size)
			.unwrap_or((1.0, 1.0));
		let rng = config
			.seed
			.map(Xorshift64::new)
			.unwrap_or_else(Xorshift64::from_entropy);

		let mut state = BackdropState::new(mode, Viewport::new(w, h), config.clone(), rng);
		state.attach(canvas);

		let mut backdrop = BackdropLoop::new(state);
		backdrop.start();
		running.set_value(Some(backdrop));
	});

	on_cleanup(move || stop_current(running));

	view! {
		<canvas
			node_ref=canvas_ref
			class="animated-background"
			aria-hidden="true"
			style="position: fixed; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
