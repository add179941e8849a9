//! blossom-backdrop: animated canvas background for a personal portfolio site.
//!
//! This crate provides a WASM component that paints drifting pastel blossoms in
//! the light theme and twinkling stars in the dark theme, reacting to the
//! pointer, behind the page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::animated_background::{
	AnimatedBackground, BackdropConfig, SurfaceError, Theme, ThemeMode,
};
pub use components::theme_toggle::{ThemeContext, ThemeToggle, provide_theme, use_theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("blossom-backdrop: logging initialized");
}

/// Parse a JSON override; malformed input falls back to defaults.
pub fn parse_config(json: &str) -> BackdropConfig {
	match serde_json::from_str::<BackdropConfig>(json) {
		Ok(config) => config.sanitized(),
		Err(e) => {
			warn!("blossom-backdrop: ignoring invalid config: {}", e);
			BackdropConfig::default()
		}
	}
}

/// Load particle settings from a script element with id="backdrop-config".
/// Missing element means stock settings.
pub fn load_config() -> BackdropConfig {
	let text = (|| {
		let window: Window = web_sys::window()?;
		let element = window.document()?.get_element_by_id("backdrop-config")?;
		let script: HtmlScriptElement = element.dyn_into().ok()?;
		script.text().ok()
	})();

	match text {
		Some(json) => {
			let config = parse_config(&json);
			info!(
				"blossom-backdrop: loaded config ({} light / {} dark particles)",
				config.light_count, config.dark_count
			);
			config
		}
		None => BackdropConfig::default(),
	}
}

/// Main application component.
/// Installs the theme context and renders the background behind the page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let theme = provide_theme();
	let config = load_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme.mode.get().as_str() />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<AnimatedBackground config=config />
		<div class="page">
			<ThemeToggle />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_config_reads_overrides() {
		let config = parse_config(r#"{ "light_count": 12, "seed": 99 }"#);
		assert_eq!(config.light_count, 12);
		assert_eq!(config.dark_count, 70);
		assert_eq!(config.seed, Some(99));
	}

	#[test]
	fn parse_config_falls_back_on_garbage() {
		assert_eq!(parse_config("{ not json"), BackdropConfig::default());
		assert_eq!(parse_config(r#"{ "hover": 3 }"#), BackdropConfig::default());
	}
}
