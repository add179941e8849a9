//! Page-wide light/dark setting and the button that flips it.

use leptos::prelude::*;

use super::animated_background::ThemeMode;

/// Reactive theme shared through Leptos context.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
	/// Current mode. Subscribers re-run when it changes.
	pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
	/// A context starting at `initial`.
	pub fn new(initial: ThemeMode) -> Self {
		Self {
			mode: RwSignal::new(initial),
		}
	}

	/// Switch to the other mode.
	pub fn toggle(&self) {
		self.mode.update(|mode| *mode = mode.toggle());
	}
}

/// Mode declared on `<html data-theme="...">` by the host page, if any.
fn document_theme() -> Option<ThemeMode> {
	let root = web_sys::window()?.document()?.document_element()?;
	ThemeMode::parse(&root.get_attribute("data-theme")?)
}

/// Install the theme context, seeded from the document's `data-theme`.
pub fn provide_theme() -> ThemeContext {
	let theme = ThemeContext::new(document_theme().unwrap_or_default());
	provide_context(theme);
	theme
}

/// The installed theme context, installing one if the tree has none yet.
pub fn use_theme() -> ThemeContext {
	use_context::<ThemeContext>().unwrap_or_else(provide_theme)
}

/// Button that toggles between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = use_theme();
	let label = move || match theme.mode.get() {
		ThemeMode::Light => "Switch to dark theme",
		ThemeMode::Dark => "Switch to light theme",
	};
	let icon = move || match theme.mode.get() {
		ThemeMode::Light => "\u{263E}",
		ThemeMode::Dark => "\u{2600}",
	};

	view! {
		<button
			type="button"
			class="theme-toggle"
			aria-label=label
			title=label
			on:click=move |_| theme.toggle()
		>
			{icon}
		</button>
	}
}
