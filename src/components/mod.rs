//! UI components.

pub mod animated_background;
pub mod theme_toggle;
