//! Animated canvas background: falling blossoms (light) or twinkling stars (dark).
//!
//! - A fixed-size particle field sampled per theme, recycled in place as
//!   particles fall past the bottom edge
//! - Pointer-proximity emphasis (scale and opacity) within a hover radius
//! - Full-canvas gradient repaint every frame
//! - An owned `requestAnimationFrame` loop with explicit start/stop
//!
//! # Example
//!
//! ```ignore
//! use blossom_backdrop::{AnimatedBackground, provide_theme};
//!
//! provide_theme();
//! view! { <AnimatedBackground /> }
//! ```

mod component;
pub mod config;
mod frame_loop;
mod particles;
mod render;
mod rng;
mod state;
mod surface;
pub mod theme;

pub use component::AnimatedBackground;
pub use config::BackdropConfig;
pub use surface::SurfaceError;
pub use theme::{Theme, ThemeMode};
