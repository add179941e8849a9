//! Canvas + 2D context pair the renderer paints into.

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::Viewport;

/// Why a frame could not be painted. Every variant is recoverable: the loop
/// skips the frame and tries again on the next tick.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
	/// The canvas element is not mounted yet (or was removed).
	#[error("canvas is not attached to the document")]
	Detached,

	/// The canvas backing store has no pixels.
	#[error("canvas has zero size ({width}x{height})")]
	ZeroSized { width: u32, height: u32 },

	/// `getContext("2d")` threw, returned null, or returned another kind of context.
	#[error("2d rendering context unavailable")]
	ContextUnavailable,
}

/// Reject backing stores with no drawable pixels.
pub fn check_size(width: u32, height: u32) -> Result<(), SurfaceError> {
	if width == 0 || height == 0 {
		Err(SurfaceError::ZeroSized { width, height })
	} else {
		Ok(())
	}
}

/// A mounted canvas and its 2D context.
pub struct Surface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	pub fn acquire(canvas: Option<&HtmlCanvasElement>) -> Result<Self, SurfaceError> {
		let canvas = canvas.ok_or(SurfaceError::Detached)?;
		if !canvas.is_connected() {
			return Err(SurfaceError::Detached);
		}

		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
			.ok_or(SurfaceError::ContextUnavailable)?;

		Ok(Self {
			canvas: canvas.clone(),
			ctx,
		})
	}

	/// Matches the backing store to the viewport. Resizing clears the canvas.
	pub fn resize(&self, viewport: Viewport) {
		self.canvas.set_width(viewport.width as u32);
		self.canvas.set_height(viewport.height as u32);
	}

	/// The context, provided the canvas still has pixels to paint.
	pub fn context(&self) -> Result<&CanvasRenderingContext2d, SurfaceError> {
		check_size(self.canvas.width(), self.canvas.height())?;
		Ok(&self.ctx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_sized_canvas_is_rejected() {
		assert_eq!(
			check_size(0, 600),
			Err(SurfaceError::ZeroSized {
				width: 0,
				height: 600
			})
		);
		assert!(check_size(800, 0).is_err());
		assert!(check_size(800, 600).is_ok());
	}

	#[test]
	fn missing_canvas_is_detached() {
		assert_eq!(Surface::acquire(None).err(), Some(SurfaceError::Detached));
	}

	#[test]
	fn errors_display_readable_messages() {
		let msg = SurfaceError::ZeroSized {
			width: 0,
			height: 3,
		}
		.to_string();
		assert!(msg.contains("0x3"), "{msg}");
		assert!(SurfaceError::ContextUnavailable.to_string().contains("2d"));
	}
}
