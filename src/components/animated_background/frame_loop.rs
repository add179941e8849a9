//! `requestAnimationFrame` driver for the background.
//!
//! [`BackdropLoop`] owns everything that keeps the animation alive: the shared
//! [`BackdropState`], the self-rescheduling frame closure with its pending
//! request id, and the window `mousemove`/`resize` subscriptions. `stop()`
//! releases all of them; nothing keeps drawing into a stale canvas after the
//! owner is gone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent, Window};

use super::state::BackdropState;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Current window inner size in CSS pixels.
pub fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
	let callback = callback.borrow();
	window
		.request_animation_frame(callback.as_ref()?.as_ref().unchecked_ref())
		.ok()
}

/// Owned, explicitly started and stopped animation loop.
pub struct BackdropLoop {
	state: Rc<RefCell<BackdropState>>,
	frame: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
	running: Rc<Cell<bool>>,
	listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl BackdropLoop {
	pub fn new(state: BackdropState) -> Self {
		Self {
			state: Rc::new(RefCell::new(state)),
			frame: Rc::new(RefCell::new(None)),
			pending: Rc::new(Cell::new(None)),
			running: Rc::new(Cell::new(false)),
			listeners: Vec::new(),
		}
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Run `f` against the loop's state between frames.
	pub fn with_state<R>(&self, f: impl FnOnce(&mut BackdropState) -> R) -> R {
		f(&mut self.state.borrow_mut())
	}

	/// Subscribe to pointer/resize events and schedule the first frame.
	/// Calling `start` on a running loop does nothing.
	pub fn start(&mut self) {
		if self.running.get() {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("backdrop: no window, animation not started");
			return;
		};

		let state = self.state.clone();
		self.listen(&window, "mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				state
					.borrow_mut()
					.on_pointer_move(ev.client_x() as f64, ev.client_y() as f64);
			}
		});

		let state = self.state.clone();
		self.listen(&window, "resize", move |_: Event| {
			if let Some((w, h)) = web_sys::window().as_ref().and_then(window_size) {
				state.borrow_mut().on_resize(w, h);
			}
		});

		let (state, frame, pending, running) = (
			self.state.clone(),
			self.frame.clone(),
			self.pending.clone(),
			self.running.clone(),
		);
		*self.frame.borrow_mut() = Some(Closure::new(move || {
			pending.set(None);
			if !running.get() {
				return;
			}
			// Surface errors only skip this frame; the next tick retries.
			let _ = state.borrow_mut().frame(js_sys::Date::now());
			if let Some(window) = web_sys::window() {
				pending.set(request_frame(&window, &frame));
			}
		}));

		self.running.set(true);
		self.pending.set(request_frame(&window, &self.frame));

		let state = self.state.borrow();
		info!(
			"backdrop: started {} theme with {} particles",
			state.mode().as_str(),
			state.field.len()
		);
	}

	fn listen(
		&mut self,
		window: &Window,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) {
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		match window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
			Ok(()) => self.listeners.push((event, closure)),
			Err(_) => warn!("backdrop: could not subscribe to {event}"),
		}
	}

	/// Cancel the pending frame, release listeners and drop the frame closure.
	/// Safe to call more than once.
	pub fn stop(&mut self) {
		if !self.running.replace(false) {
			return;
		}

		let window = web_sys::window();
		if let (Some(window), Some(id)) = (&window, self.pending.take()) {
			let _ = window.cancel_animation_frame(id);
		}
		for (event, closure) in self.listeners.drain(..) {
			if let Some(window) = &window {
				let _ = window
					.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
			}
		}
		// Breaks the closure's reference cycle through `frame`.
		self.frame.borrow_mut().take();

		info!("backdrop: stopped {} theme", self.state.borrow().mode().as_str());
	}
}

impl Drop for BackdropLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
