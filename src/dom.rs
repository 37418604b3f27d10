//! Browser plumbing shared by the animated components.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

/// Whether the user asked the platform to minimize animation.
pub fn prefers_reduced_motion() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
		.is_some_and(|mq| mq.matches())
}

/// Inner size of the window in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// The canvas' 2D context, if the browser provides one.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// A `requestAnimationFrame` loop plus the window listeners that feed it.
///
/// Everything is released by [`FrameLoop::stop`]: the pending frame is
/// cancelled, listeners are detached and the closures dropped. A stopped
/// loop never schedules again.
#[derive(Default)]
pub struct FrameLoop {
	frame_id: Option<i32>,
	tick: Option<Closure<dyn FnMut(f64)>>,
	listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
	stopped: bool,
}

impl FrameLoop {
	/// Whether the loop was started and not stopped yet.
	pub fn is_running(&self) -> bool {
		self.tick.is_some() && !self.stopped
	}

	/// Subscribes `handler` to a window event until [`FrameLoop::stop`].
	pub fn listen(
		&mut self,
		window: &Window,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) {
		if self.stopped {
			return;
		}
		let cb = Closure::<dyn FnMut(Event)>::new(handler);
		if window
			.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
			.is_ok()
		{
			self.listeners.push((event, cb));
		}
	}

	/// Starts calling `on_frame` with the frame timestamp (ms) once per
	/// display refresh. Returning `false` ends the loop.
	pub fn start(this: &Rc<RefCell<Self>>, mut on_frame: impl FnMut(f64) -> bool + 'static) {
		let weak = Rc::downgrade(this);
		let tick = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
			let Some(frame_loop) = weak.upgrade() else {
				return;
			};
			frame_loop.borrow_mut().frame_id = None;
			if on_frame(timestamp) {
				frame_loop.borrow_mut().schedule();
			}
		});

		let mut frame_loop = this.borrow_mut();
		if frame_loop.stopped {
			return;
		}
		frame_loop.tick = Some(tick);
		frame_loop.schedule();
	}

	fn schedule(&mut self) {
		if self.stopped {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		self.frame_id = self
			.tick
			.as_ref()
			.and_then(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
	}

	/// Cancels the pending frame and detaches every listener.
	pub fn stop(&mut self) {
		self.stopped = true;
		let window = web_sys::window();
		if let (Some(id), Some(w)) = (self.frame_id.take(), window.as_ref()) {
			let _ = w.cancel_animation_frame(id);
		}
		for (event, cb) in self.listeners.drain(..) {
			if let Some(w) = window.as_ref() {
				let _ = w.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
			}
		}
		self.tick = None;
	}
}
