//! Leptos component wrapping the particle field canvas.
//!
//! The canvas is fixed over the whole viewport and ignores pointer input; the
//! cursor is tracked through a window-level `mousemove` listener instead. An
//! animation loop runs via `requestAnimationFrame`, stepping the simulation
//! and redrawing each frame until the component is unmounted.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, Window};

use super::render::{self, CanvasSurface};
use super::state::{FieldPhase, FieldState};
use super::theme::FieldStyle;
use crate::dom::{self, FrameLoop};

/// Matches the canvas backing store to the window and lets the field react
/// to the new size.
fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement, state: &RefCell<FieldState>) {
	let Some((w, h)) = dom::viewport_size(window) else {
		return;
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	state.borrow_mut().resize(&mut rand::rng(), w, h);
}

/// Starts the field on `canvas`: sizes it, subscribes to window resize and
/// pointer moves, and begins the per-frame step and redraw.
///
/// Returns `false` and leaves everything untouched when the canvas has no
/// 2D context, when the loop already runs or when the field was torn down.
pub fn attach(
	canvas: &HtmlCanvasElement,
	state: &Rc<RefCell<FieldState>>,
	frame_loop: &Rc<RefCell<FrameLoop>>,
) -> bool {
	if frame_loop.borrow().is_running() || state.borrow().phase() == FieldPhase::TornDown {
		return false;
	}
	let Some(window) = web_sys::window() else {
		return false;
	};
	let Some(ctx) = dom::context_2d(canvas) else {
		warn!("particle-field: no 2d context, animation disabled");
		return false;
	};

	fit_to_viewport(&window, canvas, state);

	{
		let mut frame_loop = frame_loop.borrow_mut();

		let (state_resize, canvas_resize) = (state.clone(), canvas.clone());
		frame_loop.listen(&window, "resize", move |_: Event| {
			if let Some(win) = web_sys::window() {
				fit_to_viewport(&win, &canvas_resize, &state_resize);
			}
		});

		let state_pointer = state.clone();
		frame_loop.listen(&window, "mousemove", move |ev: Event| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				state_pointer
					.borrow_mut()
					.set_cursor(ev.client_x() as f64, ev.client_y() as f64);
			}
		});
	}

	let state_anim = state.clone();
	let mut surface = CanvasSurface::new(ctx);
	FrameLoop::start(frame_loop, move |_| {
		let mut state = state_anim.borrow_mut();
		if state.phase() == FieldPhase::TornDown {
			return false;
		}
		state.step();
		render::render(&state, &mut surface);
		true
	});
	true
}

/// Cancels the pending frame, detaches both listeners and disposes the
/// field. Safe to call more than once.
pub fn detach(state: &RefCell<FieldState>, frame_loop: &RefCell<FrameLoop>) {
	frame_loop.borrow_mut().stop();
	state.borrow_mut().dispose();
}

/// Full-viewport animated background of drifting particles and glow orbs.
///
/// Particles are pushed away from the pointer and linked to their close
/// neighbours. When the platform requests reduced motion the populations are
/// much smaller. Pass a custom `style` to retune colors or physics.
#[component]
pub fn ParticleBackground(#[prop(optional)] style: Option<FieldStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let reduced_motion = dom::prefers_reduced_motion();
	let state = Rc::new(RefCell::new(FieldState::new(
		style.unwrap_or_default(),
		reduced_motion,
	)));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));
	let (state_init, loop_init) = (state.clone(), frame_loop.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		if attach(&canvas, &state_init, &loop_init) {
			info!(
				"particle-field: mounted{}",
				if reduced_motion { " (reduced motion)" } else { "" }
			);
		}
	});

	let teardown = SendWrapper::new((state, frame_loop));
	on_cleanup(move || {
		let (state, frame_loop) = teardown.take();
		detach(&state, &frame_loop);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			data-testid="particle-background"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}
