// Browser tests for the frame loop and particle field teardown.
// Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use portfolio_site::components::particle_field::{FieldPhase, FieldState, FieldStyle, attach, detach};
use portfolio_site::dom::{self, FrameLoop};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn window() -> web_sys::Window {
	web_sys::window().unwrap()
}

fn canvas() -> HtmlCanvasElement {
	window()
		.document()
		.unwrap()
		.create_element("canvas")
		.unwrap()
		.dyn_into()
		.unwrap()
}

/// Resolves on the next display refresh.
async fn next_frame() {
	let promise = js_sys::Promise::new(&mut |resolve, _reject| {
		window().request_animation_frame(&resolve).unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

async fn frames(n: usize) {
	for _ in 0..n {
		next_frame().await;
	}
}

fn dispatch(event: &str) {
	window().dispatch_event(&Event::new(event).unwrap()).unwrap();
}

fn counting_loop() -> (Rc<RefCell<FrameLoop>>, Rc<Cell<u32>>) {
	let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));
	let count = Rc::new(Cell::new(0));
	let c = count.clone();
	FrameLoop::start(&frame_loop, move |_| {
		c.set(c.get() + 1);
		true
	});
	(frame_loop, count)
}

// ---------------------------------------------------------------------------
// FrameLoop
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
async fn stop_cancels_pending_frame() {
	let (frame_loop, count) = counting_loop();
	assert!(frame_loop.borrow().is_running());
	frames(2).await;
	assert!(count.get() > 0);

	frame_loop.borrow_mut().stop();
	let seen = count.get();
	frames(3).await;
	assert_eq!(count.get(), seen);
	assert!(!frame_loop.borrow().is_running());
}

#[wasm_bindgen_test]
fn resize_after_stop_is_not_handled() {
	let mut frame_loop = FrameLoop::default();
	let hits = Rc::new(Cell::new(0));
	let h = hits.clone();
	frame_loop.listen(&window(), "resize", move |_| h.set(h.get() + 1));

	dispatch("resize");
	assert_eq!(hits.get(), 1);

	frame_loop.stop();
	dispatch("resize");
	assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
async fn start_on_stopped_loop_never_runs() {
	let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));
	frame_loop.borrow_mut().stop();

	let count = Rc::new(Cell::new(0));
	let c = count.clone();
	FrameLoop::start(&frame_loop, move |_| {
		c.set(c.get() + 1);
		true
	});
	assert!(!frame_loop.borrow().is_running());

	let hits = Rc::new(Cell::new(0));
	let h = hits.clone();
	frame_loop
		.borrow_mut()
		.listen(&window(), "resize", move |_| h.set(h.get() + 1));
	dispatch("resize");

	frames(2).await;
	assert_eq!(count.get(), 0);
	assert_eq!(hits.get(), 0);
}

// ---------------------------------------------------------------------------
// Particle field
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn canvas_without_2d_context_is_left_alone() {
	let canvas = canvas();
	// A canvas holds one context kind for its lifetime.
	assert!(canvas.get_context("bitmaprenderer").unwrap().is_some());
	assert!(dom::context_2d(&canvas).is_none());

	let state = Rc::new(RefCell::new(FieldState::new(FieldStyle::default(), false)));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));
	assert!(!attach(&canvas, &state, &frame_loop));
	assert!(!frame_loop.borrow().is_running());
	assert_eq!(state.borrow().phase(), FieldPhase::Uninitialized);
	assert!(state.borrow().particles.is_empty());
}

#[wasm_bindgen_test]
async fn detach_freezes_the_field() {
	let canvas = canvas();
	let state = Rc::new(RefCell::new(FieldState::new(FieldStyle::default(), false)));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));

	assert!(attach(&canvas, &state, &frame_loop));
	assert_eq!(state.borrow().phase(), FieldPhase::Running);
	// A second attach while running is refused.
	assert!(!attach(&canvas, &state, &frame_loop));

	frames(3).await;
	assert!(state.borrow().frame > 0);

	detach(&state, &frame_loop);
	let frame = state.borrow().frame;
	canvas.set_width(1);
	dispatch("resize");
	frames(3).await;

	assert_eq!(state.borrow().phase(), FieldPhase::TornDown);
	assert_eq!(state.borrow().frame, frame);
	assert_eq!(canvas.width(), 1);
	assert!(!frame_loop.borrow().is_running());
	assert!(!attach(&canvas, &state, &frame_loop));
}
