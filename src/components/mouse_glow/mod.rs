//! Soft glow trailing the pointer.
//!
//! A large radial gradient element that follows the cursor through a damped
//! spring, so it lags slightly behind fast movements. Hidden until the first
//! pointer movement.

mod spring;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

use crate::dom::{self, FrameLoop};

pub use spring::{GlowFollower, MAX_STEP, Spring};

const STIFFNESS: f64 = 50.0;
const DAMPING: f64 = 20.0;
const SIZE: f64 = 400.0;
const OPACITY: f64 = 0.15;

/// Pointer-following glow overlay.
#[component]
pub fn MouseGlow() -> impl IntoView {
	let glow_ref = NodeRef::<leptos::html::Div>::new();
	let reduced_motion = dom::prefers_reduced_motion();
	let follower = Rc::new(RefCell::new(GlowFollower::new(
		STIFFNESS,
		DAMPING,
		SIZE / 2.0,
	)));
	let frame_loop = Rc::new(RefCell::new(FrameLoop::default()));
	let (follower_init, loop_init) = (follower.clone(), frame_loop.clone());

	Effect::new(move |_| {
		let Some(el) = glow_ref.get() else {
			return;
		};
		if loop_init.borrow().is_running() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};

		let follower_pointer = follower_init.clone();
		loop_init
			.borrow_mut()
			.listen(&window, "mousemove", move |ev: Event| {
				if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
					follower_pointer
						.borrow_mut()
						.set_target(ev.client_x() as f64, ev.client_y() as f64);
				}
			});

		let follower_anim = follower_init.clone();
		FrameLoop::start(&loop_init, move |timestamp| {
			let mut f = follower_anim.borrow_mut();
			if !f.visible() {
				return true;
			}
			if reduced_motion {
				f.snap();
			} else if f.settled() {
				f.advance_to(timestamp);
				return true;
			} else {
				f.advance_to(timestamp);
			}
			let (x, y) = f.offset();
			let style = web_sys::HtmlElement::style(&el);
			let _ = style.set_property("transform", &format!("translate({x}px, {y}px)"));
			let _ = style.set_property("opacity", &OPACITY.to_string());
			true
		});
		debug!("mouse-glow: mounted");
	});

	let teardown = SendWrapper::new(frame_loop);
	on_cleanup(move || {
		teardown.take().borrow_mut().stop();
	});

	view! {
		<div
			node_ref=glow_ref
			class="mouse-glow"
			style=format!(
				"position: fixed; left: 0; top: 0; width: {SIZE}px; height: {SIZE}px; \
				 border-radius: 9999px; pointer-events: none; z-index: 1; opacity: 0; \
				 background: radial-gradient(circle, rgba(0, 210, 255, 0.08) 0%, transparent 70%);"
			)
		/>
	}
}
