//! portfolio-site: client for a personal portfolio site.
//!
//! This crate provides the WASM front end's decorative layer: an animated,
//! pointer-reactive particle field behind the page and a soft glow trailing
//! the cursor. Page content sits on top of both.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Selects the browser entropy source for `rand`.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

pub mod components;
pub mod dom;

pub use components::mouse_glow::MouseGlow;
pub use components::particle_field::{FieldStyle, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-site: logging initialized");
}

/// Main application component.
/// Layers the animated background under the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Sai Gowtham Padarthi" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="site" style="position: relative; min-height: 100vh;">
			<ParticleBackground />
			<MouseGlow />
			<main class="site-content" style="position: relative; z-index: 10;">
				<h1>"Hi, I'm Sai Gowtham"</h1>
				<p class="subtitle">".NET Full Stack Developer"</p>
				<a href="/resume" class="resume-link">"Download resume"</a>
			</main>
		</div>
	}
}
