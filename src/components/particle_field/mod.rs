//! Animated particle field background.
//!
//! Renders a decorative full-viewport canvas with:
//! - Small pulsing particles pushed away by the pointer, with drag
//! - Faint lines between nearby particles and from particles to the pointer
//! - A handful of large, slowly drifting glow orbs
//! - Toroidal wrapping at the viewport edges
//!
//! The simulation ([`FieldState`]) and the drawing ([`render`]) are plain
//! Rust; only [`ParticleBackground`] talks to the browser.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_site::components::particle_field::ParticleBackground;
//!
//! view! { <ParticleBackground /> }
//! ```

mod component;
pub mod particles;
pub mod render;
pub mod state;
pub mod theme;

pub use component::{ParticleBackground, attach, detach};
pub use particles::{Cursor, GlowOrb, Particle, Viewport};
pub use render::{CanvasSurface, GradientStop, Surface};
pub use state::{FieldPhase, FieldState};
pub use theme::{Color, FieldStyle};
