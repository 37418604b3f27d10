//! Particle field simulation state and lifecycle.
//!
//! One [`FieldState`] belongs to one mounted background. It owns both
//! populations, the last known cursor position and the frame counter. The
//! host drives it through three inbound events (resize, pointer move, frame)
//! and finally [`FieldState::dispose`]s it on unmount.

use log::{debug, info};
use rand::Rng;

use super::particles::{
	Cursor, GlowOrb, Particle, Viewport, orb_count, particle_count, seed_orbs, seed_particles,
};
use super::theme::FieldStyle;

/// Lifecycle of a particle field instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
	/// Mounted, no populations yet.
	Uninitialized,
	/// Populations seeded; frames and pointer events are consumed.
	Running,
	/// Unmounted. Terminal.
	TornDown,
}

/// Core field state, mutated once per animation frame.
#[derive(Clone, Debug)]
pub struct FieldState {
	pub style: FieldStyle,
	pub viewport: Viewport,
	pub particles: Vec<Particle>,
	pub orbs: Vec<GlowOrb>,
	pub cursor: Cursor,
	pub frame: u64,
	reduced_motion: bool,
	phase: FieldPhase,
}

impl FieldState {
	pub fn new(style: FieldStyle, reduced_motion: bool) -> Self {
		Self {
			style,
			viewport: Viewport::default(),
			particles: Vec::new(),
			orbs: Vec::new(),
			cursor: Cursor::OFFSCREEN,
			frame: 0,
			reduced_motion,
			phase: FieldPhase::Uninitialized,
		}
	}

	pub fn phase(&self) -> FieldPhase {
		self.phase
	}

	/// Seeds both populations for the current viewport, replacing any
	/// existing ones.
	pub fn seed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		let n = particle_count(self.viewport, self.reduced_motion, &self.style.particles);
		let m = orb_count(self.reduced_motion, &self.style.orbs);
		self.particles = seed_particles(rng, n, self.viewport, &self.style);
		self.orbs = seed_orbs(rng, m, self.viewport, &self.style);
		info!(
			"particle-field: seeded {} particles, {} orbs for {}x{}",
			n, m, self.viewport.width, self.viewport.height
		);
	}

	/// Applies a new viewport size.
	///
	/// Existing populations are kept as they are; elements left outside the
	/// new bounds are brought back by their next wrap check. Only an empty
	/// particle population is reseeded.
	pub fn resize<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
		if self.phase == FieldPhase::TornDown {
			return;
		}
		self.viewport = Viewport::new(width, height);
		if self.particles.is_empty() {
			self.seed(rng);
		}
		if self.phase == FieldPhase::Uninitialized {
			debug!("particle-field: running");
			self.phase = FieldPhase::Running;
		}
	}

	/// Records the latest pointer position.
	pub fn set_cursor(&mut self, x: f64, y: f64) {
		if self.phase != FieldPhase::TornDown {
			self.cursor = Cursor { x, y };
		}
	}

	/// Advances the simulation by one frame: orbs drift and wrap, particles
	/// are repelled by the cursor, damped, moved and wrapped.
	pub fn step(&mut self) {
		if self.phase != FieldPhase::Running {
			return;
		}
		self.frame = self.frame.wrapping_add(1);

		let viewport = self.viewport;
		for orb in &mut self.orbs {
			orb.advance(viewport);
		}

		let cursor = self.cursor;
		for p in &mut self.particles {
			p.advance(cursor, viewport, &self.style);
		}
	}

	/// Tears the field down. Subsequent events are ignored.
	pub fn dispose(&mut self) {
		if self.phase == FieldPhase::TornDown {
			return;
		}
		self.phase = FieldPhase::TornDown;
		self.particles.clear();
		self.orbs.clear();
		info!("particle-field: torn down after {} frames", self.frame);
	}
}
