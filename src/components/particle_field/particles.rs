//! Particle and glow orb populations, plus the per-element physics.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::{Color, CursorStyle, FieldStyle, OrbStyle, ParticleStyle};

/// Drawable area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn area(&self) -> f64 {
		self.width * self.height
	}
}

/// Last known pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
	pub x: f64,
	pub y: f64,
}

impl Cursor {
	/// Before the first pointer event: far enough away that no particle
	/// reacts to it.
	pub const OFFSCREEN: Cursor = Cursor {
		x: -1000.0,
		y: -1000.0,
	};
}

impl Default for Cursor {
	fn default() -> Self {
		Self::OFFSCREEN
	}
}

/// A small drifting dot with a faint glow.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
	pub pulse_speed: f64,
	pub pulse_phase: f64,
}

impl Particle {
	/// Pushes the particle away from the cursor, applies drag and moves it,
	/// wrapping at the viewport edges.
	pub fn advance(&mut self, cursor: Cursor, viewport: Viewport, style: &FieldStyle) {
		let (fx, fy) = repulsion(self.x - cursor.x, self.y - cursor.y, &style.cursor);
		self.vx = (self.vx + fx) * style.particles.damping;
		self.vy = (self.vy + fy) * style.particles.damping;
		self.x = wrap(self.x + self.vx, viewport.width, 0.0);
		self.y = wrap(self.y + self.vy, viewport.height, 0.0);
	}

	/// Opacity multiplier in `[0.2, 1.0]` for the given frame.
	pub fn pulse(&self, frame: u64) -> f64 {
		0.6 + 0.4 * (frame as f64 * self.pulse_speed + self.pulse_phase).sin()
	}
}

/// A large, faint, slowly drifting radial glow.
#[derive(Clone, Debug)]
pub struct GlowOrb {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub color: Color,
}

impl GlowOrb {
	/// Moves the orb, wrapping once it is a full radius past an edge.
	pub fn advance(&mut self, viewport: Viewport) {
		self.x = wrap(self.x + self.vx, viewport.width, self.radius);
		self.y = wrap(self.y + self.vy, viewport.height, self.radius);
	}

	/// Center opacity for the given frame. `index` offsets the phase so orbs
	/// do not breathe in unison.
	pub fn pulsing_opacity(&self, index: usize, frame: u64, style: &OrbStyle) -> f64 {
		self.opacity * (0.7 + 0.3 * (frame as f64 * style.pulse_rate + index as f64).sin())
	}
}

/// Toroidal wrap of one coordinate over `[-margin, max + margin]`.
///
/// A value past one bound lands exactly on the opposite bound.
pub fn wrap(value: f64, max: f64, margin: f64) -> f64 {
	if value < -margin {
		max + margin
	} else if value > max + margin {
		-margin
	} else {
		value
	}
}

/// Velocity change pushing a particle away from the cursor.
///
/// `(dx, dy)` is the vector from the cursor to the particle. Outside the
/// open interval `(repel_min_distance, repel_radius)` no force applies.
pub fn repulsion(dx: f64, dy: f64, style: &CursorStyle) -> (f64, f64) {
	let dist = (dx * dx + dy * dy).sqrt();
	if dist > style.repel_min_distance && dist < style.repel_radius {
		let force = (style.repel_radius - dist) / style.repel_radius * style.repel_strength;
		(dx / dist * force, dy / dist * force)
	} else {
		(0.0, 0.0)
	}
}

/// Number of particles for a viewport.
pub fn particle_count(viewport: Viewport, reduced_motion: bool, style: &ParticleStyle) -> usize {
	if reduced_motion {
		return style.reduced_count;
	}
	let by_area = (viewport.area().max(0.0) / style.area_per_particle).floor() as usize;
	by_area.min(style.max_count)
}

/// Number of glow orbs.
pub fn orb_count(reduced_motion: bool, style: &OrbStyle) -> usize {
	if reduced_motion {
		style.reduced_count
	} else {
		style.count
	}
}

/// Creates `count` particles scattered uniformly over the viewport.
pub fn seed_particles<R: Rng + ?Sized>(
	rng: &mut R,
	count: usize,
	viewport: Viewport,
	style: &FieldStyle,
) -> Vec<Particle> {
	let ps = &style.particles;
	(0..count)
		.map(|_| {
			let color = style.palette.get(rng.random_range(0..style.palette.len()));
			Particle {
				x: rng.random::<f64>() * viewport.width,
				y: rng.random::<f64>() * viewport.height,
				vx: (rng.random::<f64>() - 0.5) * ps.velocity_spread,
				vy: (rng.random::<f64>() - 0.5) * ps.velocity_spread,
				radius: lerp(ps.radius_min, ps.radius_max, rng.random()),
				opacity: lerp(ps.opacity_min, ps.opacity_max, rng.random()),
				color,
				pulse_speed: lerp(ps.pulse_speed_min, ps.pulse_speed_max, rng.random()),
				pulse_phase: rng.random::<f64>() * TAU,
			}
		})
		.collect()
}

/// Creates `count` orbs; colors cycle through the palette by index.
pub fn seed_orbs<R: Rng + ?Sized>(
	rng: &mut R,
	count: usize,
	viewport: Viewport,
	style: &FieldStyle,
) -> Vec<GlowOrb> {
	let os = &style.orbs;
	(0..count)
		.map(|i| GlowOrb {
			x: rng.random::<f64>() * viewport.width,
			y: rng.random::<f64>() * viewport.height,
			radius: lerp(os.radius_min, os.radius_max, rng.random()),
			color: style.palette.get(i),
			vx: (rng.random::<f64>() - 0.5) * os.velocity_spread,
			vy: (rng.random::<f64>() - 0.5) * os.velocity_spread,
			opacity: lerp(os.opacity_min, os.opacity_max, rng.random()),
		})
		.collect()
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
	min + (max - min) * t
}
