//! Colors and tuning constants for the particle field.
//!
//! Every number that shapes the look or the physics of the field lives in
//! [`FieldStyle`], so the simulation and the renderer never hard-code values.

use std::fmt::Write;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		let mut css = String::new();
		self.write_css(&mut css);
		css
	}

	/// Replaces the contents of `out` with the CSS form of this color.
	pub fn write_css(self, out: &mut String) {
		out.clear();
		let _ = if (self.a - 1.0).abs() < 0.001 {
			write!(out, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			write!(out, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		};
	}
}

/// The fixed five-color palette shared by particles and orbs.
#[derive(Clone, Debug)]
pub struct FieldPalette {
	pub colors: [Color; 5],
}

impl FieldPalette {
	/// Cyan, violet, teal, blue, pink.
	pub const fn neon() -> Self {
		Self {
			colors: [
				Color::rgb(0, 210, 255),
				Color::rgb(168, 85, 247),
				Color::rgb(0, 200, 150),
				Color::rgb(59, 130, 246),
				Color::rgb(236, 72, 153),
			],
		}
	}

	/// Color at `index`, cycling through the palette.
	pub fn get(&self, index: usize) -> Color {
		self.colors[index % self.colors.len()]
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}
}

impl Default for FieldPalette {
	fn default() -> Self {
		Self::neon()
	}
}

/// Three-stop radial falloff: full opacity at the center, `mid_alpha`
/// of it at `mid_offset`, transparent at the edge.
#[derive(Clone, Copy, Debug)]
pub struct Falloff {
	pub mid_offset: f64,
	pub mid_alpha: f64,
}

/// Particle population and motion parameters.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Viewport area (px²) allotted to each particle.
	pub area_per_particle: f64,
	/// Upper bound on the particle count.
	pub max_count: usize,
	/// Fixed count when reduced motion is requested.
	pub reduced_count: usize,
	/// Initial velocity components are drawn from `[-spread/2, spread/2)`.
	pub velocity_spread: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	pub pulse_speed_min: f64,
	pub pulse_speed_max: f64,
	/// Per-frame velocity multiplier.
	pub damping: f64,
	/// Glow radius as a multiple of the particle radius.
	pub glow_factor: f64,
	pub glow: Falloff,
}

/// Glow orb population and motion parameters.
#[derive(Clone, Debug)]
pub struct OrbStyle {
	pub count: usize,
	pub reduced_count: usize,
	pub velocity_spread: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	pub opacity_min: f64,
	pub opacity_max: f64,
	/// Phase advance of the opacity pulse per frame.
	pub pulse_rate: f64,
	pub glow: Falloff,
}

/// Pointer repulsion and the cursor line.
#[derive(Clone, Debug)]
pub struct CursorStyle {
	/// Forces apply strictly inside this distance.
	pub repel_radius: f64,
	/// Forces apply strictly outside this distance.
	pub repel_min_distance: f64,
	pub repel_strength: f64,
	pub line_radius: f64,
	pub line_opacity: f64,
	pub line_width: f64,
}

/// Lines between nearby particles.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	pub max_distance: f64,
	pub opacity: f64,
	pub width: f64,
}

/// Complete particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	pub palette: FieldPalette,
	pub particles: ParticleStyle,
	pub orbs: OrbStyle,
	pub cursor: CursorStyle,
	pub links: LinkStyle,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			palette: FieldPalette::neon(),
			particles: ParticleStyle {
				area_per_particle: 8000.0,
				max_count: 140,
				reduced_count: 30,
				velocity_spread: 0.4,
				radius_min: 0.5,
				radius_max: 2.5,
				opacity_min: 0.15,
				opacity_max: 0.65,
				pulse_speed_min: 0.005,
				pulse_speed_max: 0.025,
				damping: 0.99,
				glow_factor: 3.0,
				glow: Falloff {
					mid_offset: 0.4,
					mid_alpha: 0.3,
				},
			},
			orbs: OrbStyle {
				count: 5,
				reduced_count: 2,
				velocity_spread: 0.2,
				radius_min: 100.0,
				radius_max: 300.0,
				opacity_min: 0.03,
				opacity_max: 0.06,
				pulse_rate: 0.01,
				glow: Falloff {
					mid_offset: 0.5,
					mid_alpha: 0.4,
				},
			},
			cursor: CursorStyle {
				repel_radius: 250.0,
				repel_min_distance: 1.0,
				repel_strength: 0.08,
				line_radius: 300.0,
				line_opacity: 0.15,
				line_width: 0.8,
			},
			links: LinkStyle {
				max_distance: 150.0,
				opacity: 0.08,
				width: 0.5,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_uses_hex_when_opaque() {
		assert_eq!(Color::rgb(0, 210, 255).to_css(), "#00d2ff");
	}

	#[test]
	fn css_uses_rgba_when_translucent() {
		let c = Color::rgb(236, 72, 153).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(236, 72, 153, 0.25)");
	}

	#[test]
	fn write_css_reuses_buffer() {
		let mut buf = String::with_capacity(32);
		Color::rgb(0, 210, 255).with_alpha(0.5).write_css(&mut buf);
		assert_eq!(buf, "rgba(0, 210, 255, 0.5)");
		let cap = buf.capacity();
		Color::rgb(59, 130, 246).write_css(&mut buf);
		assert_eq!(buf, "#3b82f6");
		assert_eq!(buf.capacity(), cap);
	}

	#[test]
	fn palette_cycles() {
		let palette = FieldPalette::neon();
		assert_eq!(palette.get(0), palette.get(5));
		assert_eq!(palette.get(3), Color::rgb(59, 130, 246));
	}
}
