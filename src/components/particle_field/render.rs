//! Drawing for the particle field.
//!
//! Rendering goes through the [`Surface`] trait so the frame composition can
//! be checked without a browser. Draw order per frame:
//! 1. Glow orbs (radial gradients)
//! 2. For each particle: glow, core disc, links to later particles, cursor line

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::FieldState;
use super::theme::{Color, Falloff, FieldStyle};

/// One color stop of a radial gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	pub offset: f64,
	pub color: Color,
}

/// The immediate-mode 2D operations the field needs.
pub trait Surface {
	/// Clears the whole drawable area.
	fn clear(&mut self, width: f64, height: f64);
	/// Fills a disc with a radial gradient running from its center outwards.
	fn fill_radial(&mut self, x: f64, y: f64, radius: f64, stops: &[GradientStop; 3]);
	/// Fills a solid disc.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Strokes a straight line segment.
	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64);
}

/// [`Surface`] backed by a browser 2D context.
///
/// Colors are formatted into one reused buffer, so a frame allocates no
/// strings on the Rust side.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
	css: String,
}

impl CanvasSurface {
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self {
			ctx,
			css: String::with_capacity(32),
		}
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_radial(&mut self, x: f64, y: f64, radius: f64, stops: &[GradientStop; 3]) {
		let ctx = &self.ctx;
		let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		for stop in stops {
			stop.color.write_css(&mut self.css);
			let _ = gradient.add_color_stop(stop.offset as f32, &self.css);
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		color.write_css(&mut self.css);
		let ctx = &self.ctx;
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&self.css);
		ctx.fill();
	}

	fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, width: f64) {
		color.write_css(&mut self.css);
		let ctx = &self.ctx;
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.set_stroke_style_str(&self.css);
		ctx.set_line_width(width);
		ctx.stroke();
	}
}

/// Gradient stops for a glow of `color` at center opacity `alpha`.
pub fn falloff_stops(color: Color, alpha: f64, falloff: Falloff) -> [GradientStop; 3] {
	[
		GradientStop {
			offset: 0.0,
			color: color.with_alpha(alpha),
		},
		GradientStop {
			offset: falloff.mid_offset,
			color: color.with_alpha(alpha * falloff.mid_alpha),
		},
		GradientStop {
			offset: 1.0,
			color: color.with_alpha(0.0),
		},
	]
}

/// Opacity of the line between two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
pub fn link_opacity(distance: f64, pulse: f64, style: &FieldStyle) -> Option<f64> {
	let max = style.links.max_distance;
	(distance < max).then(|| style.links.opacity * (1.0 - distance / max) * pulse)
}

/// Opacity of the line from a particle to the cursor, or `None` when the
/// cursor is out of reach.
pub fn cursor_line_opacity(distance: f64, style: &FieldStyle) -> Option<f64> {
	let max = style.cursor.line_radius;
	(distance < max).then(|| style.cursor.line_opacity * (1.0 - distance / max))
}

fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x1 - x2, y1 - y2);
	(dx * dx + dy * dy).sqrt()
}

/// Renders the complete field for the current frame.
pub fn render<S: Surface + ?Sized>(state: &FieldState, surface: &mut S) {
	let style = &state.style;
	surface.clear(state.viewport.width, state.viewport.height);

	for (i, orb) in state.orbs.iter().enumerate() {
		let alpha = orb.pulsing_opacity(i, state.frame, &style.orbs);
		let stops = falloff_stops(orb.color, alpha, style.orbs.glow);
		surface.fill_radial(orb.x, orb.y, orb.radius, &stops);
	}

	for (i, p) in state.particles.iter().enumerate() {
		draw_particle(state, surface, i, p);
	}
}

fn draw_particle<S: Surface + ?Sized>(state: &FieldState, surface: &mut S, i: usize, p: &Particle) {
	let style = &state.style;
	let pulse = p.pulse(state.frame);
	let alpha = p.opacity * pulse;

	let stops = falloff_stops(p.color, alpha, style.particles.glow);
	surface.fill_radial(p.x, p.y, p.radius * style.particles.glow_factor, &stops);
	surface.fill_circle(p.x, p.y, p.radius, p.color.with_alpha(alpha));

	for other in &state.particles[i + 1..] {
		let d = distance(p.x, p.y, other.x, other.y);
		if let Some(a) = link_opacity(d, pulse, style) {
			surface.stroke_line(
				p.x,
				p.y,
				other.x,
				other.y,
				p.color.with_alpha(a),
				style.links.width,
			);
		}
	}

	let cursor = state.cursor;
	if let Some(a) = cursor_line_opacity(distance(p.x, p.y, cursor.x, cursor.y), style) {
		surface.stroke_line(
			p.x,
			p.y,
			cursor.x,
			cursor.y,
			p.color.with_alpha(a),
			style.cursor.line_width,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stops_fade_to_transparent() {
		let stops = falloff_stops(
			Color::rgb(0, 210, 255),
			0.05,
			Falloff {
				mid_offset: 0.5,
				mid_alpha: 0.4,
			},
		);
		assert_eq!(stops[0].color.a, 0.05);
		assert!((stops[1].color.a - 0.02).abs() < 1e-12);
		assert_eq!(stops[1].offset, 0.5);
		assert_eq!(stops[2].color.a, 0.0);
	}

	#[test]
	fn cursor_line_fades_with_distance() {
		let style = FieldStyle::default();
		assert_eq!(cursor_line_opacity(0.0, &style), Some(0.15));
		assert!(cursor_line_opacity(299.0, &style).is_some_and(|a| a > 0.0));
		assert_eq!(cursor_line_opacity(300.0, &style), None);
	}
}
