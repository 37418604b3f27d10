//! Damped spring used to trail the pointer.

/// Longest step integrated in one go. Frames arriving after a stall (e.g. a
/// background tab) are treated as this long.
pub const MAX_STEP: f64 = 1.0 / 30.0;

/// One-dimensional damped spring with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
	pub value: f64,
	pub velocity: f64,
	pub target: f64,
	pub stiffness: f64,
	pub damping: f64,
}

impl Spring {
	pub fn new(value: f64, stiffness: f64, damping: f64) -> Self {
		Self {
			value,
			velocity: 0.0,
			target: value,
			stiffness,
			damping,
		}
	}

	/// Integrates `dt` seconds with semi-implicit Euler.
	pub fn step(&mut self, dt: f64) {
		let dt = dt.clamp(0.0, MAX_STEP);
		let accel = -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
		self.velocity += accel * dt;
		self.value += self.velocity * dt;
	}

	/// Moves straight to the target and stops.
	pub fn snap(&mut self) {
		self.value = self.target;
		self.velocity = 0.0;
	}

	/// Close enough to rest that further steps are invisible.
	pub fn settled(&self) -> bool {
		(self.value - self.target).abs() < 0.01 && self.velocity.abs() < 0.01
	}
}

/// Two springs trailing the pointer, plus whether the glow should show.
#[derive(Clone, Copy, Debug)]
pub struct GlowFollower {
	pub x: Spring,
	pub y: Spring,
	/// Half the glow's edge length; the glow is centered on the springs.
	pub half_size: f64,
	visible: bool,
	last_timestamp: Option<f64>,
}

impl GlowFollower {
	pub fn new(stiffness: f64, damping: f64, half_size: f64) -> Self {
		Self {
			x: Spring::new(0.0, stiffness, damping),
			y: Spring::new(0.0, stiffness, damping),
			half_size,
			visible: false,
			last_timestamp: None,
		}
	}

	/// Stays hidden until the pointer has moved at least once.
	pub fn visible(&self) -> bool {
		self.visible
	}

	pub fn set_target(&mut self, x: f64, y: f64) {
		self.x.target = x;
		self.y.target = y;
		self.visible = true;
	}

	/// Advances both springs to a frame timestamp in milliseconds.
	pub fn advance_to(&mut self, timestamp_ms: f64) {
		let dt = self
			.last_timestamp
			.map_or(0.0, |last| (timestamp_ms - last) / 1000.0);
		self.last_timestamp = Some(timestamp_ms);
		self.x.step(dt);
		self.y.step(dt);
	}

	/// Jumps to the pointer without animating.
	pub fn snap(&mut self) {
		self.x.snap();
		self.y.snap();
	}

	pub fn settled(&self) -> bool {
		self.x.settled() && self.y.settled()
	}

	/// Top-left corner of the glow element.
	pub fn offset(&self) -> (f64, f64) {
		(self.x.value - self.half_size, self.y.value - self.half_size)
	}
}
