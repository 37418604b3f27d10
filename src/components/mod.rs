//! Decorative, pointer-reactive background components.

pub mod mouse_glow;
pub mod particle_field;
