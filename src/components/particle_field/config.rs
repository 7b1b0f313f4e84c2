//! Tunable parameters for the particle field.

use super::theme::Color;

/// Particle population, motion and rendering parameters.
///
/// Ranges are half-open `(min, max)` pairs sampled uniformly at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
	/// Number of particles kept on the surface.
	pub count: usize,
	/// Dot radius range.
	pub size: (f64, f64),
	/// Each velocity component is drawn from `-max_speed..max_speed`.
	pub max_speed: f64,
	/// Dot alpha range.
	pub opacity: (f64, f64),
	/// Pairs closer than this are linked.
	pub link_distance: f64,
	/// Alpha of a link between two coincident particles.
	pub link_alpha: f64,
	/// Link stroke width in pixels.
	pub link_width: f64,
	/// Pointer influence radius.
	pub repulsion_radius: f64,
	/// Maximum per-frame displacement caused by the pointer.
	pub repulsion_strength: f64,
	pub color: Color,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			count: 80,
			size: (0.5, 2.5),
			max_speed: 0.25,
			opacity: (0.2, 0.7),
			link_distance: 150.0,
			link_alpha: 0.15,
			link_width: 0.5,
			repulsion_radius: 150.0,
			repulsion_strength: 2.0,
			color: Color::accent(),
		}
	}
}
