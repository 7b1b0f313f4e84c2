//! Owned simulation state: particles, pointer, configuration and RNG.
//!
//! Created once when the component mounts, then mutated by the animation
//! loop, the resize listener and the pointer listener. All three run on the
//! browser's single event loop, so state is never observed mid-update.

use log::debug;
use rand::rngs::StdRng;

use super::config::ParticleConfig;
use super::force;
use super::particles::{ParticleField, Pointer};

/// Everything one particle background needs between frames.
pub struct ParticleFieldState {
	pub field: ParticleField,
	pub pointer: Pointer,
	pub config: ParticleConfig,
	rng: StdRng,
}

impl ParticleFieldState {
	pub fn new(config: ParticleConfig, width: f64, height: f64, mut rng: StdRng) -> Self {
		let field = ParticleField::populate(config.count, width, height, &config, &mut rng);
		Self {
			field,
			pointer: Pointer::OFFSCREEN,
			config,
			rng,
		}
	}

	/// Advances every particle by one frame.
	pub fn tick(&mut self) {
		let bounds = self.field.bounds();
		for p in &mut self.field.particles {
			force::update(p, &self.pointer, bounds, &self.config);
		}
	}

	/// Discards the current particles and repopulates for the new surface.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.field = ParticleField::populate(
			self.config.count,
			width,
			height,
			&self.config,
			&mut self.rng,
		);
		debug!(
			"particles: repopulated {} particles for {}x{}",
			self.field.len(),
			width,
			height
		);
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = Pointer::at(x, y);
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn state(width: f64, height: f64) -> ParticleFieldState {
		ParticleFieldState::new(
			ParticleConfig::default(),
			width,
			height,
			StdRng::seed_from_u64(3),
		)
	}

	#[test]
	fn test_tick_keeps_count_and_bounds() {
		let mut s = state(640.0, 480.0);
		s.set_pointer(320.0, 240.0);
		for _ in 0..500 {
			s.tick();
		}

		let bounds = s.field.bounds();
		assert_eq!(s.field.len(), 80);
		assert!(s.field.particles.iter().all(|p| bounds.contains(p.x, p.y)));
	}

	#[test]
	fn test_resize_repopulates_for_new_surface() {
		let mut s = state(1920.0, 1080.0);
		let before = s.field.particles.clone();
		s.resize(300.0, 200.0);

		assert_eq!(s.field.len(), before.len());
		assert_ne!(s.field.particles, before);
		assert!(s.field.particles.iter().all(|p| p.x < 300.0 && p.y < 200.0));
	}

	#[test]
	fn test_velocity_is_constant_across_frames() {
		let mut s = state(500.0, 500.0);
		let speeds: Vec<(f64, f64)> = s
			.field
			.particles
			.iter()
			.map(|p| (p.speed_x, p.speed_y))
			.collect();
		s.set_pointer(250.0, 250.0);
		s.tick();
		s.tick();

		let after: Vec<(f64, f64)> = s
			.field
			.particles
			.iter()
			.map(|p| (p.speed_x, p.speed_y))
			.collect();
		assert_eq!(speeds, after);
	}
}
