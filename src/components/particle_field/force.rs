//! Per-frame motion: pointer repulsion, constant drift, toroidal wraparound.

use super::config::ParticleConfig;
use super::particles::{Bounds, Particle, Pointer};

/// Offset pushing a particle away from the pointer.
///
/// `dx`/`dy` point from the particle to the pointer. Distances of exactly zero
/// or at/after `radius` produce no offset.
pub fn repulsion(dx: f64, dy: f64, radius: f64, strength: f64) -> (f64, f64) {
	let dist = (dx * dx + dy * dy).sqrt();
	if dist <= 0.0 || dist >= radius {
		return (0.0, 0.0);
	}
	let force = (radius - dist) / radius * strength;
	(-(dx / dist) * force, -(dy / dist) * force)
}

/// Keeps `value` inside `[0, extent)`.
///
/// A coordinate past the far edge restarts at 0; one below 0 re-enters at the
/// far edge, just inside `extent`.
pub fn wrap(value: f64, extent: f64) -> f64 {
	if extent <= 0.0 || !value.is_finite() {
		return 0.0;
	}
	if value >= extent {
		0.0
	} else if value < 0.0 {
		far_edge(extent)
	} else {
		value
	}
}

/// Largest coordinate strictly below `extent`.
fn far_edge(extent: f64) -> f64 {
	let edge = extent - extent * f64::EPSILON;
	if edge < extent { edge } else { 0.0 }
}

/// Advances one particle by a single frame.
pub fn update(particle: &mut Particle, pointer: &Pointer, bounds: Bounds, config: &ParticleConfig) {
	let (ox, oy) = repulsion(
		pointer.x - particle.x,
		pointer.y - particle.y,
		config.repulsion_radius,
		config.repulsion_strength,
	);
	particle.x += ox + particle.speed_x;
	particle.y += oy + particle.speed_y;

	particle.x = wrap(particle.x, bounds.width);
	particle.y = wrap(particle.y, bounds.height);
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::particles::ParticleField;
	use super::*;

	fn still(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			size: 1.0,
			opacity: 0.5,
		}
	}

	const BOUNDS: Bounds = Bounds {
		width: 400.0,
		height: 300.0,
	};

	#[test]
	fn test_repulsion_boundaries() {
		assert_eq!(repulsion(150.0, 0.0, 150.0, 2.0), (0.0, 0.0));
		assert_eq!(repulsion(0.0, 0.0, 150.0, 2.0), (0.0, 0.0));
		assert_eq!(repulsion(90.0, 120.0, 150.0, 2.0), (0.0, 0.0));

		// Half the radius away on +x: pushed by half the strength on -x.
		let (ox, oy) = repulsion(75.0, 0.0, 150.0, 2.0);
		assert!((ox + 1.0).abs() < 1e-12);
		assert_eq!(oy, 0.0);
	}

	#[test]
	fn test_pointer_pushes_particle_away() {
		let config = ParticleConfig::default();
		let mut p = still(200.0, 150.0);
		update(&mut p, &Pointer::at(210.0, 150.0), BOUNDS, &config);

		assert!(p.x < 200.0);
		assert_eq!(p.y, 150.0);
	}

	#[test]
	fn test_pointer_on_particle_only_drifts() {
		let config = ParticleConfig::default();
		let mut p = still(100.0, 100.0);
		p.speed_x = 0.2;
		p.speed_y = -0.1;
		update(&mut p, &Pointer::at(100.0, 100.0), BOUNDS, &config);

		assert!((p.x - 100.2).abs() < 1e-12);
		assert!((p.y - 99.9).abs() < 1e-12);
	}

	#[test]
	fn test_offscreen_pointer_has_no_effect() {
		let config = ParticleConfig::default();
		let mut p = still(0.5, 0.5);
		update(&mut p, &Pointer::OFFSCREEN, BOUNDS, &config);

		assert_eq!((p.x, p.y), (0.5, 0.5));
	}

	#[test]
	fn test_wraparound_resets_to_opposite_edge() {
		assert_eq!(wrap(400.2, 400.0), 0.0);
		assert_eq!(wrap(400.0, 400.0), 0.0);
		assert_eq!(wrap(399.5, 400.0), 399.5);

		let edge = wrap(-0.1, 400.0);
		assert!(edge < 400.0);
		assert!(edge > 399.999);
		assert!(wrap(-1e-18, 400.0) < 400.0);
		assert_eq!(wrap(12.0, 0.0), 0.0);
	}

	#[test]
	fn test_crossing_right_edge_lands_on_zero() {
		let config = ParticleConfig::default();
		let mut p = still(399.9, 10.0);
		p.speed_x = 0.25;
		update(&mut p, &Pointer::OFFSCREEN, BOUNDS, &config);

		assert_eq!(p.x, 0.0);
		assert_eq!(p.y, 10.0);
	}

	#[test]
	fn test_crossing_top_edge_lands_on_bottom() {
		let config = ParticleConfig::default();
		let mut p = still(10.0, 0.1);
		p.speed_y = -0.25;
		update(&mut p, &Pointer::OFFSCREEN, BOUNDS, &config);

		assert!(p.y < BOUNDS.height);
		assert!(p.y > BOUNDS.height - 1e-9);
	}

	#[test]
	fn test_positions_stay_in_bounds() {
		let config = ParticleConfig {
			max_speed: 3.0,
			..ParticleConfig::default()
		};
		let mut rng = StdRng::seed_from_u64(99);
		let mut field =
			ParticleField::populate(120, BOUNDS.width, BOUNDS.height, &config, &mut rng);
		let pointers = [
			Pointer::at(0.0, 0.0),
			Pointer::at(399.0, 299.0),
			Pointer::at(200.0, 150.0),
			Pointer::OFFSCREEN,
		];

		for frame in 0..2000 {
			let pointer = pointers[frame % pointers.len()];
			for p in &mut field.particles {
				update(p, &pointer, BOUNDS, &config);
				assert!(BOUNDS.contains(p.x, p.y), "escaped: ({}, {})", p.x, p.y);
			}
		}
	}
}
