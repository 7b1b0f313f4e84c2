//! Ambient particle records and the store that owns them.

use rand::Rng;

use super::config::ParticleConfig;
use super::force::wrap;

/// A single floating particle.
///
/// Velocity, size and opacity are fixed for the particle's lifetime; only the
/// position evolves.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub size: f64,
	pub opacity: f64,
}

/// Drawing surface extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
	}
}

/// Last known pointer position in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
}

impl Pointer {
	/// Far enough away that no particle is repelled before the first move.
	pub const OFFSCREEN: Pointer = Pointer {
		x: -9999.0,
		y: -9999.0,
	};

	pub fn at(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

impl Default for Pointer {
	fn default() -> Self {
		Self::OFFSCREEN
	}
}

/// Ordered particle collection sized to the current surface.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	bounds: Bounds,
}

impl ParticleField {
	/// Creates exactly `count` particles spread uniformly over the surface.
	pub fn populate<R: Rng + ?Sized>(
		count: usize,
		width: f64,
		height: f64,
		config: &ParticleConfig,
		rng: &mut R,
	) -> Self {
		let bounds = Bounds { width, height };
		let particles = (0..count)
			.map(|_| Particle {
				x: wrap(rng.r#gen::<f64>() * width, width),
				y: wrap(rng.r#gen::<f64>() * height, height),
				speed_x: sample(rng, -config.max_speed, config.max_speed),
				speed_y: sample(rng, -config.max_speed, config.max_speed),
				size: sample(rng, config.size.0, config.size.1),
				opacity: sample(rng, config.opacity.0, config.opacity.1),
			})
			.collect();

		Self { particles, bounds }
	}

	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

/// Uniform sample from `[lo, hi)`; tolerates an empty range.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	lo + rng.r#gen::<f64>() * (hi - lo)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn test_populate_count_and_bounds() {
		let config = ParticleConfig::default();
		let mut rng = StdRng::seed_from_u64(42);

		for &(w, h) in &[(1280.0, 720.0), (320.0, 640.0), (1.0, 1.0)] {
			let field = ParticleField::populate(80, w, h, &config, &mut rng);
			assert_eq!(field.len(), 80);
			assert!(
				field
					.particles
					.iter()
					.all(|p| field.bounds().contains(p.x, p.y))
			);
		}
	}

	#[test]
	fn test_populate_attribute_ranges() {
		let config = ParticleConfig::default();
		let mut rng = StdRng::seed_from_u64(7);
		let field = ParticleField::populate(500, 800.0, 600.0, &config, &mut rng);

		for p in &field.particles {
			assert!((0.5..2.5).contains(&p.size));
			assert!((0.2..0.7).contains(&p.opacity));
			assert!((-0.25..0.25).contains(&p.speed_x));
			assert!((-0.25..0.25).contains(&p.speed_y));
		}
	}

	#[test]
	fn test_zero_sized_surface() {
		let config = ParticleConfig::default();
		let mut rng = StdRng::seed_from_u64(1);
		let field = ParticleField::populate(3, 0.0, 0.0, &config, &mut rng);

		assert_eq!(field.len(), 3);
		assert!(field.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn test_pointer_defaults_offscreen() {
		assert_eq!(Pointer::default(), Pointer::OFFSCREEN);
	}
}
