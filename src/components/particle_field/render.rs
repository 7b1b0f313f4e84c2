//! Canvas rendering for the particle field.
//!
//! Each frame clears the surface, strokes proximity links, then fills the dots
//! so that dots are never covered by lines.

use std::f64::consts::PI;
use std::iter;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::ParticleFieldState;
use super::theme::Color;

/// One canvas operation of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
	/// Wipe the whole surface.
	Clear { width: f64, height: f64 },
	/// Stroke a line between two particle centers.
	Link {
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	},
	/// Fill one particle.
	Dot {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
	},
}

/// A line between two particles closer than the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub from: usize,
	pub to: usize,
	pub alpha: f64,
}

/// Every unordered pair `(i, j)`, `i < j`, closer than `max_distance`.
///
/// Alpha falls off linearly from `max_alpha` at distance zero to nothing at
/// `max_distance`.
pub fn proximity_links(
	particles: &[Particle],
	max_distance: f64,
	max_alpha: f64,
) -> impl Iterator<Item = Link> + '_ {
	(0..particles.len()).flat_map(move |i| {
		((i + 1)..particles.len()).filter_map(move |j| {
			let (a, b) = (&particles[i], &particles[j]);
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();
			(dist < max_distance).then(|| Link {
				from: i,
				to: j,
				alpha: max_alpha * (1.0 - dist / max_distance),
			})
		})
	})
}

/// Operations for one frame, in paint order: clear, every link, every dot.
pub fn frame(state: &ParticleFieldState) -> impl Iterator<Item = DrawOp> + '_ {
	let bounds = state.field.bounds();
	let config = &state.config;
	let particles = &state.field.particles;

	let clear = iter::once(DrawOp::Clear {
		width: bounds.width,
		height: bounds.height,
	});
	let links = proximity_links(particles, config.link_distance, config.link_alpha)
		.map(move |link| {
			let (a, b) = (&particles[link.from], &particles[link.to]);
			DrawOp::Link {
				from: (a.x, a.y),
				to: (b.x, b.y),
				width: config.link_width,
				color: config.color.with_alpha(link.alpha),
			}
		});
	let dots = particles.iter().map(move |p| DrawOp::Dot {
		x: p.x,
		y: p.y,
		radius: p.size,
		color: config.color.with_alpha(p.opacity),
	});
	clear.chain(links).chain(dots)
}

/// Renders the complete field to the canvas.
pub fn draw(state: &ParticleFieldState, ctx: &CanvasRenderingContext2d) {
	for op in frame(state) {
		match op {
			DrawOp::Clear { width, height } => ctx.clear_rect(0.0, 0.0, width, height),
			DrawOp::Link {
				from,
				to,
				width,
				color,
			} => {
				ctx.begin_path();
				ctx.set_line_width(width);
				ctx.set_stroke_style_str(&color.to_css());
				ctx.move_to(from.0, from.1);
				ctx.line_to(to.0, to.1);
				ctx.stroke();
			}
			DrawOp::Dot {
				x,
				y,
				radius,
				color,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(x, y, radius, 0.0, PI * 2.0);
				ctx.set_fill_style_str(&color.to_css());
				ctx.fill();
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::config::ParticleConfig;
	use super::*;

	fn at(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			speed_x: 0.0,
			speed_y: 0.0,
			size: 1.0,
			opacity: 0.5,
		}
	}

	#[test]
	fn test_links_only_close_pairs() {
		let particles = [at(0.0, 0.0), at(75.0, 0.0), at(300.0, 0.0), at(0.0, 150.0)];
		let links: Vec<Link> = proximity_links(&particles, 150.0, 0.15).collect();

		// (0,3) sits exactly on the threshold and is excluded.
		let pairs: Vec<(usize, usize)> = links.iter().map(|l| (l.from, l.to)).collect();
		assert_eq!(pairs, vec![(0, 1)]);
		assert!((links[0].alpha - 0.075).abs() < 1e-12);
	}

	#[test]
	fn test_coincident_pair_is_fully_opaque() {
		let particles = [at(10.0, 10.0), at(10.0, 10.0)];
		let links: Vec<Link> = proximity_links(&particles, 150.0, 0.15).collect();

		assert_eq!(links.len(), 1);
		assert!((links[0].alpha - 0.15).abs() < 1e-12);
	}

	#[test]
	fn test_pairwise_scan_visits_each_pair_once() {
		let particles: Vec<Particle> = (0..10).map(|i| at(i as f64, 0.0)).collect();
		let count = proximity_links(&particles, 150.0, 0.15).count();

		assert_eq!(count, 45);
	}

	#[test]
	fn test_frame_clears_then_links_then_dots() {
		let mut state = ParticleFieldState::new(
			ParticleConfig::default(),
			400.0,
			300.0,
			StdRng::seed_from_u64(11),
		);
		state.field.particles = vec![at(10.0, 10.0), at(40.0, 10.0), at(380.0, 290.0)];
		let ops: Vec<DrawOp> = frame(&state).collect();

		assert_eq!(
			ops[0],
			DrawOp::Clear {
				width: 400.0,
				height: 300.0
			}
		);
		assert_eq!(ops.iter().filter(|op| matches!(op, DrawOp::Clear { .. })).count(), 1);

		let first_dot = ops
			.iter()
			.position(|op| matches!(op, DrawOp::Dot { .. }))
			.unwrap();
		let last_link = ops
			.iter()
			.rposition(|op| matches!(op, DrawOp::Link { .. }))
			.unwrap();
		assert!(last_link < first_dot);

		let dots = ops.iter().filter(|op| matches!(op, DrawOp::Dot { .. })).count();
		assert_eq!(dots, state.field.len());
		assert_eq!(ops.len(), 1 + 1 + dots);
	}

	#[test]
	fn test_frame_colors_follow_alpha() {
		let mut state = ParticleFieldState::new(
			ParticleConfig::default(),
			400.0,
			300.0,
			StdRng::seed_from_u64(11),
		);
		state.field.particles = vec![at(0.0, 0.0), at(75.0, 0.0)];
		let ops: Vec<DrawOp> = frame(&state).collect();

		let DrawOp::Link { color, width, .. } = ops[1] else {
			panic!("expected a link, got {:?}", ops[1]);
		};
		assert!((color.a - 0.075).abs() < 1e-12);
		assert_eq!(width, state.config.link_width);
		let DrawOp::Dot { color, radius, .. } = ops[2] else {
			panic!("expected a dot, got {:?}", ops[2]);
		};
		assert_eq!(color.a, 0.5);
		assert_eq!(radius, 1.0);
	}
}
