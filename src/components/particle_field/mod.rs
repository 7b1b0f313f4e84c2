//! Animated particle background.
//!
//! A fixed number of softly drifting dots on a full-viewport canvas:
//! - Dots near the pointer are pushed away from it
//! - Pairs closer than the link distance are joined by faint lines
//! - Dots leaving one edge re-enter from the opposite edge
//! - The whole field is regenerated whenever the viewport resizes
//!
//! # Example
//!
//! ```ignore
//! use folio::components::particle_field::{ParticleBackground, ParticleConfig};
//!
//! view! { <ParticleBackground config=ParticleConfig { count: 120, ..Default::default() } /> }
//! ```

mod component;
pub mod config;
pub mod driver;
pub mod force;
pub mod particles;
pub mod render;
pub mod state;
pub mod theme;

pub use component::ParticleBackground;
pub use config::ParticleConfig;
pub use driver::{AnimationDriver, DriverPhase};
pub use particles::{Bounds, Particle, ParticleField, Pointer};
pub use state::ParticleFieldState;
pub use theme::Color;
