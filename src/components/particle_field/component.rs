//! Leptos component hosting the particle background canvas.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::ParticleConfig;
use super::driver::{AnimationDriver, viewport_size};
use super::state::ParticleFieldState;

/// Full-viewport animated particle background.
///
/// The canvas is fixed behind the page and ignores pointer input; pointer
/// positions are read from document-level `mousemove` events instead. The
/// animation stops when the component is disposed.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<ParticleConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let driver = StoredValue::new_local(AnimationDriver::new());
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("particles: 2d context unavailable, background disabled");
			return;
		};

		let state = ParticleFieldState::new(config.clone(), w, h, StdRng::from_entropy());
		info!(
			"particles: {} particles on a {}x{} surface",
			state.field.len(),
			w,
			h
		);
		let state = Rc::new(RefCell::new(state));

		driver.update_value(|d| {
			if let Err(e) = d.start(state, canvas, ctx) {
				warn!("particles: failed to start animation: {:?}", e);
			}
		});
	});

	on_cleanup(move || {
		driver.try_update_value(|d| d.stop());
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particleCanvas"
			class="particle-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: 0; pointer-events: none;"
		/>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}
