//! Pointer-following 3D tilt for cards.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

/// Card rotation and glow offset for a pointer position inside the card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
	/// Degrees around the horizontal axis.
	pub rot_x: f64,
	/// Degrees around the vertical axis.
	pub rot_y: f64,
	pub glow_x: f64,
	pub glow_y: f64,
}

impl Tilt {
	/// `x`/`y` are relative to the card's top-left corner.
	pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
		let (cx, cy) = (width / 2.0, height / 2.0);
		Self {
			rot_x: (y - cy) / 10.0,
			rot_y: (cx - x) / 10.0,
			glow_x: (x - cx) / 2.0,
			glow_y: (y - cy) / 2.0,
		}
	}

	pub fn card_transform(&self) -> String {
		format!(
			"perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d(1.02,1.02,1.02)",
			self.rot_x, self.rot_y
		)
	}

	pub fn glow_transform(&self) -> String {
		format!("translate({}px, {}px)", self.glow_x, self.glow_y)
	}
}

const RESTING_CARD: &str = "perspective(1000px) rotateX(0) rotateY(0) scale3d(1,1,1)";
const RESTING_GLOW: &str = "translate(0,0)";

/// Card that tilts towards the pointer and resets when it leaves.
#[component]
pub fn TiltCard(children: Children) -> impl IntoView {
	let tilt = RwSignal::new(None::<Tilt>);

	let on_move = move |ev: MouseEvent| {
		let Some(card) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		let rect = card.get_bounding_client_rect();
		tilt.set(Some(Tilt::from_pointer(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
			rect.width(),
			rect.height(),
		)));
	};

	view! {
		<div
			class="tilt-card"
			data-tilt="true"
			style:transform=move || tilt.get().map_or(RESTING_CARD.to_string(), |t| t.card_transform())
			on:mousemove=on_move
			on:mouseleave=move |_| tilt.set(None)
		>
			<div
				class="card-glow"
				style:transform=move || tilt.get().map_or(RESTING_GLOW.to_string(), |t| t.glow_transform())
			></div>
			{children()}
		</div>
	}
}
