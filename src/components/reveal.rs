//! Fade-in-on-scroll wrapper.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Calls `on_visible` once `element` first intersects the viewport by at least
/// `threshold`, then stops observing it.
fn observe_once(
	element: &Element,
	threshold: f64,
	on_visible: impl Fn() + 'static,
) -> Result<(), JsValue> {
	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					on_visible();
					observer.unobserve(&entry.target());
				}
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(threshold));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
	observer.observe(element);
	callback.forget();
	Ok(())
}

/// Hides its children until they scroll into view, then slides them up.
#[component]
pub fn Reveal(children: Children, #[prop(default = 0.1)] threshold: f64) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let revealed = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		if revealed.get_untracked() {
			return;
		}
		if let Err(e) = observe_once(&el, threshold, move || revealed.set(true)) {
			warn!("reveal: observer unavailable, showing content: {:?}", e);
			revealed.set(true);
		}
	});

	view! {
		<div
			node_ref=node_ref
			class="reveal"
			style:opacity=move || if revealed.get() { "1" } else { "0" }
			style:transform=move || if revealed.get() { "translateY(0)" } else { "translateY(30px)" }
			style:transition="opacity 0.6s ease, transform 0.6s ease"
		>
			{children()}
		</div>
	}
}
