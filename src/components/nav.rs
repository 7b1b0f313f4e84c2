//! Responsive navigation bar with a hamburger menu.

use leptos::ev;
use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryListEvent, MouseEvent};

/// Viewports at least this wide show the desktop menu.
const DESKTOP_QUERY: &str = "(min-width: 641px)";

/// Page the bar links to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
	pub href: String,
	pub label: String,
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
	pub open: bool,
}

impl NavState {
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	/// Handles a key press; returns `true` when focus should go back to the
	/// hamburger button.
	pub fn on_key(&mut self, key: &str) -> bool {
		if key == "Escape" && self.open {
			self.open = false;
			return true;
		}
		false
	}

	/// The menu never stays open once the viewport reaches desktop width.
	pub fn on_viewport_change(&mut self, desktop: bool) {
		if desktop {
			self.open = false;
		}
	}
}

/// Whether the bar should carry its scrolled shadow.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > 20.0
}

/// Fixed navigation bar.
///
/// On small screens the links live in a slide-out panel toggled by the
/// hamburger; an overlay dims the page and `<body>` gets `nav-open` while it
/// is open.
#[component]
pub fn NavBar(
	links: Vec<NavLink>,
	#[prop(into, default = "Portfolio".into())] brand: String,
) -> impl IntoView {
	let nav = RwSignal::new(NavState::default());
	let scrolled = RwSignal::new(false);
	let hamburger_ref = NodeRef::<leptos::html::Button>::new();
	let is_open = move || nav.with(|n| n.open);

	Effect::new(move |_| {
		let open = is_open();
		if let Some(body) = document().body() {
			let _ = body.class_list().toggle_with_force("nav-open", open);
		}
	});

	let on_key = window_event_listener(ev::keydown, move |ev| {
		if nav.try_update(|n| n.on_key(&ev.key())).unwrap_or(false) {
			if let Some(button) = hamburger_ref.get_untracked() {
				let _ = button.focus();
			}
		}
	});
	let on_scroll = window_event_listener(ev::scroll, move |_| {
		scrolled.set(is_scrolled(window().scroll_y().unwrap_or(0.0)));
	});
	on_cleanup(move || {
		on_key.remove();
		on_scroll.remove();
	});

	if let Ok(Some(query)) = window().match_media(DESKTOP_QUERY) {
		let on_change =
			Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
				nav.try_update(|n| n.on_viewport_change(ev.matches()));
			});
		let _ = query
			.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
		// Lives as long as the page.
		on_change.forget();
	}

	let close = move |_: MouseEvent| nav.update(NavState::close);
	let items = links
		.into_iter()
		.map(|link| {
			view! {
				<li>
					<a href=link.href on:click=close>
						{link.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav class="navbar" class:scrolled=move || scrolled.get()>
			<a class="nav-brand" href="/">
				{brand}
			</a>
			<button
				node_ref=hamburger_ref
				type="button"
				class="hamburger"
				class:active=is_open
				aria-label="Toggle navigation"
				aria-expanded=move || is_open().to_string()
				on:click=move |_| nav.update(NavState::toggle)
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
			<ul class="nav-links" class:open=is_open>
				{items}
			</ul>
		</nav>
		<div class="nav-overlay" class:active=is_open on:click=close></div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_toggle_and_close() {
		let mut nav = NavState::default();
		nav.toggle();
		assert!(nav.open);
		nav.toggle();
		assert!(!nav.open);

		nav.toggle();
		nav.close();
		assert!(!nav.open);
	}

	#[test]
	fn test_escape_only_refocuses_when_open() {
		let mut nav = NavState::default();
		assert!(!nav.on_key("Escape"));

		nav.toggle();
		assert!(!nav.on_key("Enter"));
		assert!(nav.open);
		assert!(nav.on_key("Escape"));
		assert!(!nav.open);
	}

	#[test]
	fn test_desktop_viewport_closes_menu() {
		let mut nav = NavState { open: true };
		nav.on_viewport_change(false);
		assert!(nav.open);
		nav.on_viewport_change(true);
		assert!(!nav.open);
	}

	#[test]
	fn test_scroll_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(20.0));
		assert!(is_scrolled(20.5));
	}
}
