//! Image gallery with a full-screen lightbox.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::MouseEvent;

/// Delay before the image source is cleared, matching the fade-out.
const CLEAR_DELAY: Duration = Duration::from_millis(300);

/// One gallery entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GalleryItem {
	/// Full-size image shown in the lightbox.
	pub src: String,
	/// Caption; also used as alt text.
	#[serde(default)]
	pub label: String,
	/// Placeholder entries are listed but never open.
	#[serde(default)]
	pub missing: bool,
}

/// Which item, if any, the lightbox is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxState {
	current: Option<usize>,
	len: usize,
}

impl LightboxState {
	pub fn new(len: usize) -> Self {
		Self { current: None, len }
	}

	pub fn current(&self) -> Option<usize> {
		self.current
	}

	pub fn is_open(&self) -> bool {
		self.current.is_some()
	}

	/// Opens at `index` unless that item is missing or out of range.
	pub fn open(&mut self, index: usize, items: &[GalleryItem]) -> bool {
		match items.get(index) {
			Some(item) if !item.missing => {
				self.current = Some(index);
				true
			}
			_ => false,
		}
	}

	pub fn close(&mut self) {
		self.current = None;
	}

	/// Steps `dir` items forward (negative for backward), wrapping at both ends.
	pub fn navigate(&mut self, dir: isize) {
		if let Some(current) = self.current {
			if self.len > 0 {
				let len = self.len as isize;
				self.current = Some((current as isize + dir).rem_euclid(len) as usize);
			}
		}
	}

	/// Prev/next arrows only make sense with more than one item.
	pub fn shows_arrows(&self) -> bool {
		self.len > 1
	}

	/// Applies a keyboard shortcut and reports whether anything changed.
	///
	/// Keys are ignored while closed.
	pub fn on_key(&mut self, key: &str) -> bool {
		let before = self.current;
		if before.is_none() {
			return false;
		}
		match key {
			"Escape" => self.close(),
			"ArrowLeft" => self.navigate(-1),
			"ArrowRight" => self.navigate(1),
			_ => {}
		}
		self.current != before
	}
}

fn lock_body_scroll(locked: bool) {
	if let Some(body) = document().body() {
		let _ = body
			.style()
			.set_property("overflow", if locked { "hidden" } else { "" });
	}
}

/// Thumbnail grid; clicking a thumbnail opens it in an overlay with
/// previous/next controls, keyboard navigation and backdrop-to-close.
#[component]
pub fn Gallery(items: Vec<GalleryItem>) -> impl IntoView {
	let state = RwSignal::new(LightboxState::new(items.len()));
	let shown = RwSignal::new(None::<GalleryItem>);
	let items = StoredValue::new(items);

	Effect::new(move |_| {
		let current = state.with(LightboxState::current);
		lock_body_scroll(current.is_some());
		if let Some(index) = current {
			shown.set(items.with_value(|all| all.get(index).cloned()));
		}
	});

	let close = move || {
		state.update(LightboxState::close);
		set_timeout(
			move || {
				if !state.with_untracked(LightboxState::is_open) {
					shown.set(None);
				}
			},
			CLEAR_DELAY,
		);
	};

	let on_key = window_event_listener(ev::keydown, move |ev| {
		if !state.with_untracked(LightboxState::is_open) {
			return;
		}
		let key = ev.key();
		if key == "Escape" {
			close();
		} else {
			state.maybe_update(|s| s.on_key(&key));
		}
	});
	on_cleanup(move || on_key.remove());

	let thumbnails = items.with_value(|all| {
		all.iter()
			.enumerate()
			.map(|(i, item)| {
				let label = item.label.clone();
				view! {
					<figure
						class=if item.missing { "gallery-item img-missing" } else { "gallery-item" }
						on:click=move |_| {
							state.update(|s| {
								items.with_value(|all| s.open(i, all));
							})
						}
					>
						<img src=item.src.clone() alt=label.clone() loading="lazy" />
						<figcaption class="placeholder-label">{label}</figcaption>
					</figure>
				}
			})
			.collect_view()
	});

	let arrows = move || state.with(LightboxState::shows_arrows);
	let caption = move || shown.with(|s| s.as_ref().map(|i| i.label.clone()).unwrap_or_default());

	view! {
		<div class="gallery">{thumbnails}</div>
		<div
			id="lightbox"
			class="lightbox"
			class:active=move || state.with(LightboxState::is_open)
			on:click=move |ev: MouseEvent| {
				if ev.target() == ev.current_target() {
					close();
				}
			}
		>
			<button type="button" class="lightbox-close" aria-label="Close" on:click=move |_| close()>
				"×"
			</button>
			<button
				type="button"
				class="lightbox-prev"
				aria-label="Previous image"
				style:display=move || if arrows() { "" } else { "none" }
				on:click=move |ev: MouseEvent| {
					ev.stop_propagation();
					state.update(|s| s.navigate(-1));
				}
			>
				"‹"
			</button>
			<img
				id="lightboxImg"
				src=move || shown.with(|s| s.as_ref().map(|i| i.src.clone()).unwrap_or_default())
				alt=caption
			/>
			<button
				type="button"
				class="lightbox-next"
				aria-label="Next image"
				style:display=move || if arrows() { "" } else { "none" }
				on:click=move |ev: MouseEvent| {
					ev.stop_propagation();
					state.update(|s| s.navigate(1));
				}
			>
				"›"
			</button>
			<p id="lightboxCaption" class="lightbox-caption">{caption}</p>
		</div>
	}
}
