//! "Coming soon" toast for documentation links.

use std::time::Duration;

use leptos::prelude::*;
use log::warn;
use web_sys::MouseEvent;

const AUTO_HIDE: Duration = Duration::from_secs(4);

/// Shared toast visibility with a restartable auto-hide timer.
#[derive(Clone, Copy, Debug)]
pub struct DocsToast {
	visible: RwSignal<bool>,
	timer: StoredValue<Option<TimeoutHandle>>,
}

impl DocsToast {
	pub fn new() -> Self {
		Self {
			visible: RwSignal::new(false),
			timer: StoredValue::new(None),
		}
	}

	pub fn is_visible(&self) -> bool {
		self.visible.get()
	}

	/// Shows the toast and (re)starts the auto-hide countdown.
	pub fn show(&self) {
		self.cancel_timer();
		self.visible.set(true);
		let visible = self.visible;
		match set_timeout_with_handle(move || visible.set(false), AUTO_HIDE) {
			Ok(handle) => self.timer.set_value(Some(handle)),
			Err(e) => warn!("toast: could not schedule auto-hide: {:?}", e),
		}
	}

	pub fn hide(&self) {
		self.cancel_timer();
		self.visible.set(false);
	}

	fn cancel_timer(&self) {
		if let Some(handle) = self.timer.get_value() {
			handle.clear();
			self.timer.set_value(None);
		}
	}
}

impl Default for DocsToast {
	fn default() -> Self {
		Self::new()
	}
}

/// The toast itself; place once per page.
#[component]
pub fn DocsToastView(
	toast: DocsToast,
	#[prop(into, default = "Documentation is coming soon.".into())] message: String,
) -> impl IntoView {
	view! {
		<div id="docsToast" class="docs-toast" class:visible=move || toast.is_visible() role="status">
			<span class="docs-toast-message">{message}</span>
			<button
				id="docsToastClose"
				type="button"
				class="docs-toast-close"
				aria-label="Dismiss"
				on:click=move |_| toast.hide()
			>
				"×"
			</button>
		</div>
	}
}

/// Link that announces unfinished docs instead of navigating.
#[component]
pub fn DocsLink(toast: DocsToast, #[prop(into)] label: String) -> impl IntoView {
	view! {
		<a
			href="#"
			class="docs-soon"
			on:click=move |ev: MouseEvent| {
				ev.prevent_default();
				toast.show();
			}
		>
			{label}
		</a>
	}
}
