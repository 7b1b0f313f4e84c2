//! Styled dropdown replacing the native `<select>`.
//!
//! At most one dropdown on the page is open at a time: every `CustomSelect`
//! under the same [`OpenSelect`] context shares a single "open id" signal.

use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// One entry of a dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
	/// Extra class for the colored dot shown next to the label.
	pub dot: Option<String>,
}

impl SelectOption {
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			dot: None,
		}
	}

	pub fn with_dot(mut self, dot: impl Into<String>) -> Self {
		self.dot = Some(dot.into());
		self
	}
}

/// What the trigger currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectState {
	pub value: String,
	pub label: String,
	pub dot: Option<String>,
}

impl SelectState {
	pub fn from_option(option: &SelectOption) -> Self {
		Self {
			value: option.value.clone(),
			label: option.label.clone(),
			dot: option.dot.clone(),
		}
	}

	pub fn select(&mut self, option: &SelectOption) {
		*self = Self::from_option(option);
	}

	/// Base dot class plus the selected option's color variant.
	pub fn dot_class(&self) -> String {
		match &self.dot {
			Some(dot) => format!("csel-dot {dot}"),
			None => "csel-dot".to_string(),
		}
	}
}

/// Id of the open dropdown, shared between sibling dropdowns.
#[derive(Clone, Copy, Debug)]
pub struct OpenSelect(pub RwSignal<Option<String>>);

impl OpenSelect {
	pub fn new() -> Self {
		Self(RwSignal::new(None))
	}
}

impl Default for OpenSelect {
	fn default() -> Self {
		Self::new()
	}
}

/// Next open id after clicking the trigger of `id`: opening one closes the rest.
pub fn toggle_open(current: Option<String>, id: &str) -> Option<String> {
	match current {
		Some(open) if open == id => None,
		_ => Some(id.to_string()),
	}
}

/// Dropdown with a trigger button and an option panel.
///
/// The first option is selected initially. Choosing an option updates the
/// trigger, marks the option `active`, closes the panel and calls `on_change`
/// with the option's value. Clicking anywhere else or pressing Escape closes
/// the panel.
#[component]
pub fn CustomSelect(
	#[prop(into)] id: String,
	options: Vec<SelectOption>,
	#[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
	let open_select = use_context::<OpenSelect>().unwrap_or_default();
	let state = RwSignal::new(
		options
			.first()
			.map(SelectState::from_option)
			.unwrap_or_else(|| SelectState::from_option(&SelectOption::new("", ""))),
	);

	let is_open = {
		let id = id.clone();
		Memo::new(move |_| open_select.0.with(|o| o.as_deref() == Some(id.as_str())))
	};

	let close_on_click = window_event_listener(ev::click, move |_| open_select.0.set(None));
	let close_on_escape = window_event_listener(ev::keydown, move |ev| {
		if ev.key() == "Escape" {
			open_select.0.set(None);
		}
	});
	on_cleanup(move || {
		close_on_click.remove();
		close_on_escape.remove();
	});

	let trigger_id = id.clone();
	let on_trigger = move |ev: MouseEvent| {
		ev.stop_propagation();
		open_select.0.update(|o| *o = toggle_open(o.take(), &trigger_id));
	};

	let items = options
		.into_iter()
		.map(|option| {
			let value = option.value.clone();
			let label = option.label.clone();
			view! {
				<li
					class="csel-option"
					role="option"
					class:active=move || state.with(|s| s.value == value)
					on:click=move |_| {
						state.update(|s| s.select(&option));
						open_select.0.set(None);
						on_change.run(option.value.clone());
					}
				>
					{label}
				</li>
			}
		})
		.collect_view();

	view! {
		<div class="csel" id=id class:open=move || is_open.get()>
			<button
				type="button"
				class="csel-trigger"
				aria-haspopup="listbox"
				aria-expanded=move || is_open.get().to_string()
				on:click=on_trigger
			>
				<span class=move || state.with(SelectState::dot_class)></span>
				<span class="csel-label">{move || state.with(|s| s.label.clone())}</span>
			</button>
			<ul class="csel-panel" role="listbox">
				{items}
			</ul>
		</div>
	}
}
