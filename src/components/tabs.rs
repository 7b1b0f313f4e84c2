//! Terminal-style tab switcher.

use leptos::prelude::*;
use serde::Deserialize;

/// One tab and the text it reveals.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TerminalTab {
	pub key: String,
	pub label: String,
	pub content: String,
}

/// Tab strip over a terminal body; exactly one tab is active.
#[component]
pub fn TerminalTabs(tabs: Vec<TerminalTab>) -> impl IntoView {
	let active = RwSignal::new(tabs.first().map(|t| t.key.clone()).unwrap_or_default());

	let buttons = tabs
		.iter()
		.map(|tab| {
			let key = tab.key.clone();
			let select = tab.key.clone();
			view! {
				<button
					type="button"
					class="terminal-tab"
					data-tab=tab.key.clone()
					class:active=move || active.with(|a| *a == key)
					on:click=move |_| active.set(select.clone())
				>
					{tab.label.clone()}
				</button>
			}
		})
		.collect_view();

	let contents = tabs
		.into_iter()
		.map(|tab| {
			let key = tab.key.clone();
			view! {
				<pre
					class="terminal-content"
					data-content=tab.key
					class:active=move || active.with(|a| *a == key)
				>
					{tab.content}
				</pre>
			}
		})
		.collect_view();

	view! {
		<div class="terminal">
			<div class="terminal-tabs">{buttons}</div>
			<div class="terminal-body">{contents}</div>
		</div>
	}
}
