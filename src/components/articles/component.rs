//! Filterable, sortable article listing.

use leptos::prelude::*;
use log::info;

use super::filter::{ALL, FilterState, SortOrder};
use super::select::{CustomSelect, OpenSelect, SelectOption};
use super::types::ArticleCard;

/// Series dropdown options: the wildcard first, then each series once in
/// listing order.
pub fn series_options(cards: &[ArticleCard]) -> Vec<SelectOption> {
	let mut options = vec![SelectOption::new(ALL, "All series")];
	for card in cards {
		if !options.iter().any(|o| o.value == card.series) {
			options.push(
				SelectOption::new(card.series.clone(), card.series.clone())
					.with_dot(format!("dot-{}", card.series)),
			);
		}
	}
	options
}

/// Tag dropdown options: the wildcard first, then every tag once, sorted.
pub fn tag_options(cards: &[ArticleCard]) -> Vec<SelectOption> {
	let mut tags: Vec<&str> = cards
		.iter()
		.flat_map(|c| c.tags.iter().map(String::as_str))
		.collect();
	tags.sort_unstable();
	tags.dedup();

	std::iter::once(SelectOption::new(ALL, "All tags"))
		.chain(tags.into_iter().map(|t| SelectOption::new(t, t)))
		.collect()
}

/// Article grid with series and tag dropdowns, a date-sort toggle and a
/// result count. Shows a "no results" panel instead of the grid when nothing
/// matches.
#[component]
pub fn ArticleBrowser(cards: Vec<ArticleCard>) -> impl IntoView {
	provide_context(OpenSelect::new());
	info!("articles: {} cards loaded", cards.len());

	let series = series_options(&cards);
	let tags = tag_options(&cards);
	let cards = StoredValue::new(cards);
	let filter = RwSignal::new(FilterState::default());

	let visible = Memo::new(move |_| {
		filter.with(|f| {
			cards.with_value(|all| f.apply(all).into_iter().cloned().collect::<Vec<_>>())
		})
	});
	let is_empty = move || visible.with(Vec::is_empty);

	view! {
		<div class="filter-bar">
			<CustomSelect
				id="seriesSelect"
				options=series
				on_change=move |value: String| filter.update(|f| f.series = value)
			/>
			<CustomSelect
				id="tagSelect"
				options=tags
				on_change=move |value: String| filter.update(|f| f.tag = value)
			/>
			<button
				id="sortToggle"
				type="button"
				class="sort-toggle"
				class:asc=move || filter.with(|f| f.order == SortOrder::Asc)
				on:click=move |_| filter.update(|f| f.order = f.order.toggled())
			>
				<span class="sort-label">{move || filter.with(|f| f.order.label())}</span>
			</button>
			<span id="resultsCount" class="results-count">
				{move || visible.with(Vec::len)}
			</span>
		</div>
		<div
			id="articlesGrid"
			class="articles-grid"
			style:display=move || if is_empty() { "none" } else { "grid" }
		>
			<For
				each=move || visible.get()
				key=|card| card.slug.clone()
				children=move |card| view! { <ArticleCardView card=card /> }
			/>
		</div>
		<div
			id="noResults"
			class="no-results"
			style:display=move || if is_empty() { "flex" } else { "none" }
		>
			<p>"No articles match the selected filters."</p>
		</div>
	}
}

#[component]
fn ArticleCardView(card: ArticleCard) -> impl IntoView {
	let tags = card
		.tags
		.iter()
		.map(|t| view! { <span class="art-tag">{t.clone()}</span> })
		.collect_view();

	view! {
		<a
			class="art-card"
			href=card.url
			data-series=card.series.clone()
			data-date=card.date.to_string()
		>
			<span class=format!("art-series dot-{}", card.series)>{card.series.clone()}</span>
			<h3 class="art-title">{card.title}</h3>
			<p class="art-summary">{card.summary}</p>
			<div class="art-tags">{tags}</div>
			<time datetime=card.date.to_string()>{card.date.to_string()}</time>
		</a>
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::CardDate;
	use super::*;

	fn card(series: &str, tags: &[&str]) -> ArticleCard {
		ArticleCard {
			slug: format!("{series}-{}", tags.join("-")),
			title: String::new(),
			summary: String::new(),
			url: String::new(),
			series: series.into(),
			tags: tags.iter().map(|t| t.to_string()).collect(),
			date: CardDate::parse("2024-01-01").unwrap(),
		}
	}

	#[test]
	fn test_options_start_with_wildcard_and_dedupe() {
		let cards = vec![
			card("web", &["xss", "recon"]),
			card("ad", &["windows"]),
			card("web", &["recon"]),
		];

		let series: Vec<String> = series_options(&cards).into_iter().map(|o| o.value).collect();
		assert_eq!(series, vec!["all", "web", "ad"]);

		let tags: Vec<String> = tag_options(&cards).into_iter().map(|o| o.value).collect();
		assert_eq!(tags, vec!["all", "recon", "windows", "xss"]);
	}

	#[test]
	fn test_series_options_carry_dot_class() {
		let options = series_options(&[card("web", &[])]);

		assert_eq!(options[0].dot, None);
		assert_eq!(options[1].dot.as_deref(), Some("dot-web"));
	}
}
