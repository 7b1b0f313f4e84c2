//! Series/tag filtering and date sorting of article cards.

use super::types::ArticleCard;

/// Wildcard value accepted by both filters.
pub const ALL: &str = "all";

/// Direction of the date sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
	/// Newest first.
	#[default]
	Desc,
	/// Oldest first.
	Asc,
}

impl SortOrder {
	pub fn toggled(self) -> Self {
		match self {
			SortOrder::Desc => SortOrder::Asc,
			SortOrder::Asc => SortOrder::Desc,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			SortOrder::Desc => "Newest",
			SortOrder::Asc => "Oldest",
		}
	}
}

/// Current filter selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
	pub series: String,
	pub tag: String,
	pub order: SortOrder,
}

impl Default for FilterState {
	fn default() -> Self {
		Self {
			series: ALL.to_string(),
			tag: ALL.to_string(),
			order: SortOrder::Desc,
		}
	}
}

impl FilterState {
	pub fn matches(&self, card: &ArticleCard) -> bool {
		let series_match = self.series == ALL || card.series == self.series;
		let tag_match = self.tag == ALL || card.tags.iter().any(|t| *t == self.tag);
		series_match && tag_match
	}

	/// Matching cards in display order.
	///
	/// The sort is stable, so cards sharing a date keep their listing order.
	pub fn apply<'a>(&self, cards: &'a [ArticleCard]) -> Vec<&'a ArticleCard> {
		let mut visible: Vec<&ArticleCard> = cards.iter().filter(|c| self.matches(c)).collect();
		match self.order {
			SortOrder::Desc => visible.sort_by(|a, b| b.date.cmp(&a.date)),
			SortOrder::Asc => visible.sort_by(|a, b| a.date.cmp(&b.date)),
		}
		visible
	}
}
