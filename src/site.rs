//! Page content embedded as JSON in the served HTML.

use std::collections::HashSet;

use serde::Deserialize;
use serde::de::Error as _;

use crate::components::articles::ArticleCard;
use crate::components::contact::ContactEndpoints;
use crate::components::lightbox::GalleryItem;
use crate::components::nav::NavLink;
use crate::components::tabs::TerminalTab;

/// A highlighted feature rendered as a tilting card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeatureCard {
	pub title: String,
	#[serde(default)]
	pub body: String,
}

/// Everything a page can contain. Sections left empty are not rendered.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteData {
	pub brand: String,
	/// Animated particle background behind the page.
	pub particles: bool,
	pub nav: Vec<NavLink>,
	pub features: Vec<FeatureCard>,
	/// Label of the "docs coming soon" link; omitted when `None`.
	pub docs_link: Option<String>,
	pub tabs: Vec<TerminalTab>,
	pub gallery: Vec<GalleryItem>,
	pub articles: Vec<ArticleCard>,
	pub contact: Option<ContactEndpoints>,
}

impl Default for SiteData {
	fn default() -> Self {
		Self {
			brand: "Portfolio".to_string(),
			particles: true,
			nav: Vec::new(),
			features: Vec::new(),
			docs_link: None,
			tabs: Vec::new(),
			gallery: Vec::new(),
			articles: Vec::new(),
			contact: None,
		}
	}
}

impl SiteData {
	/// Parses the page document. Article slugs key the rendered list and must
	/// be unique.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let data: Self = serde_json::from_str(json)?;
		if let Some(slug) = duplicate_slug(&data.articles) {
			return Err(serde_json::Error::custom(format!(
				"duplicate article slug `{slug}`"
			)));
		}
		Ok(data)
	}
}

fn duplicate_slug(cards: &[ArticleCard]) -> Option<String> {
	let mut seen = HashSet::new();
	cards
		.iter()
		.find(|c| !seen.insert(c.slug.as_str()))
		.map(|c| c.slug.clone())
}
