//! folio: client-side interactivity for a static portfolio site.
//!
//! This crate provides WASM components for an animated particle background,
//! a responsive navigation bar, filterable article listings, image
//! lightboxes, small interactive widgets and a two-step contact form.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Linked only for its `js` feature, which lets `rand` seed from the browser.
use getrandom as _;

pub mod components;
pub mod site;

use components::articles::ArticleBrowser;
use components::contact::ContactForm;
use components::lightbox::Gallery;
use components::nav::NavBar;
use components::particle_field::ParticleBackground;
use components::reveal::Reveal;
use components::tabs::TerminalTabs;
use components::tilt::TiltCard;
use components::toast::{DocsLink, DocsToast, DocsToastView};
pub use site::SiteData;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio: logging initialized");
}

/// Load page content from a script element with id="site-data".
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteData::from_json(&json_text) {
		Ok(data) => {
			info!(
				"folio: loaded {} nav links, {} articles, {} gallery items",
				data.nav.len(),
				data.articles.len(),
				data.gallery.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("folio: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads page content from the DOM and renders every section it lists.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteData {
		brand,
		particles,
		nav,
		features,
		docs_link,
		tabs,
		gallery,
		articles,
		contact,
	} = load_site_data().unwrap_or_default();
	let toast = DocsToast::new();

	let features = (!features.is_empty()).then(|| {
		let cards = features
			.into_iter()
			.map(|f| {
				view! {
					<Reveal>
						<TiltCard>
							<h3>{f.title}</h3>
							<p>{f.body}</p>
						</TiltCard>
					</Reveal>
				}
			})
			.collect_view();
		view! { <section class="features">{cards}</section> }
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=brand.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{particles.then(|| view! { <ParticleBackground /> })}
		<NavBar links=nav brand=brand />
		<main class="page">
			{features}
			{docs_link.map(|label| view! { <DocsLink toast=toast label=label /> })}
			{(!tabs.is_empty()).then(|| view! { <Reveal><TerminalTabs tabs=tabs /></Reveal> })}
			{(!gallery.is_empty()).then(|| view! { <Gallery items=gallery /> })}
			{(!articles.is_empty()).then(|| view! { <ArticleBrowser cards=articles /> })}
			{contact.map(|endpoints| view! { <ContactForm endpoints=endpoints /> })}
		</main>
		<DocsToastView toast=toast />
	}
}
