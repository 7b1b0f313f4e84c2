//! Leptos contact form wired to the two-step submission flow.

use leptos::prelude::*;
use log::{error, info};
use web_sys::{FormData, SubmitEvent};

use super::fetch::FetchTransport;
use super::flow::{ContactEndpoints, SubmissionState, submit};

/// Contact form with name, email and message fields.
///
/// While a submission is in flight the submit button is disabled and reads
/// "Sending...". Success navigates to the configured thank-you page; failure
/// shows an alert and re-enables the button.
#[component]
pub fn ContactForm(
	endpoints: ContactEndpoints,
	#[prop(into, default = "Send message".into())] submit_label: String,
) -> impl IntoView {
	let form_ref = NodeRef::<leptos::html::Form>::new();
	let submission = RwSignal::new(SubmissionState::Idle);
	let site_key = endpoints.site_key.clone();
	let endpoints = StoredValue::new(endpoints);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(form) = form_ref.get_untracked() else {
			return;
		};
		let body = match FormData::new_with_form(&form) {
			Ok(body) => body,
			Err(e) => {
				error!("contact: could not read form fields: {:?}", e);
				return;
			}
		};
		if !submission.try_update(SubmissionState::try_begin).unwrap_or(false) {
			return;
		}

		let endpoints = endpoints.get_value();
		wasm_bindgen_futures::spawn_local(async move {
			match submit(&FetchTransport, &endpoints, &body).await {
				Ok(next) => {
					info!("contact: submission accepted");
					if let Err(e) = window().location().set_href(&next) {
						error!("contact: navigation to {} failed: {:?}", next, e);
						submission.update(SubmissionState::finish);
					}
				}
				Err(err) => {
					error!("contact: {}", err);
					let _ = window().alert_with_message(&err.user_message());
					submission.update(SubmissionState::finish);
				}
			}
		});
	};

	let sending = move || submission.get().is_sending();

	view! {
		<form node_ref=form_ref id="contact-form" class="contact-form" on:submit=on_submit>
			<label>
				"Name"
				<input type="text" name="name" required=true autocomplete="name" />
			</label>
			<label>
				"Email"
				<input type="email" name="email" required=true autocomplete="email" />
			</label>
			<label>
				"Message"
				<textarea name="message" rows="6" required=true></textarea>
			</label>
			{site_key.map(|key| view! { <div class="cf-turnstile" data-sitekey=key></div> })}
			<button type="submit" class="btn-submit" disabled=sending>
				{move || if sending() { "Sending...".to_string() } else { submit_label.clone() }}
			</button>
		</form>
	}
}
