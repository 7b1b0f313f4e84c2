//! Browser `fetch` transport.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use super::error::SubmitError;
use super::flow::{Reply, Transport};

/// POSTs `FormData` through `window.fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
	type Body = FormData;

	async fn post(
		&self,
		url: &str,
		body: &FormData,
		accept_json: bool,
	) -> Result<Reply, SubmitError> {
		let window = web_sys::window()
			.ok_or_else(|| SubmitError::Network("no window".into()))?;

		let init = RequestInit::new();
		init.set_method("POST");
		init.set_body(body.as_ref());
		if accept_json {
			let headers = Headers::new().map_err(network)?;
			headers.append("Accept", "application/json").map_err(network)?;
			init.set_headers(headers.as_ref());
		}

		let request = Request::new_with_str_and_init(url, &init).map_err(network)?;
		let response: Response = JsFuture::from(window.fetch_with_request(&request))
			.await
			.map_err(network)?
			.dyn_into()
			.map_err(network)?;

		// An unreadable body only loses the optional server message.
		let body = match response.text() {
			Ok(promise) => JsFuture::from(promise)
				.await
				.ok()
				.and_then(|v| v.as_string())
				.unwrap_or_default(),
			Err(_) => String::new(),
		};

		Ok(Reply {
			status: response.status(),
			body,
		})
	}
}

fn network(err: JsValue) -> SubmitError {
	SubmitError::Network(
		err.as_string()
			.unwrap_or_else(|| format!("{err:?}")),
	)
}
