//! Two-step contact submission: bot verification, then form intake.
//!
//! The intake request is only sent after the verification relay answers with
//! a success status. Neither request is retried or timed out.

use std::future::Future;

use serde::Deserialize;

use super::error::SubmitError;

/// Where submissions go.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContactEndpoints {
	/// Bot-verification relay receiving the raw form fields.
	pub verify_url: String,
	/// Form-intake service receiving the same fields afterwards.
	pub intake_url: String,
	/// Page the browser navigates to after a successful submission.
	#[serde(default = "default_success_url")]
	pub success_url: String,
	/// Public site key rendered into the verification widget, if any.
	#[serde(default)]
	pub site_key: Option<String>,
}

fn default_success_url() -> String {
	"/thankyou.html".to_string()
}

/// Status line and body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
	pub status: u16,
	pub body: String,
}

impl Reply {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends form bodies to remote endpoints.
pub trait Transport {
	/// Encoded form fields.
	type Body;

	/// POSTs `body` to `url`, asking for a JSON reply when `accept_json` is set.
	fn post(
		&self,
		url: &str,
		body: &Self::Body,
		accept_json: bool,
	) -> impl Future<Output = Result<Reply, SubmitError>>;
}

#[derive(Deserialize)]
struct ErrorBody {
	#[serde(default)]
	error: Option<String>,
	#[serde(default)]
	errors: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
	message: String,
}

/// Error text from a JSON reply body such as `{"error": "..."}` or
/// `{"errors": [{"message": "..."}]}`.
pub fn server_message(body: &str) -> Option<String> {
	let parsed: ErrorBody = serde_json::from_str(body).ok()?;
	let message = parsed.error.or_else(|| {
		let joined = parsed
			.errors
			.into_iter()
			.map(|e| e.message)
			.collect::<Vec<_>>()
			.join(", ");
		(!joined.is_empty()).then_some(joined)
	})?;
	let message = message.trim();
	(!message.is_empty()).then(|| message.to_string())
}

/// Runs both steps and returns the URL to navigate to on success.
pub async fn submit<T: Transport>(
	transport: &T,
	endpoints: &ContactEndpoints,
	body: &T::Body,
) -> Result<String, SubmitError> {
	let verification = transport.post(&endpoints.verify_url, body, false).await?;
	if !verification.is_success() {
		return Err(SubmitError::Verification {
			status: verification.status,
			message: server_message(&verification.body),
		});
	}

	let intake = transport.post(&endpoints.intake_url, body, true).await?;
	if !intake.is_success() {
		return Err(SubmitError::Intake {
			status: intake.status,
			message: server_message(&intake.body),
		});
	}

	Ok(endpoints.success_url.clone())
}

/// Re-entrancy guard for the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	Sending,
}

impl SubmissionState {
	/// Moves to `Sending`; `false` if a submission is already in flight.
	pub fn try_begin(&mut self) -> bool {
		match self {
			SubmissionState::Idle => {
				*self = SubmissionState::Sending;
				true
			}
			SubmissionState::Sending => false,
		}
	}

	pub fn finish(&mut self) {
		*self = SubmissionState::Idle;
	}

	pub fn is_sending(self) -> bool {
		self == SubmissionState::Sending
	}
}
