//! Failures of the two-step contact submission.

use std::fmt;

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
	/// A request never produced a response.
	Network(String),
	/// The bot-verification relay rejected the submission.
	Verification {
		status: u16,
		message: Option<String>,
	},
	/// The form-intake service rejected the submission.
	Intake {
		status: u16,
		message: Option<String>,
	},
}

impl SubmitError {
	/// Text shown to the visitor in the blocking alert.
	pub fn user_message(&self) -> String {
		match self {
			SubmitError::Network(_) => {
				"Network error. Please check your connection and try again.".to_string()
			}
			SubmitError::Verification { .. } => {
				"Security check failed. Please try again.".to_string()
			}
			SubmitError::Intake {
				message: Some(message),
				..
			} => message.clone(),
			SubmitError::Intake { message: None, .. } => {
				"Something went wrong. Please try again.".to_string()
			}
		}
	}
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SubmitError::Network(detail) => write!(f, "network failure: {detail}"),
			SubmitError::Verification { status, message } => {
				write!(f, "verification rejected with status {status}")?;
				if let Some(message) = message {
					write!(f, ": {message}")?;
				}
				Ok(())
			}
			SubmitError::Intake { status, message } => {
				write!(f, "form intake rejected with status {status}")?;
				if let Some(message) = message {
					write!(f, ": {message}")?;
				}
				Ok(())
			}
		}
	}
}

impl std::error::Error for SubmitError {}
