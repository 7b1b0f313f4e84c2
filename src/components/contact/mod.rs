//! Contact form and its verification-then-intake submission flow.

mod component;
pub mod error;
pub mod fetch;
pub mod flow;

pub use component::ContactForm;
pub use error::SubmitError;
pub use fetch::FetchTransport;
pub use flow::{ContactEndpoints, Reply, SubmissionState, Transport, submit};
