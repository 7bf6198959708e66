//! Survey-completion webhook.
//!
//! Listens for completed-survey events (delivered by the embedding platform
//! as plain `{survey_id, response_id}` values), enriches the raw response
//! into human-readable question/answer pairs via the `enrich` crate, and
//! POSTs one JSON payload to the configured endpoint. Delivery is
//! fire-and-forget: one attempt per event, failures are logged and absorbed.
//!
//! Platform collaborators (response store, participant table, question
//! catalog) are injected through the traits in [`sources`]; this crate never
//! constructs SQL or touches the platform's storage directly.

pub mod config;
pub mod dispatch;
pub mod errors;
pub mod handler;
pub mod metrics_defs;
pub mod payload;
pub mod sources;
#[cfg(test)]
pub mod testutils;

pub use config::Config;
pub use handler::{CompletedEvent, SurveyHook};
