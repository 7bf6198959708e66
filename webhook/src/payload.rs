//! Outbound payload assembly.

use crate::config::Config;
use crate::handler::CompletedEvent;
use chrono::Local;
use enrich::catalog::{Catalog, Question};
use enrich::pipeline::Richness;
use enrich::resolver::EnrichedAnswer;
use enrich::response::RawResponse;
use serde::{Deserialize, Serialize};

/// Placeholder the platform stores when the submit timestamp was never
/// actually recorded.
pub const SENTINEL_SUBMIT_DATE: &str = "1980-01-01 00:00:00";

/// Participant identity resolved from a response token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// The structure POSTed to the endpoint.
///
/// Superset of the historical export variants: `response` carries the raw
/// record, `answers` the enriched pairs, `questions`/`choices` the catalog;
/// which of them are present depends on the configured [`Richness`].
#[derive(Debug, Serialize)]
pub struct Payload {
    pub api_token: Option<String>,
    pub survey: i64,
    pub event: String,
    #[serde(rename = "respondId")]
    pub respond_id: i64,
    #[serde(rename = "submitDate")]
    pub submit_date: String,
    pub token: Option<String>,
    pub participant: Option<Participant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<RawResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<EnrichedAnswer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Question>>,
}

impl Payload {
    /// Merges metadata, participant, and enrichment output into one wire
    /// structure. Never fails; absent optionals serialize as null.
    pub fn assemble(
        config: &Config,
        event: &CompletedEvent,
        event_name: &str,
        raw: &RawResponse,
        participant: Option<Participant>,
        catalog: &Catalog,
        answers: Vec<EnrichedAnswer>,
    ) -> Payload {
        let (response, answers, questions, choices) = match config.richness {
            Richness::Raw => (Some(raw.clone()), None, None, None),
            Richness::Coded => (None, Some(answers), None, None),
            Richness::Labeled => (
                None,
                Some(answers),
                Some(catalog.questions().to_vec()),
                Some(catalog.choices().to_vec()),
            ),
        };

        Payload {
            api_token: config.auth_token.clone(),
            survey: event.survey_id,
            event: event_name.to_string(),
            respond_id: event.response_id,
            submit_date: corrected_submit_date(raw.submit_date()),
            token: raw.token().map(str::to_string),
            participant,
            response,
            answers,
            questions,
            choices,
        }
    }
}

/// The stored submit date, unless it is empty or the sentinel, in which case
/// the current time at assembly.
pub fn corrected_submit_date(raw: Option<&str>) -> String {
    match raw {
        Some(date) if !date.is_empty() && date != SENTINEL_SUBMIT_DATE => date.to_string(),
        _ => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}
