//! Completed-survey event handling.

use crate::config::{Config, ValidationError};
use crate::dispatch::{Dispatcher, Outcome};
use crate::errors::Result;
use crate::payload::Payload;
use crate::sources::{ParticipantSource, QuestionSource, ResponseSource};
use enrich::catalog::Catalog;
use enrich::pipeline;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// Event name recorded in the payload and logs.
pub const SURVEY_COMPLETE_EVENT: &str = "afterSurveyComplete";

/// A finalized submission, as delivered by the embedding platform.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct CompletedEvent {
    pub survey_id: i64,
    pub response_id: i64,
}

/// The webhook: configuration plus injected platform collaborators.
///
/// Each event runs the full pipeline to completion before returning; runs
/// share no mutable state and nothing is cached across events.
pub struct SurveyHook {
    config: Config,
    responses: Arc<dyn ResponseSource>,
    participants: Arc<dyn ParticipantSource>,
    questions: Arc<dyn QuestionSource>,
    dispatcher: Dispatcher,
}

impl SurveyHook {
    pub fn new(
        config: Config,
        responses: Arc<dyn ResponseSource>,
        participants: Arc<dyn ParticipantSource>,
        questions: Arc<dyn QuestionSource>,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        let dispatcher = Dispatcher::new(config.target_url.clone());
        Ok(Self {
            config,
            responses,
            participants,
            questions,
            dispatcher,
        })
    }

    /// Entry point for one finalized response. Fires at most one dispatch;
    /// events for surveys outside the configured filter are a no-op.
    pub async fn handle_survey_complete(&self, event: CompletedEvent) -> Result<()> {
        if !self.config.survey_filter.contains(event.survey_id) {
            tracing::debug!(
                survey = event.survey_id,
                "survey not configured for this hook, ignoring event"
            );
            return Ok(());
        }
        self.call_webhook(event, SURVEY_COMPLETE_EVENT).await
    }

    async fn call_webhook(&self, event: CompletedEvent, event_name: &str) -> Result<()> {
        let started = Instant::now();

        let raw = self
            .responses
            .response(event.survey_id, event.response_id)
            .await?;

        let participant = match raw.token() {
            Some(token) => self.participants.participant(event.survey_id, token).await?,
            None => None,
        };

        let rows = self
            .questions
            .questions(event.survey_id, self.config.language.as_deref())
            .await?;
        let catalog = Catalog::from_questions(rows, self.config.language.as_deref());

        let answers = pipeline::enrich(&raw, &catalog, self.config.richness);
        let payload = Payload::assemble(
            &self.config,
            &event,
            event_name,
            &raw,
            participant,
            &catalog,
            answers,
        );
        let serialized = serde_json::to_string(&payload)?;

        let delivery = self.dispatcher.send(&payload).await;

        match &delivery.outcome {
            Outcome::Delivered { status, body } => {
                tracing::info!(
                    event = event_name,
                    status = %status,
                    payload = %serialized,
                    response = %body,
                    elapsed_secs = delivery.elapsed.as_secs_f64(),
                    "webhook dispatched"
                );
                if !status.is_success() {
                    tracing::warn!(
                        status = %status,
                        url = %self.config.target_url,
                        "webhook endpoint returned non-success status"
                    );
                }
            }
            Outcome::Failed { error } => {
                tracing::error!(
                    event = event_name,
                    payload = %serialized,
                    error = %error,
                    "webhook dispatch failed"
                );
            }
        }

        if self.config.debug {
            tracing::debug!(
                url = %self.config.target_url,
                payload = %serialized,
                response = delivery.remote_detail(),
                elapsed_secs = started.elapsed().as_secs_f64(),
                "webhook debug trace"
            );
        }

        Ok(())
    }
}
