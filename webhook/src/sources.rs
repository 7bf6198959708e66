//! Platform collaborator seams.
//!
//! The survey platform owns the storage; this crate only reads through these
//! traits. Implementations are expected to use parameterized queries (token
//! values come straight from respondents).

use crate::payload::Participant;
use async_trait::async_trait;
use enrich::catalog::Question;
use enrich::response::RawResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Response lookup failed: {0}")]
    Response(String),

    #[error("Participant lookup failed: {0}")]
    Participant(String),

    #[error("Question lookup failed: {0}")]
    Questions(String),
}

/// Raw response records by survey and response id.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    /// Full raw record of one submission, field order preserved.
    async fn response(&self, survey_id: i64, response_id: i64) -> Result<RawResponse, SourceError>;
}

/// Participant identities by token.
#[async_trait]
pub trait ParticipantSource: Send + Sync {
    /// `None` when the token has no matching participant; not an error.
    async fn participant(
        &self,
        survey_id: i64,
        token: &str,
    ) -> Result<Option<Participant>, SourceError>;
}

/// Question and subquestion rows per survey.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// All questions of a survey, one row per localization. An empty survey
    /// returns an empty vec.
    async fn questions(
        &self,
        survey_id: i64,
        language: Option<&str>,
    ) -> Result<Vec<Question>, SourceError>;
}
