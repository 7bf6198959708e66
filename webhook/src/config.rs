use enrich::pipeline::Richness;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Target URL scheme must be http or https, got: {0}")]
    UnsupportedScheme(String),

    #[error("Survey filter is empty")]
    EmptySurveyFilter,
}

/// Webhook configuration
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Endpoint the payload is POSTed to
    ///
    /// Note: Uses the `url::Url` type for compile-time URL validation.
    /// Invalid URLs will be rejected during config deserialization.
    pub target_url: Url,
    /// Survey ids this hook fires for; accepts a list or a comma-separated
    /// string such as "10, 20,30"
    pub survey_filter: SurveyFilter,
    /// Token sent verbatim in the payload's `api_token` field
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Emit a debug trace (payload, target, remote response, elapsed time)
    /// per dispatch
    #[serde(default)]
    pub debug: bool,
    /// Labeling level of the outbound payload
    #[serde(default)]
    pub richness: Richness,
    /// Requested catalog language; question text falls back to the raw code
    /// when no such localization exists
    #[serde(default)]
    pub language: Option<String>,
}

impl Config {
    /// Validates the webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.target_url.scheme() {
            "http" | "https" => {}
            other => return Err(ValidationError::UnsupportedScheme(other.to_string())),
        }
        if self.survey_filter.is_empty() {
            return Err(ValidationError::EmptySurveyFilter);
        }
        Ok(())
    }
}

/// Set of survey ids the hook is enabled for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurveyFilter(BTreeSet<i64>);

impl SurveyFilter {
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }

    pub fn contains(&self, survey_id: i64) -> bool {
        self.0.contains(&survey_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for SurveyFilter {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect::<Result<BTreeSet<i64>, _>>()
            .map(SurveyFilter)
    }
}

impl<'de> Deserialize<'de> for SurveyFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Ids(Vec<i64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Repr::Ids(ids) => Ok(SurveyFilter::from_ids(ids)),
        }
    }
}
