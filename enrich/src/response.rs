//! Raw response records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata columns stored alongside the answers; never enriched.
pub const EXCLUDED_FIELDS: &[&str] = &[
    "id",
    "token",
    "submitdate",
    "startlanguage",
    "seed",
    "startdate",
    "datestamp",
    "ipaddr",
    "refurl",
    "lastpage",
];

/// One submission exactly as the platform stores it: an ordered mapping from
/// field code to raw value. `None` and the empty string both mean the field
/// was not answered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawResponse(IndexMap<String, Option<String>>);

impl RawResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|value| value.as_deref())
    }

    pub fn submit_date(&self) -> Option<&str> {
        self.get("submitdate")
    }

    /// Respondent token, when present and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.get("token").filter(|token| !token.is_empty())
    }

    /// Answer fields in stored order, with metadata columns filtered out.
    pub fn answer_fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0
            .iter()
            .filter(|(field, _)| !EXCLUDED_FIELDS.contains(&field.as_str()))
            .map(|(field, value)| (field.as_str(), value.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for RawResponse {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
