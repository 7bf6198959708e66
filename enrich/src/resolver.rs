//! Answer resolution.
//!
//! Maps one decoded field and its raw value to a human-readable
//! (question text, answer label) pair using the catalog. Misses never abort
//! enrichment: an unknown question skips the field, an unknown subquestion
//! falls back to the raw value.

use crate::catalog::Catalog;
use crate::fieldcode::{self, ParsedFieldCode};
use serde::Serialize;

/// A resolved, human-readable answer. Built once per response field and
/// discarded after payload assembly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnrichedAnswer {
    pub question: String,
    pub answer: String,
}

/// Resolves one field against the catalog.
///
/// Returns `None` when the field carries no answer (empty value) or its
/// question code is not in the catalog; the caller skips such fields.
pub fn resolve(parsed: &ParsedFieldCode, raw_value: &str, catalog: &Catalog) -> Option<EnrichedAnswer> {
    if raw_value.is_empty() {
        return None;
    }
    let question = catalog.question_by_code(&parsed.question_code)?;

    let answer = if let Some(key) = parsed.sub_lookup_key() {
        // Matrix/multiple-choice column: the label is the subquestion text
        match catalog.child_by_code(question.qid, &key) {
            Some(child) => child.display_text().to_string(),
            None => raw_value.to_string(),
        }
    } else if fieldcode::is_choice_code(raw_value) {
        // Single choice stored as the selected option's code
        match catalog.child_by_code(question.qid, raw_value) {
            Some(child) => child.display_text().to_string(),
            None => raw_value.to_string(),
        }
    } else {
        match raw_value {
            "Y" => "Yes".to_string(),
            "N" => "No".to_string(),
            other => other.to_string(),
        }
    };

    Some(EnrichedAnswer {
        question: question.display_text().to_string(),
        answer,
    })
}
