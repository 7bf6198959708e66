//! Response enrichment pipeline.

use crate::catalog::Catalog;
use crate::fieldcode::ParsedFieldCode;
use crate::resolver::{self, EnrichedAnswer};
use crate::response::RawResponse;
use serde::Deserialize;

/// How much labeling the outbound payload carries.
///
/// The three levels consolidate the historically divergent export variants
/// into one knob: ship the raw record as-is, ship coded (question code, raw
/// value) pairs, or resolve everything to human-readable labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Richness {
    /// Raw response record only; no per-field enrichment.
    Raw,
    /// Question codes paired with raw values; no catalog lookups.
    Coded,
    /// Fully resolved question text and answer labels.
    #[default]
    Labeled,
}

/// Enriches every answer field of one response, in stored field order.
///
/// Metadata columns, unanswered fields, identifiers outside the field code
/// grammar, and (for [`Richness::Labeled`]) questions missing from the
/// catalog are skipped. A metadata-only response yields an empty sequence.
/// Pure over its inputs: the same snapshot always produces the same output.
pub fn enrich(response: &RawResponse, catalog: &Catalog, richness: Richness) -> Vec<EnrichedAnswer> {
    if richness == Richness::Raw {
        return Vec::new();
    }

    let mut entries = Vec::new();
    for (field, value) in response.answer_fields() {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            continue;
        };
        let Some(parsed) = ParsedFieldCode::parse(field) else {
            tracing::debug!(field, "field code outside grammar, skipping");
            continue;
        };
        let resolved = match richness {
            Richness::Raw => None,
            Richness::Coded => Some(EnrichedAnswer {
                question: parsed.question_code.clone(),
                answer: value.to_string(),
            }),
            Richness::Labeled => resolver::resolve(&parsed, value, catalog),
        };
        if let Some(entry) = resolved {
            entries.push(entry);
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::sample_catalog;

    fn sample_response() -> RawResponse {
        let mut response = RawResponse::new();
        response.insert("id", Some("7".into()));
        response.insert("token", Some("abc123".into()));
        response.insert("submitdate", Some("2024-03-01 10:00:00".into()));
        response.insert("G1Q00001_SQ003", Some("1".into()));
        response.insert("G2Q00002", Some("Y".into()));
        response.insert("G2Q00002_comment", None);
        response.insert("interviewtime", Some("182.4".into()));
        response
    }

    #[test]
    fn test_labeled_enrichment() {
        let entries = enrich(&sample_response(), &sample_catalog(), Richness::Labeled);
        // "interviewtime" parses as a plain code but is not in the catalog,
        // so only the two real answers survive
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "How satisfied are you?");
        assert_eq!(entries[0].answer, "Support quality");
        assert_eq!(entries[1].question, "Would you recommend us?");
        assert_eq!(entries[1].answer, "Yes");
    }

    #[test]
    fn test_excluded_metadata_never_appears() {
        let entries = enrich(&sample_response(), &sample_catalog(), Richness::Labeled);
        assert!(entries.iter().all(|e| e.question != "token"));
        assert!(entries.iter().all(|e| e.answer != "abc123"));
    }

    #[test]
    fn test_unanswered_fields_are_dropped() {
        let mut response = RawResponse::new();
        response.insert("G2Q00002", Some(String::new()));
        response.insert("G1Q00001_SQ003", None);
        assert!(enrich(&response, &sample_catalog(), Richness::Labeled).is_empty());
    }

    #[test]
    fn test_metadata_only_response_yields_empty_sequence() {
        let mut response = RawResponse::new();
        response.insert("id", Some("7".into()));
        response.insert("submitdate", Some("2024-03-01 10:00:00".into()));
        assert!(enrich(&response, &sample_catalog(), Richness::Labeled).is_empty());
    }

    #[test]
    fn test_coded_richness_skips_label_lookups() {
        let entries = enrich(&sample_response(), &sample_catalog(), Richness::Coded);
        assert!(entries.contains(&EnrichedAnswer {
            question: "G1Q00001".into(),
            answer: "1".into(),
        }));
        assert!(entries.contains(&EnrichedAnswer {
            question: "G2Q00002".into(),
            answer: "Y".into(),
        }));
    }

    #[test]
    fn test_raw_richness_produces_no_entries() {
        assert!(enrich(&sample_response(), &sample_catalog(), Richness::Raw).is_empty());
    }

    #[test]
    fn test_enrichment_is_idempotent_over_a_snapshot() {
        let response = sample_response();
        let catalog = sample_catalog();
        let first = enrich(&response, &catalog, Richness::Labeled);
        let second = enrich(&response, &catalog, Richness::Labeled);
        assert_eq!(first, second);
    }
}
