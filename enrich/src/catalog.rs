//! Per-survey question snapshot.
//!
//! A survey fetch returns one row per (question, localization). The catalog
//! collapses those rows into one entry per question for a requested language,
//! then indexes top-level questions by code and subquestions by
//! (parent qid, code). The snapshot is immutable for the duration of one
//! event; nothing is cached across events.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One question row as stored by the survey platform.
///
/// `parent_qid == 0` marks a top-level question; any other value references
/// the `qid` of a top-level question, making this row a subquestion or
/// choice. `text` and `language` come from the localization table and may be
/// absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub qid: i64,
    pub sid: i64,
    pub parent_qid: i64,
    #[serde(rename = "type")]
    pub qtype: String,
    #[serde(rename = "question_code")]
    pub code: String,
    #[serde(rename = "question_text")]
    pub text: Option<String>,
    pub language: Option<String>,
}

impl Question {
    /// Localized text when present and non-empty, otherwise the raw code.
    pub fn display_text(&self) -> &str {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.code)
    }
}

/// Lookup structure over one survey's questions.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    questions: Vec<Question>,
    by_code: HashMap<String, usize>,
    choices: Vec<Question>,
    child_index: HashMap<(i64, String), usize>,
}

impl Catalog {
    /// Builds a catalog from raw question rows, keeping at most one row per
    /// qid. With a requested language, the row localized in that language
    /// wins; a question with no such localization keeps its place but drops
    /// its text, so display falls back to the question code.
    pub fn from_questions(rows: Vec<Question>, language: Option<&str>) -> Self {
        let mut picked: IndexMap<i64, Question> = IndexMap::new();
        for row in rows {
            match picked.get(&row.qid) {
                None => {
                    picked.insert(row.qid, row);
                }
                Some(existing) => {
                    let existing_matches =
                        language.is_some() && existing.language.as_deref() == language;
                    let row_matches = language.is_some() && row.language.as_deref() == language;
                    if row_matches && !existing_matches {
                        picked.insert(row.qid, row);
                    }
                }
            }
        }

        let mut catalog = Catalog::default();
        for mut question in picked.into_values() {
            if language.is_some() && question.language.as_deref() != language {
                question.text = None;
            }
            if question.parent_qid == 0 {
                catalog
                    .by_code
                    .insert(question.code.clone(), catalog.questions.len());
                catalog.questions.push(question);
            } else {
                catalog.child_index.insert(
                    (question.parent_qid, question.code.clone()),
                    catalog.choices.len(),
                );
                catalog.choices.push(question);
            }
        }
        catalog
    }

    /// Top-level question with the given code.
    pub fn question_by_code(&self, code: &str) -> Option<&Question> {
        self.by_code.get(code).map(|&idx| &self.questions[idx])
    }

    /// Subquestion/choice with the given code under a top-level question.
    pub fn child_by_code(&self, parent_qid: i64, code: &str) -> Option<&Question> {
        self.child_index
            .get(&(parent_qid, code.to_string()))
            .map(|&idx| &self.choices[idx])
    }

    /// Top-level questions in fetch order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Subquestions and choices in fetch order.
    pub fn choices(&self) -> &[Question] {
        &self.choices
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.choices.is_empty()
    }
}
