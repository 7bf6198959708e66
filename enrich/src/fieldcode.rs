//! Response field code grammar.
//!
//! Survey platforms name response columns after the question they belong to:
//! an alphanumeric question code, optionally followed by `_SQ<digits>` for a
//! subquestion (matrix row, multiple-choice option) and/or a trailing
//! `_<digits>` for a rank position. Examples:
//!
//! ```text
//! G2Q00002            plain question
//! G1Q00001_SQ003      subquestion 003 of G1Q00001
//! G3Q00007_2          rank slot 2 of G3Q00007
//! G4Q00009_SQ001_1    subquestion 001, rank slot 1
//! ```
//!
//! Identifiers outside this grammar (system columns, computed fields) do not
//! parse; callers skip them and continue.

use regex::Regex;
use std::sync::LazyLock;

static FIELD_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9]+)(?:_SQ([0-9]+))?(?:_([0-9]+))?$").unwrap());

static CHOICE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SQ[0-9]+$").unwrap());

/// A response field identifier decoded into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedFieldCode {
    /// Code of the top-level question, e.g. `G1Q00001`.
    pub question_code: String,
    /// Digits of the `_SQ` subquestion marker, if present.
    pub sub_code: Option<String>,
    /// Digits of the trailing rank/position marker, if present.
    pub rank_code: Option<String>,
}

impl ParsedFieldCode {
    /// Decodes a raw field identifier, or `None` when it does not follow the
    /// field code grammar.
    pub fn parse(field: &str) -> Option<Self> {
        let caps = FIELD_CODE.captures(field)?;
        Some(Self {
            question_code: caps[1].to_string(),
            sub_code: caps.get(2).map(|m| m.as_str().to_string()),
            rank_code: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    /// Catalog lookup key for the decoded subquestion: sub code `003`
    /// becomes `SQ003`, matching how subquestion codes are stored.
    pub fn sub_lookup_key(&self) -> Option<String> {
        self.sub_code.as_ref().map(|code| format!("SQ{code}"))
    }
}

/// Whether a raw answer value is itself a stored choice code (`SQ045`),
/// as single-choice questions record the selected option.
pub fn is_choice_code(value: &str) -> bool {
    CHOICE_CODE.is_match(value)
}
