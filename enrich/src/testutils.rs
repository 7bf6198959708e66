use crate::catalog::{Catalog, Question};

pub fn question(qid: i64, code: &str, text: &str) -> Question {
    question_in(qid, code, text, "en")
}

pub fn question_in(qid: i64, code: &str, text: &str, language: &str) -> Question {
    Question {
        qid,
        sid: 42,
        parent_qid: 0,
        qtype: "L".to_string(),
        code: code.to_string(),
        text: Some(text.to_string()),
        language: Some(language.to_string()),
    }
}

pub fn subquestion(qid: i64, parent_qid: i64, code: &str, text: &str) -> Question {
    Question {
        parent_qid,
        ..question(qid, code, text)
    }
}

/// Three-question catalog covering the interesting shapes: a matrix with
/// subquestions, a yes/no question, and a single choice whose options are
/// stored as `SQ` codes.
pub fn sample_catalog() -> Catalog {
    Catalog::from_questions(
        vec![
            question(1, "G1Q00001", "How satisfied are you?"),
            subquestion(2, 1, "SQ003", "Support quality"),
            subquestion(3, 1, "SQ004", "Response time"),
            question(4, "G2Q00002", "Would you recommend us?"),
            question(5, "G3Q00003", "Which channel did you use?"),
            subquestion(6, 5, "SQ045", "Email"),
            subquestion(7, 5, "SQ046", "Phone"),
        ],
        None,
    )
}
