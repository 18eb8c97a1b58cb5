//! Answer grading for the six question shapes.

use crate::types::{AnswerPayload, QuestionKind};
use std::collections::HashSet;

/// Whether a submitted answer is correct for the given question.
///
/// Pure and total: an answer whose shape does not match the question's
/// declared type is a caller bug and grades as incorrect (with a
/// `debug_assert` to surface it during development).
pub fn is_correct(question: &QuestionKind, answer: &AnswerPayload) -> bool {
    match question {
        QuestionKind::MultipleChoice {
            options,
            allow_multiple,
        } => {
            if *allow_multiple {
                let AnswerPayload::Ids(selected) = answer else {
                    return shape_mismatch(question, answer);
                };
                let expected: HashSet<&str> = options
                    .iter()
                    .filter(|o| o.is_correct)
                    .map(|o| o.id.as_str())
                    .collect();
                let submitted: HashSet<&str> = selected.iter().map(String::as_str).collect();
                submitted == expected
            } else {
                let AnswerPayload::Text(selected) = answer else {
                    return shape_mismatch(question, answer);
                };
                options
                    .iter()
                    .any(|o| o.is_correct && o.id == *selected)
            }
        }
        QuestionKind::TrueFalse { correct_answer } => {
            let AnswerPayload::Bool(submitted) = answer else {
                return shape_mismatch(question, answer);
            };
            submitted == correct_answer
        }
        QuestionKind::FillBlank {
            correct_answers,
            case_sensitive,
        } => {
            let AnswerPayload::Text(submitted) = answer else {
                return shape_mismatch(question, answer);
            };
            let submitted = submitted.trim();
            if *case_sensitive {
                correct_answers.iter().any(|c| c == submitted)
            } else {
                let submitted = submitted.to_lowercase();
                correct_answers
                    .iter()
                    .any(|c| c.to_lowercase() == submitted)
            }
        }
        QuestionKind::Sort { items } => {
            let AnswerPayload::Order(submitted) = answer else {
                return shape_mismatch(question, answer);
            };
            let mut canonical: Vec<usize> = (0..items.len()).collect();
            canonical.sort_by_key(|&i| items[i].correct_order);
            *submitted == canonical
        }
        QuestionKind::BopomofoToChar { correct_char, .. } => {
            let AnswerPayload::Text(submitted) = answer else {
                return shape_mismatch(question, answer);
            };
            submitted.trim() == correct_char
        }
        QuestionKind::CharToBopomofo {
            correct_bopomofo, ..
        } => {
            let AnswerPayload::Text(submitted) = answer else {
                return shape_mismatch(question, answer);
            };
            // Exact comparison only; tone-aware fuzzy matching is the
            // phonetic validator's job and is invoked separately.
            submitted.trim() == correct_bopomofo
        }
    }
}

fn shape_mismatch(question: &QuestionKind, answer: &AnswerPayload) -> bool {
    debug_assert!(
        false,
        "answer shape {:?} does not match question {:?}",
        answer, question
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChoiceOption, SortItem};

    fn option(id: &str, is_correct: bool) -> ChoiceOption {
        ChoiceOption {
            id: id.into(),
            text: format!("option {id}"),
            is_correct,
        }
    }

    fn text(s: &str) -> AnswerPayload {
        AnswerPayload::Text(s.into())
    }

    fn ids(values: &[&str]) -> AnswerPayload {
        AnswerPayload::Ids(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn single_choice_matches_the_flagged_option() {
        let question = QuestionKind::MultipleChoice {
            options: vec![option("a", false), option("b", true), option("c", false)],
            allow_multiple: false,
        };
        assert!(is_correct(&question, &text("b")));
        assert!(!is_correct(&question, &text("a")));
    }

    #[test]
    fn multi_select_requires_exact_set_equality() {
        let question = QuestionKind::MultipleChoice {
            options: vec![option("a", true), option("b", true), option("c", false)],
            allow_multiple: true,
        };
        // Order does not matter
        assert!(is_correct(&question, &ids(&["b", "a"])));
        // Missing one
        assert!(!is_correct(&question, &ids(&["a"])));
        // Extra one
        assert!(!is_correct(&question, &ids(&["a", "b", "c"])));
        assert!(!is_correct(&question, &ids(&[])));
    }

    #[test]
    fn true_false_compares_booleans() {
        let question = QuestionKind::TrueFalse {
            correct_answer: true,
        };
        assert!(is_correct(&question, &AnswerPayload::Bool(true)));
        assert!(!is_correct(&question, &AnswerPayload::Bool(false)));
    }

    #[test]
    fn fill_blank_trims_and_accepts_any_listed_answer() {
        let question = QuestionKind::FillBlank {
            correct_answers: vec!["horse".into(), "pony".into()],
            case_sensitive: true,
        };
        assert!(is_correct(&question, &text("  pony  ")));
        assert!(is_correct(&question, &text("horse")));
        assert!(!is_correct(&question, &text("Horse")));
        assert!(!is_correct(&question, &text("mule")));
    }

    #[test]
    fn fill_blank_case_insensitive_when_flagged() {
        let question = QuestionKind::FillBlank {
            correct_answers: vec!["Horse".into()],
            case_sensitive: false,
        };
        assert!(is_correct(&question, &text("hOrSe")));
        assert!(!is_correct(&question, &text("pony")));
    }

    #[test]
    fn sort_answer_is_indices_in_canonical_order() {
        // Stored out of order: correct_order says c (2nd item) first,
        // then a (0th), then b (1st).
        let question = QuestionKind::Sort {
            items: vec![
                SortItem {
                    id: "a".into(),
                    text: "second".into(),
                    correct_order: 2,
                },
                SortItem {
                    id: "b".into(),
                    text: "third".into(),
                    correct_order: 3,
                },
                SortItem {
                    id: "c".into(),
                    text: "first".into(),
                    correct_order: 1,
                },
            ],
        };
        assert!(is_correct(&question, &AnswerPayload::Order(vec![2, 0, 1])));
        assert!(!is_correct(&question, &AnswerPayload::Order(vec![0, 1, 2])));
        // Wrong length
        assert!(!is_correct(&question, &AnswerPayload::Order(vec![2, 0])));
    }

    #[test]
    fn bopomofo_to_char_requires_exact_character() {
        let question = QuestionKind::BopomofoToChar {
            bopomofo: "ㄇㄚˇ".into(),
            correct_char: "馬".into(),
        };
        assert!(is_correct(&question, &text("馬")));
        assert!(is_correct(&question, &text(" 馬 ")));
        assert!(!is_correct(&question, &text("嗎")));
    }

    #[test]
    fn char_to_bopomofo_requires_exact_transcription() {
        let question = QuestionKind::CharToBopomofo {
            character: "馬".into(),
            correct_bopomofo: "ㄇㄚˇ".into(),
        };
        assert!(is_correct(&question, &text("ㄇㄚˇ")));
        assert!(is_correct(&question, &text("ㄇㄚˇ ")));
        // No tone normalization at this layer
        assert!(!is_correct(&question, &text("ㄇㄚ")));
    }
}
