//! Answer checking for typed, multiple-choice and self-graded responses.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::types::{Direction, Word};

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub correct: bool,
    /// Text to show as "the correct answer".
    pub expected: String,
}

/// What the learner submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    /// Free text (input and adaptive review modes).
    Typed { text: String },
    /// One of the multiple-choice options.
    Choice { option: String },
    /// Flashcard "know" / "don't know".
    SelfGraded { known: bool },
}

/// Typed answer: accepted if its normalized form matches any variant.
///
/// `expected` is the raw answer-side text, including every alternate.
pub fn evaluate_typed(word: &Word, direction: Direction, answer: &str) -> Evaluation {
    let answer = normalize(answer);
    let correct = word
        .accepted_answers(direction)
        .iter()
        .any(|variant| *variant == answer);

    Evaluation {
        correct,
        expected: word.answer_text(direction).to_string(),
    }
}

/// Chosen option: only the canonical (first) variant counts.
pub fn evaluate_choice(word: &Word, direction: Direction, option: &str) -> Evaluation {
    let canonical = word.canonical_answer(direction);

    Evaluation {
        correct: normalize(option) == normalize(&canonical),
        expected: canonical,
    }
}

/// Dispatch on the response kind.
pub fn evaluate(word: &Word, direction: Direction, response: &Response) -> Evaluation {
    match response {
        Response::Typed { text } => evaluate_typed(word, direction, text),
        Response::Choice { option } => evaluate_choice(word, direction, option),
        Response::SelfGraded { known } => Evaluation {
            correct: *known,
            expected: word.answer_text(direction).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::PLACEHOLDER;
    use pretty_assertions::assert_eq;

    fn house() -> Word {
        Word::new("Дом, здание", "בית", "bait").unwrap()
    }

    #[test]
    fn typed_accepts_any_variant() {
        let word = house();
        for answer in ["дом", "  ДОМ ", "здание", "Здание\t"] {
            let result = evaluate_typed(&word, Direction::TargetToPrimary, answer);
            assert!(result.correct, "{:?} should be accepted", answer);
        }
    }

    #[test]
    fn typed_collapses_inner_whitespace() {
        let word = Word::new("good   morning", "בוקר טוב", "").unwrap();
        let result = evaluate_typed(&word, Direction::PrimaryToTarget, " בוקר    טוב ");
        assert!(result.correct);
        let result = evaluate_typed(&word, Direction::TargetToPrimary, "Good Morning");
        assert!(result.correct);
    }

    #[test]
    fn typed_rejects_other_text() {
        let word = house();
        let result = evaluate_typed(&word, Direction::TargetToPrimary, "дом, здание");
        assert!(!result.correct);
        assert_eq!(result.expected, "Дом, здание");

        let result = evaluate_typed(&word, Direction::PrimaryToTarget, "");
        assert!(!result.correct);
        assert_eq!(result.expected, "בית");
    }

    #[test]
    fn typed_falls_back_when_variants_missing() {
        let mut word = house();
        word.target_variants.clear();
        assert!(evaluate_typed(&word, Direction::PrimaryToTarget, "בית").correct);
    }

    #[test]
    fn choice_only_accepts_first_variant() {
        let word = house();
        let right = evaluate_choice(&word, Direction::TargetToPrimary, "дом");
        assert!(right.correct);
        assert_eq!(right.expected, "дом");

        let synonym = evaluate_choice(&word, Direction::TargetToPrimary, "здание");
        assert!(!synonym.correct);
        assert_eq!(synonym.expected, "дом");
    }

    #[test]
    fn choice_compares_normalized() {
        let word = house();
        assert!(evaluate_choice(&word, Direction::TargetToPrimary, " ДОМ").correct);
        assert!(!evaluate_choice(&word, Direction::PrimaryToTarget, PLACEHOLDER).correct);
    }

    #[test]
    fn self_graded_passes_through() {
        let word = house();
        let known = evaluate(&word, Direction::PrimaryToTarget, &Response::SelfGraded { known: true });
        assert_eq!(
            known,
            Evaluation {
                correct: true,
                expected: "בית".to_string(),
            }
        );
        let unknown = evaluate(&word, Direction::PrimaryToTarget, &Response::SelfGraded { known: false });
        assert!(!unknown.correct);
    }

    #[test]
    fn response_wire_shape() {
        let response: Response =
            serde_json::from_str(r#"{"kind":"choice","option":"בית"}"#).unwrap();
        assert_eq!(
            response,
            Response::Choice {
                option: "בית".to_string()
            }
        );
    }

    #[test]
    fn evaluation_does_not_touch_word() {
        let word = house();
        let before = word.clone();
        let _ = evaluate_typed(&word, Direction::PrimaryToTarget, "בית");
        let _ = evaluate_choice(&word, Direction::PrimaryToTarget, "בית");
        assert_eq!(word, before);
    }
}
