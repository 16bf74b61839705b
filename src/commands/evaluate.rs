//! Evaluate command
//!
//! Feedback for one guess against a chosen target, without a session.

use crate::core::{Feedback, Word, WordError};

/// A guess, the target it was scored against, and the feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns `WordError` if the guess is not five letters or the target is not
/// five ASCII letters.
pub fn evaluate_words(guess: &str, target: &str) -> Result<Evaluation, WordError> {
    let guess = Word::guess(guess)?;
    let target = Word::new(target)?;
    let feedback = Feedback::evaluate(&guess, &target);

    Ok(Evaluation {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_scores() {
        let evaluation = evaluate_words("spool", " Spoon ").unwrap();
        assert_eq!(evaluation.guess.text(), "SPOOL");
        assert_eq!(evaluation.target.text(), "SPOON");
        assert_eq!(evaluation.feedback.to_emoji(), "🟩🟩🟩🟩⬜");
    }

    #[test]
    fn rejects_bad_target() {
        assert_eq!(
            evaluate_words("spool", "spoons"),
            Err(WordError::InvalidLength(6))
        );
    }

    #[test]
    fn accented_guess_against_plain_target() {
        let evaluation = evaluate_words("crème", "creme").unwrap();
        assert_eq!(evaluation.guess.text(), "CRÈME");
        assert_eq!(evaluation.feedback.to_emoji(), "🟩🟩⬜🟩🟩");
    }

    #[test]
    fn rejects_accented_target() {
        assert_eq!(evaluate_words("creme", "crème"), Err(WordError::NonAscii));
    }

    #[test]
    fn rejects_bad_guess() {
        assert!(evaluate_words("sp0ol", "spoon").is_err());
    }
}
