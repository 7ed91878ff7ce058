//! Presentation snapshots - what a rendering layer needs to draw the quiz.

use character_catalog::Character;
use serde::Serialize;

use super::QuizPhase;
use crate::script::Question;

/// The revealed outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Guess<'c> {
    /// Nothing agrees with the answers.
    NoMatch,
    /// Exactly one character is left.
    Single(&'c Character),
    /// Several remain; `shown` is the head of the list, `remaining` the rest.
    Several {
        shown: Vec<&'c Character>,
        remaining: usize,
    },
}

impl<'c> Guess<'c> {
    pub fn from_candidates(mut candidates: Vec<&'c Character>, preview_limit: usize) -> Self {
        match candidates.len() {
            0 => Guess::NoMatch,
            1 => Guess::Single(candidates[0]),
            total => {
                candidates.truncate(preview_limit);
                Guess::Several {
                    remaining: total - candidates.len(),
                    shown: candidates,
                }
            }
        }
    }
}

/// Everything the presentation layer reads. Styling is its own business.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView<'c> {
    pub phase: QuizPhase,
    pub step: usize,
    pub question_count: usize,
    pub current_question: Option<&'static Question>,
    /// Pending answer for the current question.
    pub selected: Option<String>,
    pub candidates: Vec<&'c Character>,
    pub can_advance: bool,
    pub can_restart: bool,
    /// The advance action will reveal rather than ask again.
    pub is_final_question: bool,
    pub guess: Option<Guess<'c>>,
}
