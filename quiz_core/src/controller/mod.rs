//! Quiz Controller - the question-flow state machine.
//!
//! The quiz is either asking question `step` or has revealed its guess.
//! Three transitions mutate it:
//! - `select_answer` records the pending answer for the current question
//! - `advance` re-filters and either moves on, or reveals when at most one
//!   candidate is left or the last question has been answered
//! - `restart` returns to the first question with no answers

mod view;

pub use view::*;

use character_catalog::{Catalog, Character};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::filter::CandidateFilter;
use crate::script::{AnswerSet, Question, QUESTIONS};

/// Where the quiz is in its flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum QuizPhase {
    Asking { step: usize },
    Revealed,
}

/// Mutable quiz state. Only the controller's transitions change it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizState {
    /// Index of the question being asked, or the last one asked once revealed.
    pub step: usize,
    pub answers: AnswerSet,
    pub revealed: bool,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.revealed {
            QuizPhase::Revealed
        } else {
            QuizPhase::Asking { step: self.step }
        }
    }
}

/// Drives one play-through over a borrowed catalog.
#[derive(Debug, Clone)]
pub struct QuizController<'c> {
    catalog: &'c Catalog,
    filter: CandidateFilter,
    preview_limit: usize,
    state: QuizState,
}

impl<'c> QuizController<'c> {
    /// Create a controller with the default configuration.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::build(catalog, QuizConfig::default())
    }

    /// Create a controller after checking `config` against the catalog.
    pub fn with_config(catalog: &'c Catalog, config: QuizConfig) -> Result<Self, QuizError> {
        config.validate(catalog)?;
        Ok(Self::build(catalog, config))
    }

    fn build(catalog: &'c Catalog, config: QuizConfig) -> Self {
        Self {
            catalog,
            filter: CandidateFilter::new(config.overrides),
            preview_limit: config.preview_limit,
            state: QuizState::new(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    pub fn is_revealed(&self) -> bool {
        self.state.revealed
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.state.answers
    }

    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    /// The question being asked, or `None` once the guess is revealed.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.state.revealed {
            None
        } else {
            QUESTIONS.get(self.state.step)
        }
    }

    /// The answer recorded for the current question, if any.
    pub fn selected(&self) -> Option<&str> {
        self.current_question()
            .and_then(|question| self.state.answers.get(question.key))
    }

    /// Candidates for the current answers. Recomputed on every call.
    pub fn candidates(&self) -> Vec<&'c Character> {
        self.filter.apply(self.catalog, &self.state.answers)
    }

    /// Whether `advance` would be accepted right now.
    pub fn can_advance(&self) -> bool {
        self.selected().is_some()
    }

    /// Record the answer for the current question without moving on.
    pub fn select_answer(&mut self, value: &str) -> Result<(), QuizError> {
        let Some(question) = self.current_question() else {
            warn!(value = %value, "answer selected after reveal");
            return Err(QuizError::AlreadyRevealed);
        };

        if !question.has_option(value) {
            warn!(attribute = %question.key, value = %value, "answer is not an option");
            return Err(QuizError::UnknownOption {
                attribute: question.key,
                value: value.to_string(),
            });
        }

        self.state.answers.record(question.key, value);
        debug!(step = self.state.step, attribute = %question.key, value = %value, "answer selected");
        Ok(())
    }

    /// Commit the current answer and move to the next phase.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        let Some(question) = self.current_question() else {
            warn!("advance requested after reveal");
            return Err(QuizError::AlreadyRevealed);
        };

        if !self.state.answers.contains(question.key) {
            warn!(attribute = %question.key, "advance requested without an answer");
            return Err(QuizError::MissingAnswer {
                attribute: question.key,
            });
        }

        let remaining = self.candidates().len();
        let is_last = self.state.step + 1 == self.question_count();

        if remaining <= 1 || is_last {
            self.state.revealed = true;
            info!(step = self.state.step, candidates = remaining, "quiz revealed");
        } else {
            self.state.step += 1;
            debug!(step = self.state.step, candidates = remaining, "next question");
        }

        Ok(self.phase())
    }

    /// Reset to the first question with no answers.
    pub fn restart(&mut self) {
        self.state = QuizState::new();
        debug!("quiz restarted");
    }

    /// Whether a restart action should be offered.
    ///
    /// `restart` itself is accepted in any state; this reports whether there
    /// is anything to reset.
    pub fn can_restart(&self) -> bool {
        self.state.revealed || self.state.step > 0
    }

    /// The revealed outcome, or `None` while still asking.
    pub fn guess(&self) -> Option<Guess<'c>> {
        self.state
            .revealed
            .then(|| Guess::from_candidates(self.candidates(), self.preview_limit))
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> QuizView<'c> {
        let candidates = self.candidates();
        let guess = self
            .state
            .revealed
            .then(|| Guess::from_candidates(candidates.clone(), self.preview_limit));

        QuizView {
            phase: self.phase(),
            step: self.state.step,
            question_count: self.question_count(),
            current_question: self.current_question(),
            selected: self.selected().map(str::to_string),
            can_advance: self.can_advance(),
            can_restart: self.can_restart(),
            is_final_question: !self.state.revealed && self.state.step + 1 == self.question_count(),
            candidates,
            guess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use character_catalog::{Attribute, Element, Region, Weapon};

    fn small_catalog() -> Catalog {
        Catalog::from_characters(vec![
            Character::new("Venti", Element::Anemo, Weapon::Bow, 5, Region::Mondstadt),
            Character::new("Bennett", Element::Pyro, Weapon::Sword, 4, Region::Mondstadt),
            Character::new("Xiangling", Element::Pyro, Weapon::Polearm, 4, Region::Liyue),
            Character::new("Hu Tao", Element::Pyro, Weapon::Polearm, 5, Region::Liyue),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let catalog = small_catalog();
        let quiz = QuizController::new(&catalog);

        assert_eq!(quiz.phase(), QuizPhase::Asking { step: 0 });
        assert!(quiz.answers().is_empty());
        assert!(!quiz.is_revealed());
        assert_eq!(quiz.current_question().unwrap().key, Attribute::Element);
        assert_eq!(quiz.candidates().len(), 4);
        assert!(!quiz.can_advance());
        assert!(!quiz.can_restart());
    }

    #[test]
    fn test_select_does_not_advance() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        quiz.select_answer("Pyro").unwrap();

        assert_eq!(quiz.phase(), QuizPhase::Asking { step: 0 });
        assert_eq!(quiz.selected(), Some("Pyro"));
        // The preview follows the pending answer before advancing.
        assert_eq!(quiz.candidates().len(), 3);

        quiz.select_answer("Anemo").unwrap();
        assert_eq!(quiz.candidates().len(), 1);
        assert_eq!(quiz.answers().len(), 1);
    }

    #[test]
    fn test_advance_moves_to_next_question() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        quiz.select_answer("Pyro").unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizPhase::Asking { step: 1 });
        assert_eq!(quiz.current_question().unwrap().key, Attribute::Weapon);
        assert!(quiz.selected().is_none());
        assert!(quiz.can_restart());
    }

    #[test]
    fn test_single_candidate_reveals_early() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        quiz.select_answer("Anemo").unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizPhase::Revealed);

        assert!(quiz.current_question().is_none());
        assert!(matches!(quiz.guess(), Some(Guess::Single(c)) if c.name == "Venti"));
    }

    #[test]
    fn test_no_candidates_reveals_early() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        quiz.select_answer("Cryo").unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizPhase::Revealed);
        assert!(matches!(quiz.guess(), Some(Guess::NoMatch)));
    }

    #[test]
    fn test_last_question_reveals() {
        let catalog = Catalog::from_characters(vec![
            Character::new("Xiangling", Element::Pyro, Weapon::Polearm, 4, Region::Liyue),
            Character::new("Xiangling Twin", Element::Pyro, Weapon::Polearm, 4, Region::Liyue),
        ])
        .unwrap();
        let mut quiz = QuizController::new(&catalog);

        for answer in ["Pyro", "Polearm", "4"] {
            quiz.select_answer(answer).unwrap();
            assert!(matches!(quiz.advance().unwrap(), QuizPhase::Asking { .. }));
        }

        assert!(quiz.view().is_final_question);
        quiz.select_answer("Liyue").unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizPhase::Revealed);
        assert_eq!(quiz.state().step, 3);
        assert!(matches!(quiz.guess(), Some(Guess::Several { remaining: 0, .. })));
    }

    #[test]
    fn test_advance_without_answer_is_refused() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        let result = quiz.advance();
        assert!(matches!(
            result,
            Err(QuizError::MissingAnswer { attribute: Attribute::Element })
        ));
        assert_eq!(quiz.state(), &QuizState::new());
    }

    #[test]
    fn test_unknown_option_is_refused() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        let result = quiz.select_answer("Sword");
        assert!(matches!(result, Err(QuizError::UnknownOption { .. })));
        assert!(quiz.answers().is_empty());
    }

    #[test]
    fn test_revealed_quiz_refuses_transitions() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        quiz.select_answer("Anemo").unwrap();
        quiz.advance().unwrap();

        assert!(matches!(quiz.select_answer("Pyro"), Err(QuizError::AlreadyRevealed)));
        assert!(matches!(quiz.advance(), Err(QuizError::AlreadyRevealed)));
        assert_eq!(quiz.answers().get(Attribute::Element), Some("Anemo"));
    }

    #[test]
    fn test_restart_from_revealed() {
        let catalog = small_catalog();
        let mut quiz = QuizController::new(&catalog);

        quiz.select_answer("Anemo").unwrap();
        quiz.advance().unwrap();
        assert!(quiz.is_revealed());

        quiz.restart();

        assert_eq!(quiz.state(), &QuizState::new());
        assert_eq!(quiz.phase(), QuizPhase::Asking { step: 0 });
        assert_eq!(quiz.candidates().len(), catalog.len());
    }

    #[test]
    fn test_bundled_traveler_walkthrough() {
        let catalog = Catalog::bundled().unwrap();
        let mut quiz = QuizController::new(&catalog);

        for answer in ["Cryo", "Sword", "5"] {
            quiz.select_answer(answer).unwrap();
            assert!(matches!(quiz.advance().unwrap(), QuizPhase::Asking { .. }));
        }

        quiz.select_answer("Traveler").unwrap();
        assert_eq!(quiz.advance().unwrap(), QuizPhase::Revealed);
        assert!(matches!(quiz.guess(), Some(Guess::Single(c)) if c.name == "Skirk"));
    }

    #[test]
    fn test_with_config_validates_overrides() {
        let catalog = small_catalog();
        let result = QuizController::with_config(&catalog, QuizConfig::default());
        assert!(matches!(result, Err(QuizError::UnknownSurvivor { .. })));

        let config = QuizConfig {
            preview_limit: 1,
            overrides: crate::filter::OverridePolicy::none(),
        };
        let mut quiz = QuizController::with_config(&catalog, config).unwrap();
        quiz.select_answer("Pyro").unwrap();
        for answer in ["Polearm", "4"] {
            quiz.advance().unwrap();
            quiz.select_answer(answer).unwrap();
        }
        quiz.advance().unwrap();
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
        assert!(matches!(quiz.guess(), Some(Guess::Single(c)) if c.name == "Xiangling"));
    }
}
