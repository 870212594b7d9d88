use super::*;
use crate::error::QuizError;
use crate::game::{Advance, GuessResult};

impl FlagQuizApp {
    /// Handles a tap on one of the three flags. Rejected taps are logged and
    /// otherwise ignored.
    pub fn flag_tapped(&mut self, index: usize) -> Option<GuessResult> {
        match self.round.submit_guess(index) {
            Ok(result) => {
                log::debug!(
                    "Question {}: tapped {} ({}), score {}",
                    self.round.question_number(),
                    index,
                    result.title(),
                    result.score
                );
                if result.is_last_question {
                    log::info!("Round over, final score {}", result.score);
                }
                Some(result)
            }
            Err(err @ QuizError::InvalidSelection { .. }) => {
                log::warn!("{err}");
                None
            }
            Err(err) => {
                log::debug!("Ignoring tap: {err}");
                None
            }
        }
    }

    /// "Continue" after a score alert.
    pub fn ask_question(&mut self) -> Advance {
        let advance = self.round.advance_question(&mut self.rng);
        match advance {
            Advance::NextQuestion { number } => {
                log::debug!("Asking question {number}: {}", self.round.target_country())
            }
            Advance::RoundComplete { final_score } => {
                log::info!("Round complete, final score {final_score}")
            }
        }
        advance
    }

    /// "Play again" after the game over alert.
    pub fn reset_game(&mut self) {
        self.round.reset(&mut self.rng);
        log::info!("New round started");
    }
}
