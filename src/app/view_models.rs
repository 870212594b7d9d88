use super::*;
use crate::game::RoundPhase;

impl FlagQuizApp {
    pub fn view(&self) -> QuizView {
        let candidates = self.round.candidates();
        let candidate_images = std::array::from_fn(|i| {
            self.country(&candidates[i])
                .map(|c| c.image().to_string())
                .unwrap_or_else(|| candidates[i].clone())
        });

        QuizView {
            displayed_country_name: self.round.target_country().to_string(),
            candidate_images,
            score: self.round.score(),
            question_number: self.round.question_number(),
            last_result_message: self.round.last_result().map(|r| r.message()),
            is_round_over: self.round.is_over(),
        }
    }

    /// Title of the alert shown after a guess, if one is pending.
    pub fn alert_title(&self) -> Option<&'static str> {
        match self.round.phase() {
            RoundPhase::AwaitingGuess => None,
            RoundPhase::Answered => self.round.last_result().map(|r| r.title()),
            RoundPhase::Complete => Some("Game over!"),
        }
    }
}
