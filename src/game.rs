//! Round state and the transitions driven by player input.
//!
//! A [`Round`] owns the shuffled country pool, the index of the correct
//! candidate among the three shown, the score and the question counter.
//! Randomness is passed in by the caller so rounds can be replayed from a
//! seed.

use crate::error::QuizError;
use crate::model::{CANDIDATES_PER_QUESTION, ROUND_LENGTH};
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    AwaitingGuess,
    /// A guess was taken; waiting for the player to continue.
    Answered,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong { chosen: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: GuessOutcome,
    pub score: u32,
    pub is_last_question: bool,
}

impl GuessResult {
    pub fn is_correct(&self) -> bool {
        matches!(self.outcome, GuessOutcome::Correct)
    }

    pub fn title(&self) -> &'static str {
        match self.outcome {
            GuessOutcome::Correct => "Correct!",
            GuessOutcome::Wrong { .. } => "Wrong!",
        }
    }

    pub fn message(&self) -> String {
        match &self.outcome {
            GuessOutcome::Correct => format!("Your score is {}.", self.score),
            GuessOutcome::Wrong { chosen } => {
                format!("That's the flag of {chosen}.\nYour score is {}.", self.score)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    NextQuestion { number: u32 },
    RoundComplete { final_score: u32 },
}

#[derive(Clone, Debug)]
pub struct Round {
    pool: Vec<String>,
    correct_index: usize,
    score: u32,
    question_number: u32,
    phase: RoundPhase,
    last_result: Option<GuessResult>,
}

impl Round {
    pub fn new<R: Rng>(pool: Vec<String>, rng: &mut R) -> Result<Self, QuizError> {
        if pool.len() < CANDIDATES_PER_QUESTION {
            return Err(QuizError::PoolTooSmall {
                found: pool.len(),
                required: CANDIDATES_PER_QUESTION,
            });
        }

        let mut round = Self {
            pool,
            correct_index: 0,
            score: 0,
            question_number: 1,
            phase: RoundPhase::AwaitingGuess,
            last_result: None,
        };
        round.reset(rng);
        Ok(round)
    }

    /// Starts over: fresh shuffle, score 0, question 1.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.score = 0;
        self.question_number = 1;
        self.last_result = None;
        self.phase = RoundPhase::AwaitingGuess;
        self.shuffle(rng);
    }

    pub fn submit_guess(&mut self, selected: usize) -> Result<GuessResult, QuizError> {
        if selected >= CANDIDATES_PER_QUESTION {
            return Err(QuizError::InvalidSelection { index: selected });
        }
        match self.phase {
            RoundPhase::Complete => return Err(QuizError::RoundOver),
            RoundPhase::Answered => return Err(QuizError::AlreadyAnswered),
            RoundPhase::AwaitingGuess => {}
        }

        let outcome = if selected == self.correct_index {
            self.score += 1;
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong {
                chosen: self.pool[selected].clone(),
            }
        };

        let is_last_question = self.question_number >= ROUND_LENGTH;
        self.phase = if is_last_question {
            RoundPhase::Complete
        } else {
            RoundPhase::Answered
        };

        let result = GuessResult {
            outcome,
            score: self.score,
            is_last_question,
        };
        self.last_result = Some(result.clone());
        Ok(result)
    }

    pub fn advance_question<R: Rng>(&mut self, rng: &mut R) -> Advance {
        if self.phase == RoundPhase::Complete || self.question_number >= ROUND_LENGTH {
            self.phase = RoundPhase::Complete;
            return Advance::RoundComplete {
                final_score: self.score,
            };
        }

        self.question_number += 1;
        self.phase = RoundPhase::AwaitingGuess;
        self.shuffle(rng);
        Advance::NextQuestion {
            number: self.question_number,
        }
    }

    fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.pool.shuffle(rng);
        self.correct_index = rng.gen_range(0..CANDIDATES_PER_QUESTION);
    }

    /// The flags on screen, in display order.
    pub fn candidates(&self) -> &[String] {
        &self.pool[..CANDIDATES_PER_QUESTION]
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// The country the player is asked to find.
    pub fn target_country(&self) -> &str {
        &self.pool[self.correct_index]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    pub fn last_result(&self) -> Option<&GuessResult> {
        self.last_result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<String> {
        [
            "Estonia", "France", "Germany", "Ireland", "Italy", "Nigeria", "Poland", "Russia",
            "Spain", "UK", "US",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn wrong_index(round: &Round) -> usize {
        (round.correct_index() + 1) % CANDIDATES_PER_QUESTION
    }

    #[test]
    fn new_round_starts_at_question_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let round = Round::new(pool(), &mut rng).unwrap();
        assert_eq!(round.score(), 0);
        assert_eq!(round.question_number(), 1);
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
        assert_eq!(round.candidates().len(), 3);
        assert!(round.correct_index() < 3);
        assert_eq!(round.target_country(), round.candidates()[round.correct_index()]);
        assert!(round.last_result().is_none());
    }

    #[test]
    fn new_round_keeps_every_country() {
        let mut rng = StdRng::seed_from_u64(2);
        let round = Round::new(pool(), &mut rng).unwrap();
        let mut shuffled = round.pool().to_vec();
        shuffled.sort();
        let mut expected = pool();
        expected.sort();
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn pool_needs_three_countries() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = Round::new(vec!["France".into(), "Italy".into()], &mut rng).unwrap_err();
        assert!(matches!(
            err,
            QuizError::PoolTooSmall {
                found: 2,
                required: 3
            }
        ));
    }

    #[test]
    fn correct_guess_scores_one_point() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        let result = round.submit_guess(round.correct_index()).unwrap();
        assert!(result.is_correct());
        assert_eq!(result.score, 1);
        assert_eq!(result.title(), "Correct!");
        assert_eq!(result.message(), "Your score is 1.");
        assert!(!result.is_last_question);
        assert_eq!(round.score(), 1);
        assert_eq!(round.phase(), RoundPhase::Answered);
    }

    #[test]
    fn wrong_guess_names_the_tapped_country() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        let wrong = wrong_index(&round);
        let tapped = round.candidates()[wrong].clone();
        let result = round.submit_guess(wrong).unwrap();
        assert_eq!(result.outcome, GuessOutcome::Wrong { chosen: tapped.clone() });
        assert_eq!(result.title(), "Wrong!");
        assert_eq!(
            result.message(),
            format!("That's the flag of {tapped}.\nYour score is 0.")
        );
        assert_eq!(round.score(), 0);
    }

    #[test]
    fn out_of_range_selection_is_rejected_without_mutation() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        let before = round.pool().to_vec();
        let err = round.submit_guess(3).unwrap_err();
        assert!(matches!(err, QuizError::InvalidSelection { index: 3 }));
        assert_eq!(round.pool(), before.as_slice());
        assert_eq!(round.score(), 0);
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
        assert!(round.last_result().is_none());
    }

    #[test]
    fn second_guess_on_same_question_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        round.submit_guess(round.correct_index()).unwrap();
        let err = round.submit_guess(round.correct_index()).unwrap_err();
        assert!(matches!(err, QuizError::AlreadyAnswered));
        assert_eq!(round.score(), 1);
    }

    #[test]
    fn advance_moves_to_next_question() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        round.submit_guess(0).unwrap();
        assert_eq!(
            round.advance_question(&mut rng),
            Advance::NextQuestion { number: 2 }
        );
        assert_eq!(round.question_number(), 2);
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
        assert!(round.correct_index() < 3);
    }

    #[test]
    fn full_round_completes_after_eight_answers() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        let mut expected_score = 0;

        for question in 1..=ROUND_LENGTH {
            assert_eq!(round.question_number(), question);
            assert!(round.correct_index() < 3);
            // Alternate right and wrong answers.
            let pick = if question % 2 == 1 {
                expected_score += 1;
                round.correct_index()
            } else {
                wrong_index(&round)
            };
            let result = round.submit_guess(pick).unwrap();
            assert_eq!(result.score, expected_score);
            assert_eq!(result.is_last_question, question == ROUND_LENGTH);
            if question < ROUND_LENGTH {
                round.advance_question(&mut rng);
            }
        }

        assert!(round.is_over());
        assert_eq!(round.score(), 4);
        assert_eq!(
            round.advance_question(&mut rng),
            Advance::RoundComplete { final_score: 4 }
        );
        assert_eq!(round.question_number(), ROUND_LENGTH);
    }

    #[test]
    fn guesses_after_the_round_are_no_ops() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        for _ in 1..ROUND_LENGTH {
            round.submit_guess(round.correct_index()).unwrap();
            round.advance_question(&mut rng);
        }
        round.submit_guess(round.correct_index()).unwrap();
        assert_eq!(round.score(), ROUND_LENGTH);

        let before = round.pool().to_vec();
        for index in 0..3 {
            assert!(matches!(round.submit_guess(index), Err(QuizError::RoundOver)));
        }
        assert_eq!(round.score(), ROUND_LENGTH);
        assert_eq!(round.pool(), before.as_slice());
    }

    #[test]
    fn advancing_past_question_eight_closes_the_round() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        for _ in 1..ROUND_LENGTH {
            round.advance_question(&mut rng);
        }
        assert_eq!(round.question_number(), ROUND_LENGTH);
        assert_eq!(
            round.advance_question(&mut rng),
            Advance::RoundComplete { final_score: 0 }
        );
        assert!(matches!(round.submit_guess(0), Err(QuizError::RoundOver)));
    }

    #[test]
    fn reset_starts_a_fresh_round() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        for _ in 1..ROUND_LENGTH {
            round.submit_guess(round.correct_index()).unwrap();
            round.advance_question(&mut rng);
        }
        round.submit_guess(0).unwrap();
        assert!(round.is_over());

        round.reset(&mut rng);
        assert_eq!(round.score(), 0);
        assert_eq!(round.question_number(), 1);
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
        assert!(round.last_result().is_none());
        assert!(round.submit_guess(0).is_ok());
    }

    #[test]
    fn correct_index_stays_in_range_across_many_questions() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        let mut seen = [false; 3];
        for _ in 0..200 {
            round.reset(&mut rng);
            for _ in 0..ROUND_LENGTH {
                assert!(round.correct_index() < 3);
                seen[round.correct_index()] = true;
                round.advance_question(&mut rng);
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn score_never_decreases() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut round = Round::new(pool(), &mut rng).unwrap();
        let mut last = 0;
        for question in 0..ROUND_LENGTH {
            let result = round.submit_guess((question as usize) % 3).unwrap();
            assert!(result.score == last || result.score == last + 1);
            assert_eq!(result.score == last + 1, result.is_correct());
            last = result.score;
            round.advance_question(&mut rng);
        }
    }
}
