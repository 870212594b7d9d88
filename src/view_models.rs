// src/view_models.rs

use crate::model::{CANDIDATES_PER_QUESTION, ROUND_LENGTH};

/// What the quiz screen shows for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizView {
    pub displayed_country_name: String,
    pub candidate_images: [String; CANDIDATES_PER_QUESTION],
    pub score: u32,
    pub question_number: u32,
    pub last_result_message: Option<String>,
    pub is_round_over: bool,
}

impl QuizView {
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn question_label(&self) -> String {
        format!("Question: {}/{}", self.question_number, ROUND_LENGTH)
    }

    pub fn final_score_message(&self) -> String {
        format!("Your score was {}/{}", self.score, ROUND_LENGTH)
    }
}
