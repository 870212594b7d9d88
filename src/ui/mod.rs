mod flags;
mod helpers;
pub mod layout;
pub mod views;

use crate::app::FlagQuizApp;
use crate::game::RoundPhase;
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;

impl App for FlagQuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Theme toggle
        bottom_panel(ctx);

        views::quiz::ui_quiz(self, ctx);

        // Alerts on top of the quiz, driven by the round phase
        match self.round.phase() {
            RoundPhase::AwaitingGuess => {}
            RoundPhase::Answered => views::alerts::ui_score_alert(self, ctx),
            RoundPhase::Complete => views::alerts::ui_game_over(self, ctx),
        }
    }
}
