use crate::FlagQuizApp;
use crate::ui::helpers::wide_button;
use egui::{Align2, Context, Id, Window};

fn alert(ctx: &Context, id: &str, title: &str, message: &str, button: &str) -> bool {
    let mut clicked = false;
    Window::new(title)
        .id(Id::new(id))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(message);
                ui.add_space(10.0);
                clicked = wide_button(ui, button, 160.0);
            });
        });
    clicked
}

/// "Correct!" / "Wrong!" after a guess, with Continue.
pub fn ui_score_alert(app: &mut FlagQuizApp, ctx: &Context) {
    let Some(title) = app.alert_title() else {
        return;
    };
    let message = app.view().last_result_message.unwrap_or_default();
    if alert(ctx, "score_alert", title, &message, "Continue") {
        app.ask_question();
    }
}

pub fn ui_game_over(app: &mut FlagQuizApp, ctx: &Context) {
    let view = app.view();
    let title = app.alert_title().unwrap_or("Game over!");
    if alert(ctx, "game_over_alert", title, &view.final_score_message(), "Play again") {
        app.reset_game();
    }
}
