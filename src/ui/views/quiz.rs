use crate::FlagQuizApp;
use crate::ui::helpers::flag_button;
use crate::ui::layout::{centered_column, paint_background};
use egui::{CentralPanel, Color32, Context, Frame, RichText, vec2};

const FLAG_SIZE: [f32; 2] = [200.0, 100.0];

pub fn ui_quiz(app: &mut FlagQuizApp, ctx: &Context) {
    let view = app.view();
    let mut tapped = None;

    CentralPanel::default().frame(Frame::NONE).show(ctx, |ui| {
        paint_background(ui);

        let max_width = 420.0;
        let total_height = 3.0 * (FLAG_SIZE[1] + 15.0) + 260.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;

        centered_column(ui, max_width, |ui| {
            ui.add_space(extra_space);
            ui.label(
                RichText::new("Guess The Flag")
                    .size(34.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(12.0);

            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 20))
                .corner_radius(20.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("Tap the flag of").size(15.0).weak());
                        ui.label(RichText::new(&view.displayed_country_name).size(30.0).strong());
                        ui.add_space(15.0);

                        for (i, image) in view.candidate_images.iter().enumerate() {
                            if let Some(country) = app.country_by_image(image) {
                                let size = vec2(FLAG_SIZE[0], FLAG_SIZE[1]);
                                if flag_button(ui, &country.flag, size).clicked() {
                                    tapped = Some(i);
                                }
                            }
                            ui.add_space(15.0);
                        }
                    });
                });

            ui.add_space(24.0);
            ui.label(
                RichText::new(view.score_label())
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(
                RichText::new(view.question_label())
                    .size(24.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
    });

    if let Some(index) = tapped {
        app.flag_tapped(index);
    }
}
