use egui::{Color32, Context, Ui, Visuals, pos2};

const BACKGROUND_INNER: Color32 = Color32::from_rgb(26, 51, 115);
const BACKGROUND_OUTER: Color32 = Color32::from_rgb(194, 38, 66);

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Blue disc rising from the top edge over a red field.
pub fn paint_background(ui: &Ui) {
    let rect = ui.max_rect();
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, BACKGROUND_OUTER);
    let radius = 200.0 + 0.3 * (rect.height().max(rect.width()) - 200.0).max(0.0);
    painter.circle_filled(pos2(rect.center().x, rect.top()), radius, BACKGROUND_INNER);
}

/// Content column of at most `max_width`, centred horizontally.
pub fn centered_column(ui: &mut Ui, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    let w = ui.available_width().min(max_width);
    ui.vertical_centered(|ui| {
        ui.set_max_width(w);
        inner(ui);
    });
}
