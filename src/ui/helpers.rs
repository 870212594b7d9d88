// src/ui/helpers.rs
use super::flags::paint_flag;
use crate::model::FlagDesign;
use egui::{Button, Color32, Response, Sense, Stroke, StrokeKind, Ui, Vec2};

/// Clickable flag. Returns the response so the caller can check `clicked()`.
pub fn flag_button(ui: &mut Ui, design: &FlagDesign, size: Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if ui.is_rect_visible(rect) {
        paint_flag(&ui.painter_at(rect), rect, design);

        let stroke = if response.hovered() {
            Stroke::new(3.0, Color32::WHITE)
        } else {
            Stroke::new(1.0, Color32::from_gray(60))
        };
        ui.painter()
            .rect_stroke(rect, 0.0, stroke, StrokeKind::Outside);
    }
    response
}

pub fn wide_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    ui.add(Button::new(label).min_size(Vec2::new(width, 36.0)))
        .clicked()
}
