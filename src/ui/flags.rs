use crate::model::{FlagDesign, Rgb, StripePattern};
use egui::{Color32, Painter, Rect, Stroke, pos2, vec2};

fn rgb([r, g, b]: Rgb) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Paints `design` into `rect`: stripes, then saltires, crosses and canton.
pub fn paint_flag(painter: &Painter, rect: Rect, design: &FlagDesign) {
    let mut offset = 0.0;
    for (color, fraction) in design.stripes.iter().zip(design.stripe_fractions()) {
        let stripe = match design.pattern {
            StripePattern::Horizontal => Rect::from_min_size(
                pos2(rect.left(), rect.top() + offset * rect.height()),
                vec2(rect.width(), fraction * rect.height()),
            ),
            StripePattern::Vertical => Rect::from_min_size(
                pos2(rect.left() + offset * rect.width(), rect.top()),
                vec2(fraction * rect.width(), rect.height()),
            ),
        };
        painter.rect_filled(stripe, 0.0, rgb(*color));
        offset += fraction;
    }

    let clipped = painter.with_clip_rect(rect);
    for band in &design.saltires {
        let stroke = Stroke::new(band.thickness * rect.height(), rgb(band.color));
        clipped.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        clipped.line_segment([rect.left_bottom(), rect.right_top()], stroke);
    }

    for band in &design.crosses {
        let t = band.thickness * rect.height();
        let color = rgb(band.color);
        painter.rect_filled(
            Rect::from_center_size(rect.center(), vec2(rect.width(), t)),
            0.0,
            color,
        );
        painter.rect_filled(
            Rect::from_center_size(rect.center(), vec2(t, rect.height())),
            0.0,
            color,
        );
    }

    if let Some(canton) = &design.canton {
        painter.rect_filled(
            Rect::from_min_size(
                rect.min,
                vec2(canton.width * rect.width(), canton.height * rect.height()),
            ),
            0.0,
            rgb(canton.color),
        );
    }
}
