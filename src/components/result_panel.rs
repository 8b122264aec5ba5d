//! "Result" card: spinner while a render is in flight, the rendered
//! image once it lands, or the error message when the service fails.

use crate::session::Session;
use crate::theme::Theme;
use egui::TextureHandle;

const RESULT_ZONE_HEIGHT: f32 = 260.0;

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &Session,
    result_tex: Option<&TextureHandle>,
    render_elapsed: Option<f64>,
) {
    theme.card_frame().show(ui, |ui| {
        ui.heading(t!("result.title"));
        ui.add_space(8.0);

        let zone_size = egui::vec2(ui.available_width(), RESULT_ZONE_HEIGHT);
        let (zone_rect, _) = ui.allocate_exact_size(zone_size, egui::Sense::hover());

        if session.is_rendering() {
            let mut zone_ui = ui.child_ui(zone_rect, egui::Layout::top_down(egui::Align::Center));
            zone_ui.add_space(RESULT_ZONE_HEIGHT / 2.0 - 40.0);
            zone_ui.add(egui::Spinner::new().size(32.0).color(theme.accent));
            zone_ui.add_space(8.0);
            let mut line = t!("result.generating");
            if let Some(elapsed) = render_elapsed {
                line = format!("{} ({:.0}s)", line, elapsed);
            }
            zone_ui.label(egui::RichText::new(line).color(theme.weak_text()));
        } else if let Some(error) = session.render_error() {
            ui.painter().rect_stroke(
                zone_rect.shrink(1.0),
                egui::Rounding::same(6.0),
                theme.placeholder_stroke(),
            );
            ui.painter().text(
                zone_rect.center(),
                egui::Align2::CENTER_CENTER,
                error.user_message(),
                egui::FontId::proportional(14.0),
                egui::Color32::from_rgb(210, 70, 70),
            );
        } else if let Some(tex) = result_tex {
            let mut zone_ui = ui.child_ui(
                zone_rect,
                egui::Layout::centered_and_justified(egui::Direction::TopDown),
            );
            super::aspect_fit(&mut zone_ui, tex, zone_rect.size());
        } else {
            ui.painter().rect_stroke(
                zone_rect.shrink(1.0),
                egui::Rounding::same(6.0),
                theme.placeholder_stroke(),
            );
            ui.painter().text(
                zone_rect.center(),
                egui::Align2::CENTER_CENTER,
                t!("result.placeholder"),
                egui::FontId::proportional(15.0),
                theme.weak_text(),
            );
        }
    });
}
