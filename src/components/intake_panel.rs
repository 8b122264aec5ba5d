//! "Your Current Interior" card: drop zone, preview, room/style
//! selectors, and the render trigger.

use crate::design::{RoomType, StyleType};
use crate::session::Session;
use crate::theme::Theme;
use egui::TextureHandle;

/// What the user asked for this frame. The file picker and render spawn
/// live in the app, which owns the dialogs and worker channels.
#[derive(Default)]
pub struct IntakePanelResponse {
    pub open_picker: bool,
    pub render_clicked: bool,
}

const DROP_ZONE_HEIGHT: f32 = 260.0;

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &mut Session,
    preview_tex: Option<&TextureHandle>,
) -> IntakePanelResponse {
    let mut response = IntakePanelResponse::default();

    theme.card_frame().show(ui, |ui| {
        ui.heading(t!("intake.title"));
        ui.add_space(8.0);

        // Drop zone — also a click target for the native picker.
        let zone_size = egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT);
        let (zone_rect, zone_resp) = ui.allocate_exact_size(zone_size, egui::Sense::click());
        if zone_resp.clicked() {
            response.open_picker = true;
        }
        if zone_resp.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        match preview_tex {
            Some(tex) => {
                let mut zone_ui = ui.child_ui(
                    zone_rect,
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                );
                super::aspect_fit(&mut zone_ui, tex, zone_rect.size());
            }
            None => {
                ui.painter().rect_stroke(
                    zone_rect.shrink(1.0),
                    egui::Rounding::same(6.0),
                    theme.placeholder_stroke(),
                );
                ui.painter().text(
                    zone_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    t!("intake.drop_hint"),
                    egui::FontId::proportional(15.0),
                    theme.weak_text(),
                );
            }
        }

        ui.add_space(10.0);

        // Room / style selectors — independent single-choice combos.
        egui::ComboBox::from_label(t!("intake.room"))
            .selected_text(session.room.label())
            .width(180.0)
            .show_ui(ui, |ui| {
                for room in RoomType::all() {
                    ui.selectable_value(&mut session.room, *room, room.label());
                }
            });
        ui.add_space(4.0);
        egui::ComboBox::from_label(t!("intake.style"))
            .selected_text(session.style.label())
            .width(180.0)
            .show_ui(ui, |ui| {
                for style in StyleType::all() {
                    ui.selectable_value(&mut session.style, *style, style.label());
                }
            });

        ui.add_space(10.0);

        // Disabled when there is no preview or a render is in flight.
        let button = egui::Button::new(t!("intake.render"))
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add_enabled(session.can_render(), button).clicked() {
            response.render_clicked = true;
        }
    });

    response
}
