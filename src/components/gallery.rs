//! "Recent Rendered Designs" strip: newest-first thumbnails with a hover
//! overlay naming the room and style captured at render time.

use crate::session::Session;
use crate::theme::Theme;
use egui::TextureHandle;
use std::collections::HashMap;
use uuid::Uuid;

const THUMB_HEIGHT: f32 = 150.0;

pub fn show(
    ui: &mut egui::Ui,
    theme: &Theme,
    session: &Session,
    thumbnails: &HashMap<Uuid, TextureHandle>,
) {
    theme.card_frame().show(ui, |ui| {
        ui.heading(t!("gallery.title"));
        ui.label(egui::RichText::new(t!("gallery.blurb")).color(theme.weak_text()));
        ui.add_space(8.0);

        if session.gallery().is_empty() {
            ui.label(egui::RichText::new(t!("gallery.empty")).color(theme.weak_text()));
            return;
        }

        egui::ScrollArea::horizontal()
            .id_source("gallery_strip")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    for record in session.gallery() {
                        let Some(tex) = thumbnails.get(&record.id) else {
                            continue;
                        };
                        let tex_size = tex.size_vec2();
                        let scale = THUMB_HEIGHT / tex_size.y.max(1.0);
                        let draw_size = tex_size * scale;

                        let resp = ui.add(
                            egui::Image::new(tex)
                                .fit_to_exact_size(draw_size)
                                .rounding(egui::Rounding::same(6.0))
                                .sense(egui::Sense::hover()),
                        );

                        // Hover overlay with the trigger-time selections.
                        if resp.hovered() {
                            let painter = ui.painter();
                            painter.rect_filled(
                                resp.rect,
                                egui::Rounding::same(6.0),
                                egui::Color32::from_black_alpha(140),
                            );
                            let center = resp.rect.center();
                            painter.text(
                                center - egui::vec2(0.0, 10.0),
                                egui::Align2::CENTER_CENTER,
                                record.room.label(),
                                egui::FontId::proportional(15.0),
                                egui::Color32::WHITE,
                            );
                            painter.text(
                                center + egui::vec2(0.0, 10.0),
                                egui::Align2::CENTER_CENTER,
                                t!("gallery.style_line", style = record.style.label()),
                                egui::FontId::proportional(12.0),
                                egui::Color32::from_gray(220),
                            );
                        }
                    }
                });
            });
    });
}
