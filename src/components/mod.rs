pub mod gallery;
pub mod intake_panel;
pub mod result_panel;
pub mod settings_window;

use egui::TextureHandle;

/// Draw a texture scaled to fit within `max_size`, preserving aspect ratio.
pub fn aspect_fit(ui: &mut egui::Ui, tex: &TextureHandle, max_size: egui::Vec2) {
    let tex_size = tex.size_vec2();
    let scale = (max_size.x / tex_size.x)
        .min(max_size.y / tex_size.y)
        .min(1.0)
        .max(0.0);
    let draw_size = tex_size * scale;
    ui.add(egui::Image::new(tex).fit_to_exact_size(draw_size));
}
