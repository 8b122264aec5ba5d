//! Floating settings window: theme mode, accent preset, and language.

use crate::settings::AppSettings;
use crate::theme::{Theme, ThemeMode, ThemePreset};

#[derive(Default)]
pub struct SettingsWindow {
    pub open: bool,
}

impl SettingsWindow {
    pub fn show(&mut self, ctx: &egui::Context, settings: &mut AppSettings, theme: &mut Theme) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        egui::Window::new(t!("settings.title"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_min_width(260.0);

                ui.label(egui::RichText::new(t!("settings.theme")).strong());
                ui.horizontal(|ui| {
                    let is_light = matches!(theme.mode, ThemeMode::Light);
                    let is_dark = matches!(theme.mode, ThemeMode::Dark);
                    if ui.radio(is_light, t!("menu.view.theme.light")).clicked() && !is_light {
                        theme.toggle();
                        theme.apply(ctx);
                        settings.theme_mode = theme.mode;
                        settings.save();
                    }
                    if ui.radio(is_dark, t!("menu.view.theme.dark")).clicked() && !is_dark {
                        theme.toggle();
                        theme.apply(ctx);
                        settings.theme_mode = theme.mode;
                        settings.save();
                    }
                });

                ui.add_space(6.0);
                egui::ComboBox::from_label(t!("settings.accent"))
                    .selected_text(theme.preset.label())
                    .show_ui(ui, |ui| {
                        for preset in ThemePreset::all() {
                            let selected = theme.preset == *preset;
                            if ui.selectable_label(selected, preset.label()).clicked()
                                && !selected
                            {
                                theme.set_preset(*preset);
                                theme.apply(ctx);
                                settings.theme_preset = *preset;
                                settings.save();
                            }
                        }
                    });

                ui.add_space(6.0);
                let current = crate::i18n::current_language();
                let current_name = crate::i18n::LANGUAGES
                    .iter()
                    .find(|(code, _)| *code == current)
                    .map(|(_, name)| *name)
                    .unwrap_or("English");
                egui::ComboBox::from_label(t!("settings.language"))
                    .selected_text(current_name)
                    .show_ui(ui, |ui| {
                        for &(code, name) in crate::i18n::LANGUAGES {
                            let selected = code == current;
                            if ui.selectable_label(selected, name).clicked() && !selected {
                                crate::i18n::set_language(code);
                                settings.language = code.to_string();
                                settings.save();
                            }
                        }
                    });
            });
        self.open = open;
    }
}
