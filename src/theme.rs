//! Light/dark theme with accent presets, applied to the egui context.

use egui::Color32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Accent colors for both modes: the normal accent, a faint wash used for
/// fills, and a strong variant used for hover/active states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentColors {
    pub light_normal: Color32,
    pub light_faint: Color32,
    pub light_strong: Color32,
    pub dark_normal: Color32,
    pub dark_faint: Color32,
    pub dark_strong: Color32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreset {
    Blue,
    Green,
    Purple,
    Ember,
    Midnight,
}

impl ThemePreset {
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Blue,
            ThemePreset::Green,
            ThemePreset::Purple,
            ThemePreset::Ember,
            ThemePreset::Midnight,
        ]
    }

    pub fn label(&self) -> String {
        match self {
            ThemePreset::Blue => t!("theme.preset.blue"),
            ThemePreset::Green => t!("theme.preset.green"),
            ThemePreset::Purple => t!("theme.preset.purple"),
            ThemePreset::Ember => t!("theme.preset.ember"),
            ThemePreset::Midnight => t!("theme.preset.midnight"),
        }
    }

    pub fn accent_colors(&self) -> AccentColors {
        match self {
            ThemePreset::Blue => AccentColors {
                light_normal: Color32::from_rgb(0, 110, 230),
                light_faint: Color32::from_rgb(220, 235, 255),
                light_strong: Color32::from_rgb(0, 80, 190),
                dark_normal: Color32::from_rgb(90, 160, 255),
                dark_faint: Color32::from_rgb(30, 45, 70),
                dark_strong: Color32::from_rgb(140, 195, 255),
            },
            ThemePreset::Green => AccentColors {
                light_normal: Color32::from_rgb(0, 150, 80),
                light_faint: Color32::from_rgb(220, 245, 230),
                light_strong: Color32::from_rgb(0, 115, 60),
                dark_normal: Color32::from_rgb(80, 210, 140),
                dark_faint: Color32::from_rgb(25, 55, 40),
                dark_strong: Color32::from_rgb(130, 235, 175),
            },
            ThemePreset::Purple => AccentColors {
                light_normal: Color32::from_rgb(130, 70, 220),
                light_faint: Color32::from_rgb(238, 228, 255),
                light_strong: Color32::from_rgb(100, 45, 185),
                dark_normal: Color32::from_rgb(175, 130, 255),
                dark_faint: Color32::from_rgb(45, 35, 70),
                dark_strong: Color32::from_rgb(205, 175, 255),
            },
            ThemePreset::Ember => AccentColors {
                light_normal: Color32::from_rgb(215, 90, 30),
                light_faint: Color32::from_rgb(255, 235, 222),
                light_strong: Color32::from_rgb(180, 65, 15),
                dark_normal: Color32::from_rgb(255, 145, 80),
                dark_faint: Color32::from_rgb(70, 40, 25),
                dark_strong: Color32::from_rgb(255, 180, 130),
            },
            ThemePreset::Midnight => AccentColors {
                light_normal: Color32::from_rgb(55, 75, 120),
                light_faint: Color32::from_rgb(228, 233, 242),
                light_strong: Color32::from_rgb(35, 50, 90),
                dark_normal: Color32::from_rgb(120, 145, 200),
                dark_faint: Color32::from_rgb(28, 34, 50),
                dark_strong: Color32::from_rgb(160, 185, 235),
            },
        }
    }
}

/// Resolved theme: the current mode plus the accent trio for that mode.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub mode: ThemeMode,
    pub preset: ThemePreset,
    pub accent: Color32,
    pub accent_faint: Color32,
    pub accent_strong: Color32,
}

impl Theme {
    pub fn light_with_accent(preset: ThemePreset) -> Self {
        let a = preset.accent_colors();
        Self {
            mode: ThemeMode::Light,
            preset,
            accent: a.light_normal,
            accent_faint: a.light_faint,
            accent_strong: a.light_strong,
        }
    }

    pub fn dark_with_accent(preset: ThemePreset) -> Self {
        let a = preset.accent_colors();
        Self {
            mode: ThemeMode::Dark,
            preset,
            accent: a.dark_normal,
            accent_faint: a.dark_faint,
            accent_strong: a.dark_strong,
        }
    }

    pub fn from_settings(mode: ThemeMode, preset: ThemePreset) -> Self {
        match mode {
            ThemeMode::Light => Self::light_with_accent(preset),
            ThemeMode::Dark => Self::dark_with_accent(preset),
        }
    }

    /// Switch between light and dark, keeping the preset.
    pub fn toggle(&mut self) {
        *self = match self.mode {
            ThemeMode::Light => Self::dark_with_accent(self.preset),
            ThemeMode::Dark => Self::light_with_accent(self.preset),
        };
    }

    pub fn set_preset(&mut self, preset: ThemePreset) {
        *self = Self::from_settings(self.mode, preset);
    }

    /// Push this theme into the egui context's visuals.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self.mode {
            ThemeMode::Light => egui::Visuals::light(),
            ThemeMode::Dark => egui::Visuals::dark(),
        };
        visuals.selection.bg_fill = self.accent;
        visuals.hyperlink_color = self.accent;
        visuals.widgets.hovered.bg_fill = self.accent_faint;
        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, self.accent_strong);
        ctx.set_visuals(visuals);
    }

    /// Frame used for the intake/result/gallery cards.
    pub fn card_frame(&self) -> egui::Frame {
        let fill = match self.mode {
            ThemeMode::Light => Color32::from_gray(250),
            ThemeMode::Dark => Color32::from_gray(32),
        };
        let stroke = match self.mode {
            ThemeMode::Light => Color32::from_gray(220),
            ThemeMode::Dark => Color32::from_gray(58),
        };
        egui::Frame::none()
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .rounding(egui::Rounding::same(8.0))
            .inner_margin(egui::Margin::same(12.0))
    }

    /// Stroke for the dashed drop-zone / result placeholder borders.
    pub fn placeholder_stroke(&self) -> egui::Stroke {
        let c = match self.mode {
            ThemeMode::Light => Color32::from_gray(200),
            ThemeMode::Dark => Color32::from_gray(75),
        };
        egui::Stroke::new(1.5, c)
    }

    /// De-emphasised text color (hints, placeholders).
    pub fn weak_text(&self) -> Color32 {
        match self.mode {
            ThemeMode::Light => Color32::from_gray(120),
            ThemeMode::Dark => Color32::from_gray(150),
        }
    }
}
