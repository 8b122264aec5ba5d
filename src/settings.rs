//! Persistent application settings (theme and language only — design
//! state is session-scoped and never written to disk).

use crate::theme::{ThemeMode, ThemePreset};
use std::path::PathBuf;

/// Settings that persist across sessions in a `key=value` .cfg file.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    /// Theme mode (Light or Dark)
    pub theme_mode: ThemeMode,
    /// Active accent preset
    pub theme_preset: ThemePreset,
    /// Language code (e.g. "en", "es"). Empty string = auto-detect system language.
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            theme_preset: ThemePreset::Blue,
            language: String::new(), // empty = auto-detect on first boot
        }
    }
}

impl AppSettings {
    /// Path to the settings file.
    /// On Linux:   ~/.config/roomfe/roomfe_settings.cfg  (XDG_CONFIG_HOME respected)
    /// On Windows: %APPDATA%\RoomFE\roomfe_settings.cfg
    /// On macOS:   ~/Library/Application Support/RoomFE/roomfe_settings.cfg
    /// Fallback:   same directory as the executable.
    pub(crate) fn settings_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            let config_dir = std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
                    PathBuf::from(home).join(".config")
                })
                .join("roomfe");
            let _ = std::fs::create_dir_all(&config_dir);
            return Some(config_dir.join("roomfe_settings.cfg"));
        }
        #[cfg(target_os = "windows")]
        {
            // %APPDATA% keeps settings per-user instead of next to the EXE.
            let appdata = std::env::var("APPDATA")
                .or_else(|_| std::env::var("USERPROFILE"))
                .unwrap_or_else(|_| {
                    std::env::current_exe()
                        .ok()
                        .and_then(|p| p.parent().map(|d| d.to_string_lossy().into_owned()))
                        .unwrap_or_default()
                });
            let config_dir = PathBuf::from(appdata).join("RoomFE");
            let _ = std::fs::create_dir_all(&config_dir);
            return Some(config_dir.join("roomfe_settings.cfg"));
        }
        #[cfg(target_os = "macos")]
        {
            let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
            let config_dir = PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("RoomFE");
            let _ = std::fs::create_dir_all(&config_dir);
            return Some(config_dir.join("roomfe_settings.cfg"));
        }
        #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
        {
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("roomfe_settings.cfg")))
        }
    }

    /// Serialize to the `key=value` config format.
    fn to_config_string(&self) -> String {
        let mode_str = match self.theme_mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        let preset_str = match self.theme_preset {
            ThemePreset::Blue => "blue",
            ThemePreset::Green => "green",
            ThemePreset::Purple => "purple",
            ThemePreset::Ember => "ember",
            ThemePreset::Midnight => "midnight",
        };
        format!(
            "theme_mode={mode_str}\n\
             theme_preset={preset_str}\n\
             language={}\n",
            self.language,
        )
    }

    /// Parse from config text. Unknown keys are ignored; missing or
    /// malformed values keep their defaults.
    fn from_config_str(content: &str) -> Self {
        let mut s = Self::default();
        for line in content.lines() {
            let Some((key, val)) = line.split_once('=') else { continue };
            let key = key.trim();
            let val = val.trim();
            match key {
                "theme_mode" => {
                    s.theme_mode = match val {
                        "dark" => ThemeMode::Dark,
                        _ => ThemeMode::Light,
                    };
                }
                "theme_preset" => {
                    s.theme_preset = match val {
                        "blue" => ThemePreset::Blue,
                        "green" => ThemePreset::Green,
                        "purple" => ThemePreset::Purple,
                        "ember" => ThemePreset::Ember,
                        "midnight" => ThemePreset::Midnight,
                        _ => ThemePreset::Blue,
                    };
                }
                "language" => {
                    s.language = val.to_string();
                }
                _ => {}
            }
        }
        s
    }

    /// Save settings to disk.
    pub fn save(&self) {
        let Some(path) = Self::settings_path() else { return };
        let _ = std::fs::write(path, self.to_config_string());
    }

    /// Load settings from disk (returns default if file missing or corrupt).
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else { return Self::default() };
        let Ok(content) = std::fs::read_to_string(&path) else {
            log_info!("settings: no config at {}, using defaults", path.display());
            return Self::default();
        };
        Self::from_config_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let s = AppSettings {
            theme_mode: ThemeMode::Dark,
            theme_preset: ThemePreset::Ember,
            language: "fr".to_string(),
        };
        let text = s.to_config_string();
        assert_eq!(AppSettings::from_config_str(&text), s);
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let text = "theme_mode=neon\ntheme_preset=plaid\nnot a line\nbogus_key=1\n";
        let s = AppSettings::from_config_str(text);
        assert_eq!(s.theme_mode, ThemeMode::Light);
        assert_eq!(s.theme_preset, ThemePreset::Blue);
        assert_eq!(s.language, "");
    }

    #[test]
    fn empty_language_means_auto_detect() {
        assert!(AppSettings::default().language.is_empty());
    }
}
