//! Application shell: owns the session, the worker channels, and the
//! per-frame wiring between egui events and the session state machine.

use crate::components::{gallery, intake_panel, result_panel, settings_window::SettingsWindow};
use crate::ops::intake::{self, IntakeOutcome, IntakeSource};
use crate::ops::render::{self, RenderOutcome, RenderService, SimulatedRenderer};
use crate::session::Session;
use crate::settings::AppSettings;
use crate::theme::{Theme, ThemeMode};
use egui::TextureHandle;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use uuid::Uuid;

/// Longest edge of a gallery thumbnail texture.
const THUMBNAIL_MAX_DIM: u32 = 320;

pub struct RoomFEApp {
    session: Session,
    settings: AppSettings,
    theme: Theme,
    /// The render backend. Only the simulated renderer ships; a real
    /// service slots in here without touching the trigger logic.
    service: Arc<dyn RenderService>,
    settings_window: SettingsWindow,

    // GPU textures mirroring the session's images.
    preview_texture: Option<TextureHandle>,
    result_texture: Option<TextureHandle>,
    gallery_textures: HashMap<Uuid, TextureHandle>,

    // Background render pipeline.
    render_sender: mpsc::Sender<RenderOutcome>,
    render_receiver: mpsc::Receiver<RenderOutcome>,
    render_start_time: Option<f64>,

    // Background intake (decode) pipeline.
    intake_sender: mpsc::Sender<IntakeOutcome>,
    intake_receiver: mpsc::Receiver<IntakeOutcome>,
    /// When > 0, a background decode is in progress; show spinner.
    pending_intakes: usize,
}

impl RoomFEApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();

        // Empty language setting = auto-detect from the system locale.
        let lang = if settings.language.is_empty() {
            crate::i18n::detect_system_language()
        } else {
            settings.language.clone()
        };
        crate::i18n::set_language(&lang);

        let theme = Theme::from_settings(settings.theme_mode, settings.theme_preset);
        theme.apply(&cc.egui_ctx);

        let (render_sender, render_receiver) = mpsc::channel();
        let (intake_sender, intake_receiver) = mpsc::channel();

        log_info!("session started (language={})", lang);

        Self {
            session: Session::new(),
            settings,
            theme,
            service: Arc::new(SimulatedRenderer::new()),
            settings_window: SettingsWindow::default(),
            preview_texture: None,
            result_texture: None,
            gallery_textures: HashMap::new(),
            render_sender,
            render_receiver,
            render_start_time: None,
            intake_sender,
            intake_receiver,
            pending_intakes: 0,
        }
    }

    fn upload_texture(
        ctx: &egui::Context,
        name: impl Into<String>,
        img: &RgbaImage,
    ) -> TextureHandle {
        let size = [img.width() as usize, img.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
        ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
    }

    /// Downscale a record's image for the gallery strip so full-size
    /// photos are not kept on the GPU per thumbnail.
    fn make_thumbnail(img: &RgbaImage) -> RgbaImage {
        let (w, h) = img.dimensions();
        let longest = w.max(h);
        if longest <= THUMBNAIL_MAX_DIM {
            return img.clone();
        }
        let scale = THUMBNAIL_MAX_DIM as f32 / longest as f32;
        let tw = ((w as f32 * scale).round() as u32).max(1);
        let th = ((h as f32 * scale).round() as u32).max(1);
        image::imageops::thumbnail(img, tw, th)
    }

    fn start_intake(&mut self, path: PathBuf, source: IntakeSource) {
        log_info!("intake ({}): {}", source.name(), path.display());
        self.pending_intakes += 1;
        intake::spawn_decode(path, source, self.intake_sender.clone());
    }

    fn start_clipboard_intake(&mut self) {
        log_info!("intake (paste): reading clipboard");
        self.pending_intakes += 1;
        intake::spawn_clipboard_read(self.intake_sender.clone());
    }

    fn open_picker(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter(&t!("dialog.filter.images"), intake::IMAGE_EXTENSIONS)
            .pick_file()
        {
            self.start_intake(path, IntakeSource::Picker);
        }
    }

    fn trigger_render(&mut self, ctx: &egui::Context) {
        // begin_render refuses when there is no preview or a render is
        // already in flight; the button is disabled in both cases anyway.
        if let Some(request) = self.session.begin_render() {
            log_info!(
                "render started: room={}, style={}, {}x{}",
                request.room.slug(),
                request.style.slug(),
                request.image.width(),
                request.image.height()
            );
            self.render_start_time = Some(ctx.input(|i| i.time));
            render::spawn_render(self.service.clone(), request, self.render_sender.clone());
        }
    }

    /// Poll worker channels and fold finished jobs into the session.
    fn poll_workers(&mut self, ctx: &egui::Context) {
        while let Ok(outcome) = self.intake_receiver.try_recv() {
            self.pending_intakes = self.pending_intakes.saturating_sub(1);
            match outcome {
                IntakeOutcome::Decoded { image, source } => {
                    log_info!(
                        "intake ({}) decoded {}x{}",
                        source.name(),
                        image.width(),
                        image.height()
                    );
                    self.preview_texture = Some(Self::upload_texture(ctx, "preview", &image));
                    self.session.set_preview(image);
                }
                IntakeOutcome::Failed { error, source } => {
                    log_warn!("intake ({}) failed: {}", source.name(), error);
                    self.session.intake_failed(error);
                }
            }
        }

        while let Ok(outcome) = self.render_receiver.try_recv() {
            match &outcome {
                RenderOutcome::Completed { request, .. } => {
                    log_info!(
                        "render completed: room={}, style={}",
                        request.room.slug(),
                        request.style.slug()
                    );
                }
                RenderOutcome::Failed(e) => {
                    log_err!("render failed: {}", e);
                }
            }
            if let Some(record) = self.session.apply_render_outcome(outcome) {
                let thumb = Self::make_thumbnail(&record.image);
                let tex = Self::upload_texture(ctx, format!("design_{}", record.id), &thumb);
                self.gallery_textures.insert(record.id, tex);
            }
            if let Some(result) = self.session.result() {
                self.result_texture = Some(Self::upload_texture(ctx, "result", result));
            }
            self.render_start_time = None;
        }

        // Keep polling while jobs are pending.
        if self.pending_intakes > 0 || self.session.is_rendering() {
            ctx.request_repaint();
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        // Drag-and-drop: the first dropped file enters the intake path.
        let dropped: Vec<egui::DroppedFile> = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.into_iter().next()
            && let Some(path) = file.path
        {
            self.start_intake(path, IntakeSource::Drop);
        }

        // Ctrl+V — paste an image from the system clipboard.
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::V)) {
            self.start_clipboard_intake();
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(t!("menu.file"), |ui| {
                    if ui.button(t!("menu.file.open")).clicked() {
                        ui.close_menu();
                        self.open_picker();
                    }
                    ui.separator();
                    if ui.button(t!("menu.file.exit")).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button(t!("menu.view"), |ui| {
                    ui.menu_button(t!("menu.view.theme"), |ui| {
                        ui.set_min_width(ui.min_rect().width().max(160.0));
                        let is_light = matches!(self.theme.mode, ThemeMode::Light);
                        let is_dark = matches!(self.theme.mode, ThemeMode::Dark);
                        if ui.radio(is_light, t!("menu.view.theme.light")).clicked() {
                            if !is_light {
                                self.theme.toggle();
                                self.theme.apply(ctx);
                                self.settings.theme_mode = self.theme.mode;
                                self.settings.save();
                            }
                            ui.close_menu();
                        }
                        if ui.radio(is_dark, t!("menu.view.theme.dark")).clicked() {
                            if !is_dark {
                                self.theme.toggle();
                                self.theme.apply(ctx);
                                self.settings.theme_mode = self.theme.mode;
                                self.settings.save();
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button(t!("menu.view.settings")).clicked() {
                        self.settings_window.open = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.pending_intakes > 0 {
                    ui.add(egui::Spinner::new().size(14.0).color(self.theme.accent));
                    ui.label(t!("status.loading_image"));
                } else if let Some(error) = self.session.intake_error() {
                    ui.colored_label(egui::Color32::from_rgb(210, 70, 70), error.user_message());
                } else {
                    ui.label(t!("status.ready"));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(t!(
                        "status.design_count",
                        count = self.session.gallery().len()
                    ));
                });
            });
        });
    }

    fn show_central_panel(&mut self, ctx: &egui::Context) {
        let render_elapsed = self
            .render_start_time
            .map(|t0| ctx.input(|i| i.time) - t0);

        let mut intake_response = intake_panel::IntakePanelResponse::default();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(4.0);
                ui.heading(egui::RichText::new(t!("app.title")).size(24.0));
                ui.add_space(8.0);

                ui.columns(2, |cols| {
                    intake_response = intake_panel::show(
                        &mut cols[0],
                        &self.theme,
                        &mut self.session,
                        self.preview_texture.as_ref(),
                    );
                    result_panel::show(
                        &mut cols[1],
                        &self.theme,
                        &self.session,
                        self.result_texture.as_ref(),
                        render_elapsed,
                    );
                });

                ui.add_space(12.0);
                gallery::show(ui, &self.theme, &self.session, &self.gallery_textures);
            });
        });

        if intake_response.open_picker {
            self.open_picker();
        }
        if intake_response.render_clicked {
            self.trigger_render(ctx);
        }
    }
}

impl eframe::App for RoomFEApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers(ctx);
        self.handle_input(ctx);

        self.show_menu_bar(ctx);
        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.settings_window
            .show(ctx, &mut self.settings, &mut self.theme);
    }
}
