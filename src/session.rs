//! Session state machine, kept free of any UI types so the whole design
//! flow (intake → trigger → gallery) is testable without a window.
//!
//! All mutation happens on the UI thread; background workers only hand
//! outcomes back through the app's channels, which then call into here.

use crate::design::{DesignRecord, RoomType, StyleType};
use crate::ops::intake::IntakeError;
use crate::ops::render::{RenderError, RenderOutcome, RenderRequest};
use image::RgbaImage;

/// All volatile state for one application session. Nothing here is ever
/// persisted; the gallery disappears when the app exits.
pub struct Session {
    /// Current input photo, replaced wholesale on each successful intake.
    preview: Option<RgbaImage>,
    /// Output of the most recent successful render.
    result: Option<RgbaImage>,
    pub room: RoomType,
    pub style: StyleType,
    /// Completed designs, newest first.
    gallery: Vec<DesignRecord>,
    /// True strictly while a render is in flight.
    rendering: bool,
    intake_error: Option<IntakeError>,
    render_error: Option<RenderError>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            preview: None,
            result: None,
            room: RoomType::default(),
            style: StyleType::default(),
            gallery: Vec::new(),
            rendering: false,
            intake_error: None,
            render_error: None,
        }
    }

    pub fn preview(&self) -> Option<&RgbaImage> {
        self.preview.as_ref()
    }

    pub fn result(&self) -> Option<&RgbaImage> {
        self.result.as_ref()
    }

    pub fn gallery(&self) -> &[DesignRecord] {
        &self.gallery
    }

    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    /// The render button is enabled only when there is a preview and no
    /// render already in flight.
    pub fn can_render(&self) -> bool {
        self.preview.is_some() && !self.rendering
    }

    pub fn intake_error(&self) -> Option<&IntakeError> {
        self.intake_error.as_ref()
    }

    pub fn render_error(&self) -> Option<&RenderError> {
        self.render_error.as_ref()
    }

    /// Successful intake: replace the preview. The gallery and result are
    /// never touched by intake.
    pub fn set_preview(&mut self, image: RgbaImage) {
        self.preview = Some(image);
        self.intake_error = None;
    }

    /// Failed intake: surface the message, change nothing else.
    pub fn intake_failed(&mut self, error: IntakeError) {
        self.intake_error = Some(error);
    }

    /// Begin a render if one can start, capturing the image and selections
    /// as of this instant. Returns the request to hand to a worker, or
    /// `None` when there is no preview or a render is already in flight.
    pub fn begin_render(&mut self) -> Option<RenderRequest> {
        if !self.can_render() {
            return None;
        }
        let image = self.preview.clone()?;
        self.rendering = true;
        self.render_error = None;
        Some(RenderRequest {
            image,
            room: self.room,
            style: self.style,
        })
    }

    /// Fold a finished render back into the session. On success the new
    /// gallery record (built from the trigger-time request, not current
    /// state) is returned so the caller can upload its thumbnail.
    pub fn apply_render_outcome(&mut self, outcome: RenderOutcome) -> Option<&DesignRecord> {
        self.rendering = false;
        match outcome {
            RenderOutcome::Completed { request, output } => {
                self.result = Some(output);
                self.gallery
                    .insert(0, DesignRecord::new(request.image, request.room, request.style));
                self.gallery.first()
            }
            RenderOutcome::Failed(error) => {
                self.render_error = Some(error);
                None
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::render::{RenderService, SimulatedRenderer};
    use std::time::Duration;

    fn image_a() -> RgbaImage {
        RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]))
    }

    fn image_b() -> RgbaImage {
        RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 255, 255]))
    }

    /// Run one full trigger → service → outcome cycle synchronously.
    fn render_once(session: &mut Session, service: &dyn RenderService) -> bool {
        let Some(request) = session.begin_render() else {
            return false;
        };
        assert!(session.is_rendering());
        let outcome = match service.render(&request) {
            Ok(output) => RenderOutcome::Completed { request, output },
            Err(e) => RenderOutcome::Failed(e),
        };
        session.apply_render_outcome(outcome);
        true
    }

    #[test]
    fn intake_replaces_preview_and_leaves_gallery_alone() {
        let mut s = Session::new();
        s.set_preview(image_a());
        assert_eq!(s.preview(), Some(&image_a()));
        assert!(s.gallery().is_empty());

        s.set_preview(image_b());
        assert_eq!(s.preview(), Some(&image_b()));
        assert!(s.gallery().is_empty());
        assert!(s.result().is_none());
    }

    #[test]
    fn failed_intake_changes_no_state() {
        let mut s = Session::new();
        s.set_preview(image_a());
        s.intake_failed(IntakeError::ClipboardNoImage);
        assert_eq!(s.preview(), Some(&image_a()));
        assert!(s.gallery().is_empty());
        assert!(s.intake_error().is_some());
    }

    #[test]
    fn trigger_without_preview_is_a_noop() {
        let mut s = Session::new();
        assert!(s.begin_render().is_none());
        assert!(!s.is_rendering());
        assert!(s.result().is_none());
        assert!(s.gallery().is_empty());
    }

    #[test]
    fn successful_render_fills_result_and_prepends_record() {
        let mut s = Session::new();
        s.set_preview(image_a());
        s.room = RoomType::Bedroom;
        s.style = StyleType::Minimalist;

        let service = SimulatedRenderer::with_latency(Duration::ZERO);
        assert!(render_once(&mut s, &service));

        assert!(!s.is_rendering());
        assert_eq!(s.result(), Some(&image_a()));
        assert_eq!(s.gallery().len(), 1);
        let rec = &s.gallery()[0];
        assert_eq!(rec.image, image_a());
        assert_eq!(rec.room, RoomType::Bedroom);
        assert_eq!(rec.style, StyleType::Minimalist);
        // Rendering never clears the preview.
        assert_eq!(s.preview(), Some(&image_a()));
    }

    #[test]
    fn gallery_is_newest_first() {
        let mut s = Session::new();
        let service = SimulatedRenderer::with_latency(Duration::ZERO);

        s.set_preview(image_a());
        assert!(render_once(&mut s, &service));
        s.set_preview(image_b());
        assert!(render_once(&mut s, &service));

        assert_eq!(s.gallery().len(), 2);
        assert_eq!(s.gallery()[0].image, image_b());
        assert_eq!(s.gallery()[1].image, image_a());
    }

    #[test]
    fn two_renders_with_same_selections_make_identical_records() {
        let mut s = Session::new();
        s.room = RoomType::Kitchen;
        s.style = StyleType::Industrial;
        s.set_preview(image_a());

        let service = SimulatedRenderer::with_latency(Duration::ZERO);
        assert!(render_once(&mut s, &service));
        assert!(render_once(&mut s, &service));

        assert_eq!(s.gallery().len(), 2);
        for rec in s.gallery() {
            assert_eq!(rec.image, image_a());
            assert_eq!(rec.room, RoomType::Kitchen);
            assert_eq!(rec.style, StyleType::Industrial);
        }
    }

    #[test]
    fn in_flight_request_captures_trigger_time_state() {
        let mut s = Session::new();
        s.set_preview(image_a());
        s.room = RoomType::Office;
        s.style = StyleType::Modern;

        let request = s.begin_render().unwrap();

        // Replace the preview and selections while the render is in flight.
        s.set_preview(image_b());
        s.room = RoomType::Bathroom;
        s.style = StyleType::Tropical;

        let output = request.image.clone();
        s.apply_render_outcome(RenderOutcome::Completed { request, output });

        // The record reflects what was captured at trigger time, not at
        // completion time.
        let rec = &s.gallery()[0];
        assert_eq!(rec.image, image_a());
        assert_eq!(rec.room, RoomType::Office);
        assert_eq!(rec.style, StyleType::Modern);
        // Current preview is still the replacement.
        assert_eq!(s.preview(), Some(&image_b()));
    }

    #[test]
    fn trigger_is_guarded_while_rendering() {
        let mut s = Session::new();
        s.set_preview(image_a());

        let first = s.begin_render();
        assert!(first.is_some());
        assert!(!s.can_render());
        assert!(s.begin_render().is_none());

        let request = first.unwrap();
        let output = request.image.clone();
        s.apply_render_outcome(RenderOutcome::Completed { request, output });
        assert!(s.can_render());
    }

    struct FailingService;

    impl RenderService for FailingService {
        fn render(&self, _request: &RenderRequest) -> Result<RgbaImage, RenderError> {
            Err(RenderError::Service("backend offline".to_string()))
        }
    }

    #[test]
    fn failed_render_keeps_preview_and_adds_no_record() {
        let mut s = Session::new();
        s.set_preview(image_a());

        assert!(render_once(&mut s, &FailingService));

        assert!(!s.is_rendering());
        assert!(s.render_error().is_some());
        assert!(s.result().is_none());
        assert!(s.gallery().is_empty());
        // Preview retained so the user can retry.
        assert_eq!(s.preview(), Some(&image_a()));
    }

    #[test]
    fn new_trigger_clears_the_previous_render_error() {
        let mut s = Session::new();
        s.set_preview(image_a());
        assert!(render_once(&mut s, &FailingService));
        assert!(s.render_error().is_some());

        let service = SimulatedRenderer::with_latency(Duration::ZERO);
        assert!(render_once(&mut s, &service));
        assert!(s.render_error().is_none());
        assert_eq!(s.gallery().len(), 1);
    }
}
