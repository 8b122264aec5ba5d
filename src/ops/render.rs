//! Render service seam: the trigger logic only ever talks to the
//! `RenderService` trait, so the bundled fixed-delay simulation can be
//! swapped for a real backend without touching the app.

use crate::design::{RoomType, StyleType};
use image::RgbaImage;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

/// Everything a render needs, captured at trigger time. The request owns
/// its own copy of the image so later intake events cannot alter an
/// in-flight render.
#[derive(Clone)]
pub struct RenderRequest {
    pub image: RgbaImage,
    pub room: RoomType,
    pub style: StyleType,
}

/// Failure reported by a render service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    Service(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Service(msg) => write!(f, "render service error: {}", msg),
        }
    }
}

impl RenderError {
    /// Translated message for the Result panel.
    pub fn user_message(&self) -> String {
        match self {
            RenderError::Service(msg) => t!("result.error", reason = msg),
        }
    }
}

/// The external rendering collaborator. Implementations run on a worker
/// thread and may block.
pub trait RenderService: Send + Sync {
    fn render(&self, request: &RenderRequest) -> Result<RgbaImage, RenderError>;
}

/// Stand-in for the real backend: sleeps a fixed latency and echoes the
/// input image back unchanged.
pub struct SimulatedRenderer {
    latency: Duration,
}

impl SimulatedRenderer {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_secs(2),
        }
    }

    /// Zero-latency variant for tests.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderService for SimulatedRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RgbaImage, RenderError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        Ok(request.image.clone())
    }
}

/// Message sent back to the UI thread when a render finishes.
pub enum RenderOutcome {
    /// The request is echoed back so the gallery record can be built from
    /// the trigger-time snapshot.
    Completed {
        request: RenderRequest,
        output: RgbaImage,
    },
    Failed(RenderError),
}

/// Run one render on a worker thread, reporting through `sender`.
pub fn spawn_render(
    service: Arc<dyn RenderService>,
    request: RenderRequest,
    sender: mpsc::Sender<RenderOutcome>,
) {
    std::thread::spawn(move || {
        let outcome = match service.render(&request) {
            Ok(output) => RenderOutcome::Completed { request, output },
            Err(e) => RenderOutcome::Failed(e),
        };
        let _ = sender.send(outcome);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> RgbaImage {
        RgbaImage::from_pixel(3, 2, image::Rgba([120, 40, 200, 255]))
    }

    #[test]
    fn simulated_renderer_echoes_the_input() {
        let service = SimulatedRenderer::with_latency(Duration::ZERO);
        let request = RenderRequest {
            image: test_image(),
            room: RoomType::Bedroom,
            style: StyleType::Modern,
        };
        let out = service.render(&request).unwrap();
        assert_eq!(out, request.image);
    }

    #[test]
    fn spawned_render_reports_completion_with_the_request() {
        let (sender, receiver) = mpsc::channel();
        let service: Arc<dyn RenderService> =
            Arc::new(SimulatedRenderer::with_latency(Duration::ZERO));
        let request = RenderRequest {
            image: test_image(),
            room: RoomType::Kitchen,
            style: StyleType::Industrial,
        };
        spawn_render(service, request, sender);

        match receiver.recv().unwrap() {
            RenderOutcome::Completed { request, output } => {
                assert_eq!(output, request.image);
                assert_eq!(request.room, RoomType::Kitchen);
                assert_eq!(request.style, StyleType::Industrial);
            }
            RenderOutcome::Failed(e) => panic!("unexpected failure: {}", e),
        }
    }

    struct FailingService;

    impl RenderService for FailingService {
        fn render(&self, _request: &RenderRequest) -> Result<RgbaImage, RenderError> {
            Err(RenderError::Service("backend offline".to_string()))
        }
    }

    #[test]
    fn spawned_render_reports_failure() {
        let (sender, receiver) = mpsc::channel();
        let request = RenderRequest {
            image: test_image(),
            room: RoomType::default(),
            style: StyleType::default(),
        };
        spawn_render(Arc::new(FailingService), request, sender);

        match receiver.recv().unwrap() {
            RenderOutcome::Failed(RenderError::Service(msg)) => {
                assert_eq!(msg, "backend offline");
            }
            RenderOutcome::Completed { .. } => panic!("expected failure"),
        }
    }
}
