use crate::backend::{BackendClient, BackendError};
use crate::canvas::DrawingCanvas;
use crate::gamification::Progress;
use crate::model::{Catalog, ImageAnalysis, QuizContext, Tab};
use crate::tasks::PendingRequest;
use std::sync::Arc;
use std::time::Instant;

pub mod actions;
pub mod navigation;
pub mod quiz;
pub mod resets;
pub mod updates;
pub mod view_models;

pub use crate::view_models::{DashboardInfo, QuestRow, QuizResultRow};
pub use quiz::{QuizPhase, QuizSession, SubmitError};

/// An image picked by the user, kept for preview and upload.
#[derive(Clone)]
pub struct UploadedImage {
    pub name: String,
    pub bytes: Arc<[u8]>,
    /// Decoded pixels, absent when the format is not previewable.
    pub preview: Option<egui::ColorImage>,
}

#[derive(Default)]
pub struct ImageAnalysisState {
    pub upload: Option<UploadedImage>,
    pub analysis: Option<ImageAnalysis>,
    pub path_input: String,
    pub texture: Option<egui::TextureHandle>,
    pub request: Option<PendingRequest<Result<ImageAnalysis, BackendError>>>,
}

impl ImageAnalysisState {
    pub fn is_loading(&self) -> bool {
        self.request.is_some()
    }
}

#[derive(Default)]
pub struct CanvasState {
    pub canvas: DrawingCanvas,
    /// Size the strokes were drawn at, in points.
    pub size: [f32; 2],
    pub critique: String,
    pub request: Option<PendingRequest<Result<String, BackendError>>>,
}

impl CanvasState {
    pub fn is_loading(&self) -> bool {
        self.request.is_some()
    }
}

pub struct ArtTutorApp {
    pub catalog: Catalog,
    pub backend: BackendClient,
    pub tab: Tab,
    pub progress: Progress,
    pub image: ImageAnalysisState,
    pub image_quiz: QuizSession,
    pub practice_quiz: QuizSession,
    pub drawing: CanvasState,
    pub message: String,
    /// Modal prompt; blocks the panels behind it until dismissed.
    pub alert: Option<String>,
    pub repaint: Option<egui::Context>,
    pub last_frame: Option<Instant>,
}

impl ArtTutorApp {
    pub fn new(catalog: Catalog, backend: BackendClient) -> Self {
        let progress = Progress::from_catalog(&catalog);
        Self {
            catalog,
            backend,
            tab: Tab::default(),
            progress,
            image: ImageAnalysisState::default(),
            image_quiz: QuizSession::default(),
            practice_quiz: QuizSession::default(),
            drawing: CanvasState::default(),
            message: String::new(),
            alert: None,
            repaint: None,
            last_frame: None,
        }
    }

    /// Workers repaint this context when they finish.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn session(&self, context: QuizContext) -> &QuizSession {
        match context {
            QuizContext::ImageAnalysis => &self.image_quiz,
            QuizContext::Practice => &self.practice_quiz,
        }
    }

    pub fn session_mut(&mut self, context: QuizContext) -> &mut QuizSession {
        match context {
            QuizContext::ImageAnalysis => &mut self.image_quiz,
            QuizContext::Practice => &mut self.practice_quiz,
        }
    }

    pub fn detected_style(&self) -> Option<&str> {
        self.image.analysis.as_ref()?.image_style.as_deref()
    }
}
