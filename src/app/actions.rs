use super::*;
use chrono::{Local, NaiveDate};
use log::{debug, info, warn};
use std::path::Path;

impl ArtTutorApp {
    /// Reads the file typed into the path field and uploads it.
    pub fn upload_from_path(&mut self) {
        let raw = self.image.path_input.trim().to_string();
        if raw.is_empty() {
            self.message = "⚠ Enter the path of an image first.".into();
            return;
        }
        let path = Path::new(&raw);
        match std::fs::read(path) {
            Ok(bytes) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| raw.clone());
                self.upload_image(name, bytes.into());
            }
            Err(err) => {
                let err = BackendError::from(err);
                warn!("could not read {raw}: {err}");
                self.message = format!("❌ {err}");
            }
        }
    }

    /// Shows the preview and sends the image for classification.
    pub fn upload_image(&mut self, name: String, bytes: Arc<[u8]>) {
        if self.image.request.take().is_some() {
            debug!("replacing an in-flight classification");
        }
        // A quiz about the previous image no longer applies
        self.image_quiz.return_to_default();
        self.image.analysis = None;
        self.image.texture = None;
        self.message.clear();

        let preview = match image::load_from_memory(&bytes) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let size = [rgba.width() as usize, rgba.height() as usize];
                Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
            }
            Err(err) => {
                debug!("no preview for {name}: {err}");
                None
            }
        };

        self.image.upload = Some(UploadedImage {
            name: name.clone(),
            bytes: bytes.clone(),
            preview,
        });

        let backend = self.backend.clone();
        self.image.request = Some(PendingRequest::spawn(
            "classify-image",
            self.repaint.clone(),
            move || backend.classify_image(&name, bytes.to_vec()),
        ));
    }

    pub fn generate_image_quiz(&mut self) {
        let Some(style) = self.detected_style().map(str::to_string) else {
            self.message = "⚠ Upload an image so a style can be detected first.".into();
            return;
        };
        self.start_generation(QuizContext::ImageAnalysis, &style);
    }

    pub fn generate_practice_quiz(&mut self, category: &str) {
        self.start_generation(QuizContext::Practice, category);
    }

    /// Spawns a generation for `context` unless its session is busy.
    fn start_generation(&mut self, context: QuizContext, source: &str) {
        let session = self.session(context);
        if session.is_loading() || session.phase() != QuizPhase::Idle {
            debug!("ignoring {context} generation; session is {:?}", session.phase());
            return;
        }

        let backend = self.backend.clone();
        let style = source.to_string();
        let request = PendingRequest::spawn(
            &format!("generate-quiz/{context}"),
            self.repaint.clone(),
            move || backend.generate_quiz(context, &style),
        );
        self.session_mut(context).begin(source, request);
        self.message.clear();
    }

    pub fn select_answer(&mut self, context: QuizContext, index: usize, option: &str) {
        if !self.session_mut(context).select_answer(index, option) {
            debug!("ignored answer {option:?} for {context} question {index}");
        }
    }

    pub fn submit_quiz(&mut self, context: QuizContext) {
        self.submit_quiz_on(context, Local::now().date_naive());
    }

    /// Submits using `today` as the streak day.
    pub fn submit_quiz_on(&mut self, context: QuizContext, today: NaiveDate) {
        let session = match context {
            QuizContext::ImageAnalysis => &mut self.image_quiz,
            QuizContext::Practice => &mut self.practice_quiz,
        };

        match session.submit(&mut self.progress, today) {
            Ok(submission) => {
                let outcome = submission.outcome;
                self.message = format!(
                    "You got {} out of {} correct! (+{} points)",
                    outcome.correct_count, outcome.total, outcome.points_gained
                );
                if !submission.new_badges.is_empty() {
                    self.message
                        .push_str(&format!("\n🏅 New badge: {}", submission.new_badges.join(", ")));
                }
            }
            Err(SubmitError::Incomplete { unanswered }) => {
                info!("{context} submission rejected: {unanswered} unanswered");
                self.alert = Some("Please answer all questions before submitting.".into());
            }
            Err(SubmitError::NotReady) => {
                debug!("{context} submission ignored; no open quiz");
            }
        }
    }

    /// Sends the current drawing for critique.
    pub fn request_critique(&mut self) {
        if self.drawing.is_loading() {
            return;
        }
        let [w, h] = self.drawing.size;
        let data_url = match self.drawing.canvas.to_data_url(w.round() as u32, h.round() as u32) {
            Ok(url) => url,
            Err(err) => {
                let err = BackendError::from(err);
                warn!("critique not sent: {err}");
                self.drawing.critique = CRITIQUE_FAILED.into();
                return;
            }
        };

        self.drawing.critique.clear();
        let backend = self.backend.clone();
        self.drawing.request = Some(PendingRequest::spawn(
            "critique-canvas",
            self.repaint.clone(),
            move || backend.critique_canvas(&data_url),
        ));
    }
}

pub const CRITIQUE_FAILED: &str = "An error occurred while fetching the critique.";

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;
    use crate::scoring::question;
    use std::sync::mpsc;

    #[test]
    fn image_quiz_needs_a_detected_style() {
        let mut app = app();
        app.generate_image_quiz();
        assert_eq!(app.image_quiz.phase(), QuizPhase::Idle);
        assert!(!app.image_quiz.is_loading());
        assert!(app.message.contains("Upload an image"));
    }

    #[test]
    fn missing_file_reports_without_uploading() {
        let mut app = app();
        app.image.path_input = "/definitely/not/here.png".into();
        app.upload_from_path();
        assert!(app.image.upload.is_none());
        assert!(!app.image.is_loading());
        assert!(app.message.starts_with('❌'));
    }

    #[test]
    fn blank_path_is_rejected() {
        let mut app = app();
        app.image.path_input = "   ".into();
        app.upload_from_path();
        assert!(app.image.upload.is_none());
        assert!(app.message.starts_with('⚠'));
    }

    #[test]
    fn new_upload_resets_quiz_and_replaces_classification() {
        let mut app = app();
        let (old_tx, old_rx) = mpsc::channel();
        app.image.request = Some(PendingRequest::new(old_rx));
        app.image.analysis = Some(ImageAnalysis {
            image_style: Some("Baroque".into()),
            ..ImageAnalysis::default()
        });
        let (quiz_tx, quiz_rx) = mpsc::channel();
        app.image_quiz.begin("Baroque", PendingRequest::new(quiz_rx));
        quiz_tx
            .send(Ok(vec![question("Who?", &["Caravaggio", "Monet"], "Caravaggio")]))
            .unwrap();
        app.poll_requests();
        assert_eq!(app.image_quiz.phase(), QuizPhase::Ready);

        app.upload_image("still_life.png".into(), Arc::from(&b"not an image"[..]));

        assert!(old_tx.send(Ok(ImageAnalysis::upload_failed())).is_err());
        assert!(app.image.is_loading());
        assert_eq!(app.image_quiz.phase(), QuizPhase::Idle);
        assert!(app.image_quiz.questions().is_empty());
        assert!(app.image.analysis.is_none());
        assert!(app.detected_style().is_none());
        let upload = app.image.upload.as_ref().unwrap();
        assert_eq!(upload.name, "still_life.png");
        assert!(upload.preview.is_none());
    }

    #[test]
    fn generate_is_ignored_while_request_in_flight() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        app.practice_quiz.begin("Baroque", PendingRequest::new(rx));

        app.generate_practice_quiz("Cubism");

        assert_eq!(app.practice_quiz.source(), Some("Baroque"));
        assert!(tx.send(Ok(Vec::new())).is_ok());
    }

    #[test]
    fn generate_is_ignored_while_quiz_is_open() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        app.practice_quiz.begin("Baroque", PendingRequest::new(rx));
        tx.send(Ok(vec![question("Who?", &["Rubens", "Dali"], "Rubens")]))
            .unwrap();
        app.poll_requests();

        app.generate_practice_quiz("Cubism");
        assert_eq!(app.practice_quiz.phase(), QuizPhase::Ready);
        assert!(!app.practice_quiz.is_loading());
        assert_eq!(app.practice_quiz.source(), Some("Baroque"));
    }

    #[test]
    fn critique_request_clears_previous_text() {
        let mut app = app();
        app.drawing.size = [80.0, 50.0];
        app.drawing.canvas.start_stroke([10.0, 10.0]);
        app.drawing.canvas.extend_stroke([40.0, 30.0]);
        app.drawing.canvas.end_stroke();
        app.drawing.critique = "Earlier critique.".into();

        app.request_critique();
        assert!(app.drawing.critique.is_empty());
        assert!(app.drawing.is_loading());
        let id = app.drawing.request.as_ref().map(PendingRequest::id);

        // a second click while waiting keeps the first request
        app.request_critique();
        assert_eq!(app.drawing.request.as_ref().map(PendingRequest::id), id);
    }
}
