use super::*;
use crate::app::actions::CRITIQUE_FAILED;
use crate::app::quiz::Generation;
use crate::tasks::take_finished;
use log::{info, warn};
use std::time::Duration;

/// Longer gaps between frames count as idle.
const MAX_ACTIVE_GAP: Duration = Duration::from_secs(5);

impl ArtTutorApp {
    /// Applies whatever background requests finished since the last frame.
    pub fn poll_requests(&mut self) {
        if let Some(done) = take_finished(&mut self.image.request) {
            match done {
                Some(Ok(analysis)) => self.image.analysis = Some(analysis),
                Some(Err(err)) => {
                    warn!("image classification failed: {err}");
                    self.image.analysis = Some(ImageAnalysis::upload_failed());
                }
                None => self.image.analysis = Some(ImageAnalysis::upload_failed()),
            }
        }

        for context in [QuizContext::ImageAnalysis, QuizContext::Practice] {
            let Some(generation) = self.session_mut(context).poll() else {
                continue;
            };
            match generation {
                Generation::Installed(count) => info!("{context} quiz ready with {count} questions"),
                Generation::Failed(err) => {
                    warn!("{context} quiz generation failed: {err}");
                    self.message = "❌ Could not generate a quiz. Try again.".into();
                }
                Generation::Lost => {
                    self.message = "❌ Could not generate a quiz. Try again.".into();
                }
            }
        }

        if let Some(done) = take_finished(&mut self.drawing.request) {
            self.drawing.critique = match done {
                Some(Ok(critique)) => critique,
                Some(Err(err)) => {
                    warn!("critique failed: {err}");
                    CRITIQUE_FAILED.into()
                }
                None => CRITIQUE_FAILED.into(),
            };
        }
    }

    /// Feeds the time since the previous frame into the active-time quest.
    pub fn track_active_time(&mut self, now: Instant) {
        if let Some(prev) = self.last_frame.replace(now) {
            let gap = now.saturating_duration_since(prev).min(MAX_ACTIVE_GAP);
            self.progress.record_active_time(gap);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::app;
    use super::*;
    use crate::scoring::question;
    use chrono::NaiveDate;
    use std::sync::mpsc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    /// Installs `questions` in `context` as if the backend had answered.
    fn deliver(app: &mut ArtTutorApp, context: QuizContext, source: &str, questions: Vec<crate::model::QuizQuestion>) {
        let (tx, rx) = mpsc::channel();
        assert!(app.session_mut(context).begin(source, PendingRequest::new(rx)));
        tx.send(Ok(questions)).unwrap();
        app.poll_requests();
        assert_eq!(app.session(context).phase(), QuizPhase::Ready);
    }

    fn answer_all_correctly(app: &mut ArtTutorApp, context: QuizContext) {
        let correct: Vec<String> = app
            .session(context)
            .questions()
            .iter()
            .map(|q| q.correct_answer.clone())
            .collect();
        for (i, answer) in correct.iter().enumerate() {
            app.select_answer(context, i, answer);
        }
    }

    fn classified_as(app: &mut ArtTutorApp, style: &str) {
        let (tx, rx) = mpsc::channel();
        app.image.request = Some(PendingRequest::new(rx));
        tx.send(Ok(ImageAnalysis {
            image_style: Some(style.into()),
            confidence: Some(0.91),
            ..ImageAnalysis::default()
        }))
        .unwrap();
        app.poll_requests();
    }

    fn baroque(n: usize) -> Vec<crate::model::QuizQuestion> {
        (0..n)
            .map(|i| question(&format!("Baroque question {i}"), &["right", "wrong"], "right"))
            .collect()
    }

    #[test]
    fn scenario_first_quiz_starts_streak() {
        let mut app = app();
        classified_as(&mut app, "Baroque");
        assert_eq!(app.detected_style(), Some("Baroque"));

        deliver(&mut app, QuizContext::ImageAnalysis, "Baroque", baroque(3));
        answer_all_correctly(&mut app, QuizContext::ImageAnalysis);
        app.submit_quiz_on(QuizContext::ImageAnalysis, day(1));

        let outcome = app.image_quiz.outcome().unwrap();
        assert_eq!(outcome.correct_count, 3);
        assert_eq!(outcome.points_gained, 30);
        assert_eq!(app.progress.points, 30);
        assert_eq!(app.progress.streak, 1);
        assert!(app.progress.badges.is_empty());
        assert!(app.image_quiz.show_results());
    }

    #[test]
    fn scenario_next_day_extends_streak() {
        let mut app = app();
        deliver(&mut app, QuizContext::ImageAnalysis, "Baroque", baroque(3));
        answer_all_correctly(&mut app, QuizContext::ImageAnalysis);
        app.submit_quiz_on(QuizContext::ImageAnalysis, day(1));
        app.image_quiz.return_to_default();

        deliver(&mut app, QuizContext::ImageAnalysis, "Baroque", baroque(2));
        answer_all_correctly(&mut app, QuizContext::ImageAnalysis);
        app.submit_quiz_on(QuizContext::ImageAnalysis, day(2));

        assert_eq!(app.progress.points, 50);
        assert_eq!(app.progress.streak, 2);
    }

    #[test]
    fn scenario_hundred_points_unlocks_badge_and_quest() {
        let mut app = app();
        deliver(&mut app, QuizContext::Practice, "Rococo", baroque(10));
        answer_all_correctly(&mut app, QuizContext::Practice);
        app.submit_quiz_on(QuizContext::Practice, day(3));

        assert_eq!(app.progress.points, 100);
        assert_eq!(app.progress.badges, vec!["Art Enthusiast"]);
        let xp = app.progress.quest(1).unwrap();
        assert_eq!(xp.current, 100);
        assert!(xp.reward_unlocked);
        assert!(app.message.contains("Art Enthusiast"));
    }

    #[test]
    fn scenario_unanswered_question_is_rejected() {
        let mut app = app();
        deliver(&mut app, QuizContext::Practice, "Realism", baroque(2));
        app.select_answer(QuizContext::Practice, 0, "right");
        app.submit_quiz_on(QuizContext::Practice, day(4));

        assert!(app.alert.is_some());
        assert!(app.practice_quiz.outcome().is_none());
        assert!(!app.practice_quiz.show_results());
        assert_eq!(app.progress.points, 0);
        assert_eq!(app.progress.streak, 0);
    }

    #[test]
    fn contexts_keep_separate_answers() {
        let mut app = app();
        deliver(&mut app, QuizContext::ImageAnalysis, "Baroque", baroque(2));
        deliver(&mut app, QuizContext::Practice, "Symbolism", baroque(2));

        app.select_answer(QuizContext::Practice, 0, "wrong");
        assert_eq!(app.image_quiz.answers(), &["", ""]);
        assert_eq!(app.practice_quiz.answers()[0], "wrong");

        answer_all_correctly(&mut app, QuizContext::ImageAnalysis);
        app.submit_quiz_on(QuizContext::ImageAnalysis, day(5));
        assert!(app.image_quiz.show_results());
        assert!(!app.practice_quiz.show_results());
    }

    #[test]
    fn failed_classification_shows_placeholder() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        app.image.request = Some(PendingRequest::new(rx));
        tx.send(Err(BackendError::Status { status: 502, body: String::new() })).unwrap();
        app.poll_requests();

        let analysis = app.image.analysis.as_ref().unwrap();
        assert!(analysis.image_style.is_none());
        assert!(analysis.confidence.is_none());
        assert_eq!(analysis.recommendations.as_deref(), Some("Error uploading image"));
        assert!(!app.image.is_loading());
    }

    #[test]
    fn failed_generation_reports_and_returns_to_idle() {
        let mut app = app();
        let (tx, rx) = mpsc::channel();
        assert!(app.practice_quiz.begin("Baroque", PendingRequest::new(rx)));
        tx.send(Err(BackendError::Malformed("no questions".into()))).unwrap();

        app.poll_requests();
        assert_eq!(app.practice_quiz.phase(), QuizPhase::Idle);
        assert!(!app.practice_quiz.is_loading());
        assert!(app.message.contains("Could not generate a quiz"));
    }

    #[test]
    fn failed_critique_shows_error_text() {
        let mut app = app();
        let (tx, rx) = mpsc::channel::<Result<String, BackendError>>();
        app.drawing.request = Some(PendingRequest::new(rx));
        drop(tx);
        app.poll_requests();
        assert_eq!(app.drawing.critique, CRITIQUE_FAILED);
        assert!(!app.drawing.is_loading());
    }

    #[test]
    fn active_time_caps_idle_gaps() {
        let mut app = app();
        let start = Instant::now();
        app.track_active_time(start);
        app.track_active_time(start + Duration::from_secs(2));
        app.track_active_time(start + Duration::from_secs(600));
        assert_eq!(app.progress.active_time, Duration::from_secs(7));
    }
}
