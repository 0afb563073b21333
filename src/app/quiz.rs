//! Lifecycle of one quiz context: Idle → Generating → Ready → Submitted → Idle.

use chrono::NaiveDate;
use log::{info, warn};

use crate::backend::BackendError;
use crate::gamification::Progress;
use crate::model::QuizQuestion;
use crate::scoring::{QuizOutcome, is_complete, score_quiz};
use crate::tasks::{PendingRequest, take_finished};

pub type QuizResult = Result<Vec<QuizQuestion>, BackendError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Idle,
    Generating,
    Ready,
    Submitted,
}

#[derive(Debug)]
pub enum Generation {
    Installed(usize),
    Failed(BackendError),
    Lost,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitError {
    NotReady,
    Incomplete { unanswered: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    pub outcome: QuizOutcome,
    pub new_badges: Vec<String>,
}

#[derive(Debug, Default)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<String>,
    outcome: Option<QuizOutcome>,
    phase: QuizPhase,
    source: Option<String>,
    request: Option<PendingRequest<QuizResult>>,
}

impl QuizSession {
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Style or category the current questions were generated from.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_some()
    }

    pub fn is_generated(&self) -> bool {
        matches!(self.phase, QuizPhase::Ready | QuizPhase::Submitted)
    }

    pub fn show_results(&self) -> bool {
        self.phase == QuizPhase::Submitted
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.is_empty()).count()
    }

    /// Starts generating from `source`. Only allowed while idle.
    pub fn begin(&mut self, source: &str, request: PendingRequest<QuizResult>) -> bool {
        if self.phase != QuizPhase::Idle {
            return false;
        }
        self.source = Some(source.to_string());
        self.request = Some(request);
        self.phase = QuizPhase::Generating;
        true
    }

    /// Applies the generation result once the worker answers.
    pub fn poll(&mut self) -> Option<Generation> {
        match take_finished(&mut self.request)? {
            Some(result) => Some(self.install(result)),
            None => {
                self.phase = QuizPhase::Idle;
                self.source = None;
                Some(Generation::Lost)
            }
        }
    }

    fn install(&mut self, result: QuizResult) -> Generation {
        match result {
            Ok(questions) if !questions.is_empty() => {
                let count = questions.len();
                self.answers = vec![String::new(); count];
                self.questions = questions;
                self.outcome = None;
                self.phase = QuizPhase::Ready;
                Generation::Installed(count)
            }
            // Per-question checks already ran in the backend parser
            Ok(_) => {
                self.phase = QuizPhase::Idle;
                self.source = None;
                Generation::Failed(BackendError::Malformed("empty question list".into()))
            }
            Err(err) => {
                self.phase = QuizPhase::Idle;
                self.source = None;
                Generation::Failed(err)
            }
        }
    }

    /// Drops an in-flight generation; its result will be discarded.
    pub fn cancel(&mut self) -> bool {
        if self.request.take().is_none() {
            return false;
        }
        self.phase = QuizPhase::Idle;
        self.source = None;
        true
    }

    pub fn select_answer(&mut self, index: usize, option: &str) -> bool {
        if self.phase != QuizPhase::Ready {
            return false;
        }
        let offered = self
            .questions
            .get(index)
            .is_some_and(|q| q.options.iter().any(|o| o == option));
        if !offered {
            return false;
        }
        self.answers[index] = option.to_string();
        true
    }

    /// Scores the attempt and records it in `progress`.
    pub fn submit(&mut self, progress: &mut Progress, today: NaiveDate) -> Result<Submission, SubmitError> {
        if self.phase != QuizPhase::Ready {
            return Err(SubmitError::NotReady);
        }
        // Rejected attempts leave progress untouched
        if !is_complete(&self.answers) {
            let unanswered = self.answers.len() - self.answered_count();
            return Err(SubmitError::Incomplete { unanswered });
        }

        let outcome = score_quiz(&self.questions, &self.answers);
        let new_badges = progress.record_quiz(&outcome, today);
        info!(
            "quiz submitted: {}/{} correct, +{} points (total {}, streak {})",
            outcome.correct_count, outcome.total, outcome.points_gained, progress.points, progress.streak
        );
        for badge in &new_badges {
            info!("badge unlocked: {badge}");
        }

        self.outcome = Some(outcome);
        self.phase = QuizPhase::Submitted;
        Ok(Submission { outcome, new_badges })
    }

    /// Back to the pre-generation view.
    pub fn return_to_default(&mut self) {
        if self.cancel() {
            warn!("quiz reset while a generation was in flight");
        }
        self.questions.clear();
        self.answers.clear();
        self.outcome = None;
        self.source = None;
        self.phase = QuizPhase::Idle;
    }
}
