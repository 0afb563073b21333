use crate::model::QuizQuestion;

pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct_count: u32,
    pub total: u32,
    pub points_gained: u32,
}

impl QuizOutcome {
    /// Rounded score percentage; an empty quiz counts as 0.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct_count as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// Every slot has a selection.
pub fn is_complete(answers: &[String]) -> bool {
    answers.iter().all(|a| !a.is_empty())
}

/// Counts index-wise exact matches against the correct answers.
pub fn score_quiz(questions: &[QuizQuestion], answers: &[String]) -> QuizOutcome {
    let correct_count = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| **a == q.correct_answer)
        .count() as u32;

    QuizOutcome {
        correct_count,
        total: questions.len() as u32,
        points_gained: correct_count * POINTS_PER_CORRECT,
    }
}

#[cfg(test)]
pub(crate) fn question(text: &str, options: &[&str], correct: &str) -> QuizQuestion {
    QuizQuestion {
        question: text.into(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.into(),
        explanation: format!("{correct} is right."),
    }
}
