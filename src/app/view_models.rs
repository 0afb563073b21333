use super::*;

impl ArtTutorApp {
    pub fn dashboard_info(&self) -> DashboardInfo {
        DashboardInfo {
            streak: self.progress.streak,
            points: self.progress.points,
            badges: self.progress.badges.clone(),
        }
    }

    pub fn quest_rows(&self) -> Vec<QuestRow> {
        self.progress
            .quests
            .iter()
            .map(|q| QuestRow {
                id: q.id,
                icon: q.icon.clone(),
                label: q.label.clone(),
                current: q.current,
                goal: q.goal,
                percentage: q.percentage(),
                unlocked: q.reward_unlocked,
            })
            .collect()
    }

    /// One row per question of a submitted quiz; empty before submission.
    pub fn result_rows(&self, context: QuizContext) -> Vec<QuizResultRow> {
        let session = self.session(context);
        if !session.show_results() {
            return Vec::new();
        }
        session
            .questions()
            .iter()
            .zip(session.answers())
            .enumerate()
            .map(|(i, (q, chosen))| QuizResultRow {
                number: i + 1,
                question: q.question.clone(),
                chosen: chosen.clone(),
                correct_answer: q.correct_answer.clone(),
                explanation: q.explanation.clone(),
                is_correct: *chosen == q.correct_answer,
            })
            .collect()
    }
}
