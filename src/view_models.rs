// src/view_models.rs

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardInfo {
    pub streak: u32,
    pub points: u32,
    pub badges: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestRow {
    pub id: u32,
    pub icon: String,
    pub label: String,
    pub current: u32,
    pub goal: u32,
    pub percentage: u32,   // 0..=100
    pub unlocked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResultRow {
    pub number: usize,     // 1-based
    pub question: String,
    pub chosen: String,
    pub correct_answer: String,
    pub explanation: String,
    pub is_correct: bool,
}
