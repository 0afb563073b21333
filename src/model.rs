use serde::{Deserialize, Serialize};
use std::fmt;

/// One multiple-choice question as returned by the quiz generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

impl QuizQuestion {
    /// The correct answer must be one of the offered options.
    pub fn is_well_formed(&self) -> bool {
        !self.options.is_empty() && self.options.iter().any(|o| o == &self.correct_answer)
    }
}

/// Result of a style classification.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysis {
    #[serde(default)]
    pub image_style: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recommendations: Option<String>,
}

impl ImageAnalysis {
    pub fn upload_failed() -> Self {
        Self {
            recommendations: Some("Error uploading image".into()),
            ..Self::default()
        }
    }

    /// Confidence as "87.50%".
    pub fn confidence_label(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.2}%", c * 100.0))
    }
}

/// The two independent quiz flows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuizContext {
    ImageAnalysis,
    Practice,
}

impl QuizContext {
    pub fn path(self) -> &'static str {
        match self {
            QuizContext::ImageAnalysis => "/generate-quiz/image-analysis",
            QuizContext::Practice => "/generate-quiz/practice",
        }
    }
}

impl fmt::Display for QuizContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizContext::ImageAnalysis => write!(f, "image-analysis"),
            QuizContext::Practice => write!(f, "practice"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    ImageAnalysis,
    Practice,
    Canvas,
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::ImageAnalysis, Tab::Practice, Tab::Canvas, Tab::Progress];

    pub fn label(self) -> &'static str {
        match self {
            Tab::ImageAnalysis => "🖼 Image Analysis",
            Tab::Practice => "🎯 Practice",
            Tab::Canvas => "🎨 Canvas",
            Tab::Progress => "📈 Progress",
        }
    }

    /// Quiz context shown on this tab, if any.
    pub fn quiz_context(self) -> Option<QuizContext> {
        match self {
            Tab::ImageAnalysis => Some(QuizContext::ImageAnalysis),
            Tab::Practice => Some(QuizContext::Practice),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuestKind {
    /// Tracks cumulative points.
    Xp,
    /// Counts quizzes scored at or above `min_percent`.
    HighScore,
    /// Whole minutes of active use.
    ActiveMinutes,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Quest {
    pub id: u32,
    pub label: String,
    pub goal: u32,
    pub icon: String,
    pub kind: QuestKind,
    #[serde(default = "default_min_percent")]
    pub min_percent: u32,
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub reward_unlocked: bool,
}

fn default_min_percent() -> u32 {
    80
}

impl Quest {
    /// Rounded percentage of the goal, capped at 100.
    pub fn percentage(&self) -> u32 {
        if self.goal == 0 {
            return 100;
        }
        let pct = (self.current as f64 / self.goal as f64 * 100.0).round() as u32;
        pct.min(100)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BadgeRule {
    pub threshold: u32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Catalog {
    pub categories: Vec<String>,
    #[serde(default)]
    pub badges: Vec<BadgeRule>,
    #[serde(default)]
    pub quests: Vec<Quest>,
}
