use std::time::Duration;

use chrono::NaiveDate;

use crate::model::{BadgeRule, Catalog, Quest, QuestKind};
use crate::scoring::QuizOutcome;

/// New streak after a point-earning event on `today`.
///
/// A day difference of zero keeps the streak, one extends it, anything
/// else (a gap, or the clock going backwards) starts over at 1.
pub fn next_streak(last_point_date: Option<NaiveDate>, today: NaiveDate, streak: u32) -> u32 {
    let Some(last) = last_point_date else {
        return 1;
    };
    match (today - last).num_days() {
        0 => streak,
        1 => streak + 1,
        _ => 1,
    }
}

/// Sets `current` (clamped to the goal) and latches the reward.
pub fn sync_quest(quest: &mut Quest, value: u32) {
    quest.current = value.min(quest.goal);
    if quest.current >= quest.goal {
        quest.reward_unlocked = true;
    }
}

/// Appends every badge whose threshold is reached and returns the new ones.
pub fn award_badges(points: u32, badges: &mut Vec<String>, rules: &[BadgeRule]) -> Vec<String> {
    let mut awarded = Vec::new();
    for rule in rules.iter().filter(|r| points >= r.threshold) {
        if !badges.contains(&rule.name) {
            badges.push(rule.name.clone());
            awarded.push(rule.name.clone());
        }
    }
    awarded
}

/// Points, streak, badges and quests for the current session.
#[derive(Clone, Debug, Default)]
pub struct Progress {
    pub points: u32,
    pub streak: u32,
    pub last_point_date: Option<NaiveDate>,
    pub badges: Vec<String>,
    pub quests: Vec<Quest>,
    pub active_time: Duration,
    badge_rules: Vec<BadgeRule>,
}

impl Progress {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            quests: catalog.quests.clone(),
            badge_rules: catalog.badges.clone(),
            ..Self::default()
        }
    }

    /// Applies a submitted quiz. Returns the badges awarded by it.
    pub fn record_quiz(&mut self, outcome: &QuizOutcome, today: NaiveDate) -> Vec<String> {
        if outcome.points_gained > 0 {
            self.streak = next_streak(self.last_point_date, today, self.streak);
            self.last_point_date = Some(today);
        } else {
            self.streak = 0;
        }

        self.points += outcome.points_gained;

        let pct = outcome.percentage();
        for quest in &mut self.quests {
            if quest.kind == QuestKind::HighScore && outcome.total > 0 && pct >= quest.min_percent {
                let next = quest.current + 1;
                sync_quest(quest, next);
            }
        }

        self.sync_points()
    }

    /// Recomputes point-driven quests and badges from `points`.
    pub fn sync_points(&mut self) -> Vec<String> {
        let points = self.points;
        for quest in self.quests.iter_mut().filter(|q| q.kind == QuestKind::Xp) {
            sync_quest(quest, points);
        }
        award_badges(points, &mut self.badges, &self.badge_rules)
    }

    pub fn record_active_time(&mut self, elapsed: Duration) {
        self.active_time += elapsed;
        let minutes = (self.active_time.as_secs() / 60) as u32;
        for quest in self.quests.iter_mut().filter(|q| q.kind == QuestKind::ActiveMinutes) {
            sync_quest(quest, minutes);
        }
    }

    pub fn quest(&self, id: u32) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_catalog_embedded;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn outcome(correct: u32, total: u32) -> QuizOutcome {
        QuizOutcome {
            correct_count: correct,
            total,
            points_gained: correct * 10,
        }
    }

    fn xp_quest() -> Quest {
        Quest {
            id: 1,
            label: "Earn 100 XP".into(),
            goal: 100,
            icon: "⚡".into(),
            kind: QuestKind::Xp,
            min_percent: 80,
            current: 0,
            reward_unlocked: false,
        }
    }

    #[test]
    fn streak_rules() {
        assert_eq!(next_streak(None, day(5), 0), 1);
        assert_eq!(next_streak(Some(day(5)), day(5), 3), 3);
        assert_eq!(next_streak(Some(day(5)), day(6), 3), 4);
        assert_eq!(next_streak(Some(day(5)), day(8), 3), 1);
        // clock moved back
        assert_eq!(next_streak(Some(day(5)), day(4), 3), 1);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let last = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(next_streak(Some(last), day(1), 2), 3);
    }

    #[test]
    fn xp_quest_clamps_and_latches() {
        let mut quest = xp_quest();
        for points in [0, 50, 100, 150] {
            sync_quest(&mut quest, points);
            assert_eq!(quest.current, points.min(100));
            assert_eq!(quest.reward_unlocked, points >= 100);
        }
        sync_quest(&mut quest, 40);
        assert_eq!(quest.current, 40);
        assert!(quest.reward_unlocked);
    }

    #[test]
    fn badge_awarded_once() {
        let rules = vec![BadgeRule {
            threshold: 100,
            name: "Art Enthusiast".into(),
        }];
        let mut badges = Vec::new();
        assert!(award_badges(90, &mut badges, &rules).is_empty());
        assert!(badges.is_empty());
        assert_eq!(award_badges(100, &mut badges, &rules), vec!["Art Enthusiast"]);
        assert!(award_badges(150, &mut badges, &rules).is_empty());
        assert_eq!(badges, vec!["Art Enthusiast"]);
    }

    #[test]
    fn badge_rules_apply_in_threshold_order() {
        let rules = vec![
            BadgeRule { threshold: 100, name: "Art Enthusiast".into() },
            BadgeRule { threshold: 300, name: "Connoisseur".into() },
        ];
        let mut badges = Vec::new();
        award_badges(350, &mut badges, &rules);
        assert_eq!(badges, vec!["Art Enthusiast", "Connoisseur"]);
    }

    #[test]
    fn unsorted_rules_still_award_every_reached_badge() {
        let catalog = Catalog {
            categories: vec!["Baroque".into()],
            badges: vec![
                BadgeRule { threshold: 300, name: "Connoisseur".into() },
                BadgeRule { threshold: 100, name: "Art Enthusiast".into() },
            ],
            quests: Vec::new(),
        };
        let mut progress = Progress::from_catalog(&catalog);
        progress.points = 150;
        assert_eq!(progress.sync_points(), vec!["Art Enthusiast"]);
        progress.points = 300;
        assert_eq!(progress.sync_points(), vec!["Connoisseur"]);
    }

    #[test]
    fn zero_point_quiz_zeroes_streak_for_rest_of_day() {
        let mut progress = Progress::from_catalog(&read_catalog_embedded().unwrap());
        progress.record_quiz(&outcome(1, 1), day(3));
        progress.record_quiz(&outcome(0, 1), day(3));
        // same-day difference keeps whatever the streak is, including 0
        progress.record_quiz(&outcome(1, 1), day(3));
        assert_eq!(progress.streak, 0);

        progress.record_quiz(&outcome(1, 1), day(4));
        assert_eq!(progress.streak, 1);
    }

    #[test]
    fn zero_point_quiz_resets_streak_and_keeps_date() {
        let mut progress = Progress::from_catalog(&read_catalog_embedded().unwrap());
        progress.record_quiz(&outcome(2, 2), day(1));
        progress.record_quiz(&outcome(1, 2), day(2));
        assert_eq!(progress.streak, 2);

        progress.record_quiz(&outcome(0, 3), day(2));
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.last_point_date, Some(day(2)));
        assert_eq!(progress.points, 30);
    }

    #[test]
    fn high_score_quest_counts_good_attempts() {
        let mut progress = Progress::from_catalog(&read_catalog_embedded().unwrap());
        progress.record_quiz(&outcome(3, 4), day(1)); // 75%
        assert_eq!(progress.quest(2).unwrap().current, 0);
        progress.record_quiz(&outcome(4, 5), day(1)); // 80%
        progress.record_quiz(&outcome(5, 5), day(1));
        progress.record_quiz(&outcome(5, 5), day(1));
        let quest = progress.quest(2).unwrap();
        assert_eq!(quest.current, 2);
        assert!(quest.reward_unlocked);
    }

    #[test]
    fn active_minutes_accumulate() {
        let mut progress = Progress::from_catalog(&read_catalog_embedded().unwrap());
        progress.record_active_time(Duration::from_secs(90));
        assert_eq!(progress.quest(3).unwrap().current, 1);
        progress.record_active_time(Duration::from_secs(20 * 60));
        let quest = progress.quest(3).unwrap();
        assert_eq!(quest.current, 15);
        assert!(quest.reward_unlocked);
    }
}
