// src/data.rs

use crate::model::Catalog;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Loads categories, badge rules and quests from the embedded YAML.
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    parse_catalog(include_str!("data/catalog.yaml"))
}

pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let mut catalog: Catalog = serde_yaml::from_str(content)?;

    if catalog.categories.is_empty() {
        return Err(CatalogError::Invalid("no practice categories".into()));
    }
    if let Some(q) = catalog.quests.iter().find(|q| q.goal == 0) {
        return Err(CatalogError::Invalid(format!("quest {} has a zero goal", q.id)));
    }
    let mut ids: Vec<u32> = catalog.quests.iter().map(|q| q.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != catalog.quests.len() {
        return Err(CatalogError::Invalid("duplicate quest ids".into()));
    }

    // Rules are evaluated in ascending threshold order
    catalog.badges.sort_by_key(|b| b.threshold);
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestKind;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = read_catalog_embedded().unwrap();
        assert_eq!(catalog.categories.len(), 14);
        assert_eq!(catalog.categories.last().map(String::as_str), Some("Random"));
        assert_eq!(catalog.badges[0].name, "Art Enthusiast");
        assert_eq!(catalog.badges[0].threshold, 100);

        let xp = &catalog.quests[0];
        assert_eq!(xp.kind, QuestKind::Xp);
        assert_eq!(xp.goal, 100);
        assert_eq!(xp.current, 0);
        assert!(!xp.reward_unlocked);
        assert_eq!(catalog.quests[1].min_percent, 80);
    }

    #[test]
    fn rejects_zero_goal_and_duplicate_ids() {
        let zero = "categories: [Baroque]\nquests:\n  - {id: 1, label: x, goal: 0, icon: a, kind: xp}\n";
        assert!(matches!(parse_catalog(zero), Err(CatalogError::Invalid(_))));

        let dup = "categories: [Baroque]\nquests:\n  - {id: 1, label: x, goal: 5, icon: a, kind: xp}\n  - {id: 1, label: y, goal: 5, icon: b, kind: active_minutes}\n";
        assert!(matches!(parse_catalog(dup), Err(CatalogError::Invalid(_))));
    }

    #[test]
    fn badge_rules_are_sorted_by_threshold() {
        let yaml = "categories: [Baroque]\nbadges:\n  - {threshold: 500, name: Master}\n  - {threshold: 100, name: Art Enthusiast}\n";
        let catalog = parse_catalog(yaml).unwrap();
        assert_eq!(catalog.badges[0].threshold, 100);
        assert_eq!(catalog.badges[1].threshold, 500);
    }
}
