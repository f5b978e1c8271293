//! Fixed task category catalog.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskCategory {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub description: String,
}

impl TaskCategory {
    fn new(id: &str, name: &str, color: &str, icon: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }
}

/// The five predefined categories. Not user-extensible.
pub fn default_categories() -> Vec<TaskCategory> {
    vec![
        TaskCategory::new(
            "health",
            "Health & Fitness",
            "#ff6b6b",
            "💪",
            "Physical training and wellbeing tasks",
        ),
        TaskCategory::new(
            "learning",
            "Learning & Skills",
            "#4ecdc4",
            "📚",
            "Education and skill-building tasks",
        ),
        TaskCategory::new(
            "work",
            "Work & Career",
            "#45b7d1",
            "💼",
            "Professional development tasks",
        ),
        TaskCategory::new(
            "personal",
            "Personal Growth",
            "#96ceb4",
            "🌱",
            "Personal development and habits",
        ),
        TaskCategory::new(
            "social",
            "Social & Relationships",
            "#feca57",
            "👥",
            "Social interactions and relationships",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids() {
        let ids: Vec<String> = default_categories().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["health", "learning", "work", "personal", "social"]);
    }
}
