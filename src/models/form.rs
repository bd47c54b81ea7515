// Form model - the externally owned source of truth for selections
//
// Groups only mirror this state transiently; every render re-reads it, so
// a parent that ignores or delays a change callback can never diverge from
// what is shown.

use std::collections::HashMap;

use crate::models::option::{RadioGroupConfig, SelectionChange};
use crate::utils::error::{Result, StartuiError};

#[derive(Debug)]
pub struct FormModel {
    groups: Vec<RadioGroupConfig>,
    selected: HashMap<String, String>,
}

impl FormModel {
    pub fn new(groups: Vec<RadioGroupConfig>) -> Result<Self> {
        if groups.is_empty() {
            return Err(StartuiError::Config("form has no option groups".to_string()));
        }
        for (i, group) in groups.iter().enumerate() {
            if groups[..i].iter().any(|other| other.id == group.id) {
                return Err(StartuiError::Config(format!(
                    "form has duplicate group id '{}'",
                    group.id
                )));
            }
        }

        let selected = groups
            .iter()
            .map(|group| (group.id.clone(), group.default_key.clone()))
            .collect();

        Ok(Self { groups, selected })
    }

    pub fn groups(&self) -> &[RadioGroupConfig] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Authoritative selected key for a group. Empty string for an unknown
    /// group id, which then matches no option key (zero checked).
    pub fn selected_for(&self, group_id: &str) -> &str {
        self.selected
            .get(group_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Apply a selection change delivered by a group. Unknown group ids or
    /// values are ignored; the change carries what a group validated.
    pub fn apply(&mut self, change: &SelectionChange) {
        let Some(group) = self.groups.iter().find(|g| g.id == change.group_id) else {
            return;
        };
        if group.option(&change.value).is_none() {
            return;
        }
        self.selected
            .insert(change.group_id.clone(), change.value.clone());
    }

    /// One-line summary of the current selections, in group order.
    pub fn summary(&self) -> String {
        self.groups
            .iter()
            .map(|group| format!("{}={}", group.id, self.selected_for(&group.id)))
            .collect::<Vec<_>>()
            .join("  ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::option::RadioOption;

    fn sample_form() -> FormModel {
        let groups = vec![
            RadioGroupConfig::new(
                "project",
                "Project",
                vec![
                    RadioOption::new("maven-project", "Maven Project", "2.1.8.RELEASE").unwrap(),
                    RadioOption::new("gradle-project", "Gradle Project", "2.1.8.RELEASE").unwrap(),
                ],
                "maven-project",
            )
            .unwrap(),
            RadioGroupConfig::new(
                "language",
                "Language",
                vec![
                    RadioOption::new("java", "Java", "2.1.8.RELEASE").unwrap(),
                    RadioOption::new("kotlin", "Kotlin", "2.1.8.RELEASE").unwrap(),
                ],
                "java",
            )
            .unwrap(),
        ];
        FormModel::new(groups).unwrap()
    }

    #[test]
    fn test_defaults_selected() {
        let form = sample_form();
        assert_eq!(form.selected_for("project"), "maven-project");
        assert_eq!(form.selected_for("language"), "java");
        assert_eq!(form.selected_for("nope"), "");
    }

    #[test]
    fn test_apply_change() {
        let mut form = sample_form();
        form.apply(&SelectionChange {
            group_id: "project".to_string(),
            value: "gradle-project".to_string(),
            version_tag: "2.1.8.RELEASE".to_string(),
        });
        assert_eq!(form.selected_for("project"), "gradle-project");
        // other groups untouched
        assert_eq!(form.selected_for("language"), "java");
    }

    #[test]
    fn test_apply_ignores_unknown() {
        let mut form = sample_form();
        form.apply(&SelectionChange {
            group_id: "project".to_string(),
            value: "ant-project".to_string(),
            version_tag: "x".to_string(),
        });
        assert_eq!(form.selected_for("project"), "maven-project");

        form.apply(&SelectionChange {
            group_id: "nope".to_string(),
            value: "maven-project".to_string(),
            version_tag: "x".to_string(),
        });
        assert_eq!(form.selected_for("nope"), "");
    }

    #[test]
    fn test_rejects_duplicate_group_ids() {
        let group = RadioGroupConfig::new(
            "project",
            "Project",
            vec![RadioOption::new("maven-project", "Maven Project", "a").unwrap()],
            "maven-project",
        )
        .unwrap();
        assert!(FormModel::new(vec![group.clone(), group]).is_err());
    }

    #[test]
    fn test_summary() {
        let form = sample_form();
        assert_eq!(form.summary(), "project=maven-project  language=java");
    }
}
