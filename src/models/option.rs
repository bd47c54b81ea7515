// Radio option data model
//
// Options are immutable once built; a group owns an ordered list of them
// plus a default key. Malformed configuration is a caller contract
// violation and is rejected at construction time.
#![allow(dead_code)]

use crate::utils::error::{Result, StartuiError};

/// A single selectable entry: key, display label and the version tag that
/// travels with selection events (meaning defined by the caller, e.g. the
/// framework version the choice binds to).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub key: String,
    pub label: String,
    pub version_tag: String,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        version_tag: impl Into<String>,
    ) -> Result<Self> {
        let key = key.into();
        let label = label.into();
        let version_tag = version_tag.into();
        if key.is_empty() || label.is_empty() || version_tag.is_empty() {
            return Err(StartuiError::Config(
                "radio option requires a non-empty key, label and version tag".to_string(),
            ));
        }
        Ok(Self {
            key,
            label,
            version_tag,
            disabled: false,
        })
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// A mutually-exclusive option group. The authoritative selection lives in
/// the form model, not here; the group only describes what can be chosen.
#[derive(Debug, Clone)]
pub struct RadioGroupConfig {
    pub id: String,
    pub title: String,
    pub options: Vec<RadioOption>,
    pub default_key: String,
    pub disabled: bool,
}

impl RadioGroupConfig {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        options: Vec<RadioOption>,
        default_key: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let title = title.into();
        let default_key = default_key.into();

        if id.is_empty() || title.is_empty() {
            return Err(StartuiError::Config(
                "radio group requires a non-empty id and title".to_string(),
            ));
        }
        if options.is_empty() {
            return Err(StartuiError::Config(format!(
                "radio group '{}' has no options",
                id
            )));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|other| other.key == option.key) {
                return Err(StartuiError::Config(format!(
                    "radio group '{}' has duplicate option key '{}'",
                    id, option.key
                )));
            }
        }
        if !options.iter().any(|option| option.key == default_key) {
            return Err(StartuiError::Config(format!(
                "radio group '{}' default key '{}' matches no option",
                id, default_key
            )));
        }

        Ok(Self {
            id,
            title,
            options,
            default_key,
            disabled: false,
        })
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn option(&self, key: &str) -> Option<&RadioOption> {
        self.options.iter().find(|option| option.key == key)
    }

    pub fn option_index(&self, key: &str) -> Option<usize> {
        self.options.iter().position(|option| option.key == key)
    }
}

/// A selection-change notification: delivered exactly once per activation,
/// after the group's own mirror has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub group_id: String,
    pub value: String,
    pub version_tag: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_creation() {
        let option = RadioOption::new("maven-project", "Maven Project", "2.1.8.RELEASE").unwrap();
        assert_eq!(option.key, "maven-project");
        assert!(!option.disabled);
    }

    #[test]
    fn test_option_rejects_empty_fields() {
        assert!(RadioOption::new("", "Maven Project", "2.1.8.RELEASE").is_err());
        assert!(RadioOption::new("maven-project", "", "2.1.8.RELEASE").is_err());
        assert!(RadioOption::new("maven-project", "Maven Project", "").is_err());
    }

    #[test]
    fn test_group_creation() {
        let group = RadioGroupConfig::new(
            "project",
            "Project",
            vec![
                RadioOption::new("maven-project", "Maven Project", "2.1.8.RELEASE").unwrap(),
                RadioOption::new("gradle-project", "Gradle Project", "2.1.8.RELEASE").unwrap(),
            ],
            "maven-project",
        )
        .unwrap();
        assert_eq!(group.options.len(), 2);
        assert_eq!(group.option_index("gradle-project"), Some(1));
        assert!(group.option("ant-project").is_none());
    }

    #[test]
    fn test_group_rejects_duplicate_keys() {
        let result = RadioGroupConfig::new(
            "project",
            "Project",
            vec![
                RadioOption::new("maven-project", "Maven Project", "a").unwrap(),
                RadioOption::new("maven-project", "Maven Again", "b").unwrap(),
            ],
            "maven-project",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_group_rejects_unknown_default() {
        let result = RadioGroupConfig::new(
            "project",
            "Project",
            vec![RadioOption::new("maven-project", "Maven Project", "a").unwrap()],
            "gradle-project",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_group_rejects_empty_options() {
        assert!(RadioGroupConfig::new("project", "Project", Vec::new(), "x").is_err());
    }
}
