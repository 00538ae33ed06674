use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AppError, FeatureFlags};

/// Institution branding shown in the header, hero and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Branding {
    pub name: String,
    pub institution: String,
    pub tagline: String,
    pub contact_email: String,
    pub address_lines: Vec<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "Amrita Counselling".into(),
            institution: "Amrita University".into(),
            tagline: "AI-Powered Counselling Management for Academic Success".into(),
            contact_email: "contact@amrita.edu".into(),
            address_lines: vec![
                "Amrita University".into(),
                "Amritapuri, Kollam".into(),
                "Kerala, India".into(),
            ],
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub app: Branding,
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, AppError> {
        toml::from_str(source).map_err(|e| {
            AppError::validation(format!("Invalid config.toml: {}", e.message()), HashMap::new())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_branding_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [app]
            contact_email = "help@example.edu"
            "#,
        )
        .unwrap();
        assert_eq!(config.app.contact_email, "help@example.edu");
        assert_eq!(config.app.name, Branding::default().name);
        assert!(config.features.dark_mode_toggle);
    }

    #[test]
    fn full_file() {
        let config = AppConfig::from_toml_str(
            r#"
            [app]
            name = "Campus Care"
            institution = "Example Institute"
            tagline = "Help when you need it"
            contact_email = "care@example.edu"
            address_lines = ["Block A", "Example City"]

            [features]
            dark_mode_toggle = false
            scroll_reveal = false
            "#,
        )
        .unwrap();
        assert_eq!(config.app.name, "Campus Care");
        assert_eq!(config.app.address_lines, vec!["Block A", "Example City"]);
        assert!(!config.features.dark_mode_toggle);
        assert!(!config.features.scroll_reveal);
    }

    #[test]
    fn wrong_type_is_a_validation_error() {
        let err = AppConfig::from_toml_str("[features]\nscroll_reveal = \"yes\"").unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::ValidationError);
        assert!(err.message.starts_with("Invalid config.toml"));
    }

    #[test]
    fn workspace_config_parses() {
        let config = AppConfig::from_toml_str(include_str!("../../../config.toml")).unwrap();
        assert_eq!(config.app.address_lines.len(), 3);
    }
}
