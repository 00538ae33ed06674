use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Feature flags controlling optional cosmetic behaviour.
///
/// Loaded from the `[features]` table of `config.toml`. Every field
/// defaults to `true` so that a missing or incomplete config file keeps
/// the full experience.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub dark_mode_toggle: bool,
    #[serde(default = "enabled")]
    pub scroll_reveal: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            dark_mode_toggle: true,
            scroll_reveal: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_true() {
        let flags = FeatureFlags::default();
        assert!(flags.dark_mode_toggle);
        assert!(flags.scroll_reveal);
    }

    #[test]
    fn deserialize_empty_table_defaults_all_true() {
        let flags: FeatureFlags = toml::from_str("").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_table_keeps_missing_fields() {
        let flags: FeatureFlags = toml::from_str("scroll_reveal = false").unwrap();
        assert!(!flags.scroll_reveal);
        assert!(flags.dark_mode_toggle);
    }
}
