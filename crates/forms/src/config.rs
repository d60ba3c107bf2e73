//! Editor configuration resolved from defaults and the environment.

use std::env;

/// Environment variable overriding the dotted path of the category key.
pub const CATEGORY_PATH_ENV: &str = "COMPOSER_CATEGORY_PATH";
/// Environment variable overriding the name of the fallback group.
pub const DEFAULT_CATEGORY_ENV: &str = "COMPOSER_DEFAULT_CATEGORY";

pub const DEFAULT_CATEGORY_PATH: &str = "customProps.sbg:category";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Dotted path, relative to an input definition, of its category key.
    pub category_path: String,
    /// Group name used when an input has no category key.
    pub default_category: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            category_path: DEFAULT_CATEGORY_PATH.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl EditorConfig {
    /// Builds a configuration from the environment. Unset or blank variables
    /// fall back to the defaults.
    pub fn from_environment() -> Self {
        Self {
            category_path: env_or_default(CATEGORY_PATH_ENV, DEFAULT_CATEGORY_PATH),
            default_category: env_or_default(DEFAULT_CATEGORY_ENV, DEFAULT_CATEGORY),
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
