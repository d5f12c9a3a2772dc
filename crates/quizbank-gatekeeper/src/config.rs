//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum number of options a question must have
    pub min_options: usize,

    /// Maximum number of options a question may have
    pub max_options: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_options: 3,
            max_options: 5,
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_options == 0 {
            return Err("min_options must be greater than 0".to_string());
        }
        if self.min_options > self.max_options {
            return Err(format!(
                "min_options ({}) cannot exceed max_options ({})",
                self.min_options, self.max_options
            ));
        }
        Ok(())
    }

    /// Whether `count` options is within bounds
    pub fn accepts_option_count(&self, count: usize) -> bool {
        (self.min_options..=self.max_options).contains(&count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.accepts_option_count(2));
        assert!(config.accepts_option_count(3));
        assert!(config.accepts_option_count(5));
        assert!(!config.accepts_option_count(6));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let config = ValidationConfig {
            min_options: 4,
            max_options: 3,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ValidationConfig = toml::from_str("max_options = 4").unwrap();
        assert_eq!(config.min_options, 3);
        assert_eq!(config.max_options, 4);
    }
}
