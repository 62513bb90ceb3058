use serde::{Deserialize, Serialize};

/// Configuration for the calculator module
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Path prefix every operation route is nested under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
        }
    }
}

impl CalculatorConfig {
    /// Check that `base_path` can be used as a nesting prefix.
    ///
    /// # Errors
    /// Returns an error if the path is not absolute, is the root, or has a trailing slash.
    pub fn validate(&self) -> anyhow::Result<()> {
        let path = self.base_path.as_str();
        if !path.starts_with('/') {
            anyhow::bail!("calculator base_path must start with '/': {path}");
        }
        if path == "/" || path.ends_with('/') {
            anyhow::bail!("calculator base_path must not be the root or end with '/': {path}");
        }
        Ok(())
    }
}

fn default_base_path() -> String {
    "/api/calc".to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_path_is_valid() {
        let cfg = CalculatorConfig::default();
        assert_eq!(cfg.base_path, "/api/calc");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_unusable_base_paths() {
        for path in ["api/calc", "/", "/api/calc/"] {
            let cfg = CalculatorConfig {
                base_path: path.to_owned(),
            };
            assert!(cfg.validate().is_err(), "{path} should be rejected");
        }
    }
}
