//! Engine configuration shared by the catalog and the query runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Let `CREATE_TABLE` overwrite an existing table instead of failing
    /// with `AlreadyExists`.
    pub replace_existing_tables: bool,

    /// Fail a query join step when two source columns land on the same
    /// output name. Operators called directly never check.
    pub reject_column_collisions: bool,
}

impl EngineConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `RELQ_REPLACE_EXISTING_TABLES`: `true`/`false`
    /// - `RELQ_REJECT_COLUMN_COLLISIONS`: `true`/`false`
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("RELQ_REPLACE_EXISTING_TABLES") {
            if let Some(v) = parse_flag(&s) {
                cfg.replace_existing_tables = v;
            }
        }

        if let Ok(s) = std::env::var("RELQ_REJECT_COLUMN_COLLISIONS") {
            if let Some(v) = parse_flag(&s) {
                cfg.reject_column_collisions = v;
            }
        }

        cfg
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_defaults_are_strict_about_recreation() {
        let cfg = EngineConfig::default();
        assert!(!cfg.replace_existing_tables);
        assert!(!cfg.reject_column_collisions);
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn test_from_env_reads_flags() {
        std::env::set_var("RELQ_REPLACE_EXISTING_TABLES", "yes");
        std::env::set_var("RELQ_REJECT_COLUMN_COLLISIONS", "1");
        let cfg = EngineConfig::from_env();
        assert!(cfg.replace_existing_tables);
        assert!(cfg.reject_column_collisions);

        std::env::set_var("RELQ_REPLACE_EXISTING_TABLES", "sometimes");
        std::env::set_var("RELQ_REJECT_COLUMN_COLLISIONS", "off");
        let cfg = EngineConfig::from_env();
        assert!(!cfg.replace_existing_tables);
        assert!(!cfg.reject_column_collisions);

        std::env::remove_var("RELQ_REPLACE_EXISTING_TABLES");
        std::env::remove_var("RELQ_REJECT_COLUMN_COLLISIONS");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());
    }
}
