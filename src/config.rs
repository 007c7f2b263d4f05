use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BookError, BookResult};
use crate::model::BirthdayRule;

pub const DEFAULT_CONFIG_FILE: &str = "addrbook.toml";
pub const DEFAULT_DATA_FILE: &str = ".data/address_book.json";

pub const ENV_CONFIG: &str = "ADDRBOOK_CONFIG";
pub const ENV_FILE: &str = "ADDRBOOK_FILE";
pub const ENV_LOG: &str = "ADDRBOOK_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_level: String,
    pub birthday_rule: BirthdayRule,
    pub default_window_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "warn".into(),
            birthday_rule: BirthdayRule::Literal,
            default_window_days: 7,
        }
    }
}

impl AppConfig {
    /// Resolves the configuration file and environment overrides.
    ///
    /// `explicit` (from the command line) wins over `ADDRBOOK_CONFIG`, which
    /// wins over `addrbook.toml` in the working directory. Only the implicit
    /// default file may be absent.
    pub fn load(explicit: Option<&Path>) -> BookResult<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(ENV_CONFIG).map(PathBuf::from));

        let mut config = match named {
            Some(path) => Self::from_file(&path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_overrides(env::var(ENV_FILE).ok(), env::var(ENV_LOG).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> BookResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BookError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> BookResult<Self> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| BookError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `ADDRBOOK_FILE` / `ADDRBOOK_LOG` style overrides. Blank values are ignored.
    pub fn apply_overrides(&mut self, data_file: Option<String>, log_level: Option<String>) {
        if let Some(file) = data_file.filter(|s| !s.trim().is_empty()) {
            self.data_file = PathBuf::from(file.trim());
        }
        if let Some(level) = log_level.filter(|s| !s.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
    }

    fn validate(&self) -> BookResult<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(BookError::Config("data_file cannot be empty".into()));
        }
        if self.default_window_days < 0 {
            return Err(BookError::Config(
                "default_window_days cannot be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let config = AppConfig::from_toml(
            r#"
            data_file = "/tmp/book.db"
            log_level = "debug"
            birthday_rule = "next-occurrence"
            default_window_days = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/book.db"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.birthday_rule, BirthdayRule::NextOccurrence);
        assert_eq!(config.default_window_days, 30);
    }

    #[test]
    fn birthday_rule_accepts_same_spellings_as_command_line() {
        for spelling in ["next-occurrence", "next_occurrence", "next", "Next-Occurrence"] {
            let config = AppConfig::from_toml(&format!("birthday_rule = \"{}\"", spelling)).unwrap();
            assert_eq!(config.birthday_rule, BirthdayRule::NextOccurrence);
            assert_eq!(BirthdayRule::from_config_str(spelling), Some(BirthdayRule::NextOccurrence));
        }
    }

    #[test]
    fn rejects_unknown_birthday_rule() {
        assert!(AppConfig::from_toml(r#"birthday_rule = "sometimes""#).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(AppConfig::from_toml(r#"colour = "blue""#).is_err());
    }

    #[test]
    fn rejects_negative_window() {
        assert!(AppConfig::from_toml("default_window_days = -1").is_err());
    }

    #[test]
    fn overrides_replace_file_and_level() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("other.json".into()), Some("info".into()));
        assert_eq!(config.data_file, PathBuf::from("other.json"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("  ".into()), None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::from_file(Path::new("/definitely/not/here/addrbook.toml"));
        assert!(matches!(result, Err(BookError::Config(_))));
    }
}
