use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_PREVIEW_ROWS, DIRECTION_KEYWORDS, ENV_PREFIX, SPEED_KEYWORDS,
};

/// Tunables for column resolution and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnalysisSettings {
    #[validate(length(min = 1))]
    pub direction_keywords: Vec<String>,

    #[validate(length(min = 1))]
    pub speed_keywords: Vec<String>,

    pub preview_rows: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            direction_keywords: DIRECTION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            speed_keywords: SPEED_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl AnalysisSettings {
    /// Layer an optional settings file and `WINDROSE_*` environment
    /// variables over the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_environment(path, environment())
    }

    fn load_with_environment(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(environment);

        let settings: AnalysisSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        tracing::debug!(?settings, "Loaded analysis settings");
        Ok(settings)
    }
}

/// `WINDROSE_*` variables; keyword lists are comma separated.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("direction_keywords")
        .with_list_parse_key("speed_keywords")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults_match_heuristics() {
        let settings = AnalysisSettings::default();
        assert_eq!(settings.direction_keywords, vec!["dir", "dirección", "direccion"]);
        assert_eq!(settings.speed_keywords, vec!["vel", "speed", "velocidad"]);
        assert_eq!(settings.preview_rows, 10);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "speed_keywords = [\"wspd\", \"knots\"]")?;
        writeln!(file, "preview_rows = 3")?;

        let settings = AnalysisSettings::load(Some(file.path()))?;

        assert_eq!(settings.speed_keywords, vec!["wspd", "knots"]);
        assert_eq!(settings.direction_keywords, vec!["dir", "dirección", "direccion"]);
        assert_eq!(settings.preview_rows, 3);
        Ok(())
    }

    fn environment_from(vars: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(source))
    }

    #[test]
    fn test_load_from_environment() -> Result<()> {
        let env = environment_from(&[
            ("WINDROSE_SPEED_KEYWORDS", "wspd,knots"),
            ("WINDROSE_DIRECTION_KEYWORDS", "bearing"),
            ("WINDROSE_PREVIEW_ROWS", "25"),
        ]);

        let settings = AnalysisSettings::load_with_environment(None, env)?;

        assert_eq!(settings.speed_keywords, vec!["wspd", "knots"]);
        assert_eq!(settings.direction_keywords, vec!["bearing"]);
        assert_eq!(settings.preview_rows, 25);
        Ok(())
    }

    #[test]
    fn test_environment_overrides_file() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "preview_rows = 3")?;
        writeln!(file, "speed_keywords = [\"wspd\"]")?;

        let env = environment_from(&[("WINDROSE_PREVIEW_ROWS", "7")]);
        let settings = AnalysisSettings::load_with_environment(Some(file.path()), env)?;

        assert_eq!(settings.preview_rows, 7);
        assert_eq!(settings.speed_keywords, vec!["wspd"]);
        Ok(())
    }

    #[test]
    fn test_empty_keyword_list_rejected() -> Result<()> {
        let mut file = Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "direction_keywords = []")?;

        let result = AnalysisSettings::load(Some(file.path()));
        assert!(result.is_err());
        Ok(())
    }
}
