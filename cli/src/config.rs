use featgraph_config::{CONFIG_BACKEND, ConfigError};
use featgraph_core::CoreError;
use featgraph_core::genre::GenreRules;
use serde::Deserialize;

/// `[genre]` section: an optional ordered rule table replacing the built-in one.
///
/// ```toml
/// [genre]
/// rules = [["rap", "rap/hip hop"], ["pop", "pop"]]
/// ```
#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
pub struct GenreConfig {
  #[serde(default)]
  pub rules: Option<Vec<(String, String)>>,
}

impl GenreConfig {
  pub fn load() -> Result<Self, ConfigError> {
    CONFIG_BACKEND.load_section_with_default("genre")
  }
}

impl TryFrom<GenreConfig> for GenreRules {
  type Error = CoreError;

  fn try_from(cfg: GenreConfig) -> Result<Self, Self::Error> {
    match cfg.rules {
      Some(pairs) => GenreRules::from_pairs(pairs),
      None => Ok(GenreRules::builtin()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_rules_mean_builtin_table() {
    let rules = GenreRules::try_from(GenreConfig::default()).unwrap();
    assert_eq!(rules, GenreRules::builtin());
  }

  #[test]
  fn custom_rules_replace_the_table() {
    let cfg: GenreConfig = toml::from_str(r#"rules = [["tango", "world"], ["rap", "rap/hip hop"]]"#).unwrap();
    let rules = GenreRules::try_from(cfg).unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules.iter().next().unwrap().keyword, "tango");
  }

  #[test]
  fn unknown_category_is_rejected() {
    let cfg = GenreConfig { rules: Some(vec![("rap".to_string(), "hiphop".to_string())]) };
    assert!(GenreRules::try_from(cfg).is_err());
  }
}
