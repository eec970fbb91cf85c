use featgraph_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};

/// Sección `[gexf]`: metadatos que acompañan al documento.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GexfConfig {
  #[serde(default = "default_creator")]
  pub creator: String,

  #[serde(default = "default_description")]
  pub description: String,
}

fn default_creator() -> String {
  "featgraph".to_string()
}

fn default_description() -> String {
  "Artist collaboration network".to_string()
}

impl Default for GexfConfig {
  fn default() -> Self {
    GexfConfig { creator: default_creator(), description: default_description() }
  }
}

impl GexfConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("gexf")?;
    CONFIG_BACKEND.save_section("gexf", &cfg)?;
    Ok(cfg)
  }
}
