use featgraph_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, PATHS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Sección `[data]`: dónde están las exportaciones y adónde se escribe.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
  /// `id,name,followers,popularity,genres`
  pub artists: PathBuf,

  /// `from,to,year`
  pub links: PathBuf,

  /// `artist_id,year:count;year:count`
  pub activity: PathBuf,

  /// Lista opcional de artistas revisados, un id por línea.
  #[serde(default)]
  pub checked: Option<PathBuf>,

  /// Directorio de salida de documentos e informes.
  pub output_dir: PathBuf,
}

impl DataConfig {
  /// Rutas por defecto con los nombres de fichero habituales bajo `data_dir`.
  pub fn under(data_dir: &Path, output_dir: PathBuf) -> Self {
    DataConfig {
      artists: data_dir.join("artists.csv"),
      links: data_dir.join("links.csv"),
      activity: data_dir.join("years_active.csv"),
      checked: None,
      output_dir,
    }
  }

  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("data")?;
    CONFIG_BACKEND.save_section("data", &cfg)?;
    Ok(cfg)
  }
}

impl Default for DataConfig {
  fn default() -> Self {
    Self::under(&PATHS.data_dir, PATHS.output_dir())
  }
}
