use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que reubica todos los directorios bajo una base.
pub const BASE_DIR_ENV: &str = "FEATGRAPH_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct FeatgraphPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
  /// Exportaciones de entrada (`artists.csv`, `links.csv`, ...).
  pub data_dir: PathBuf,
}

impl FeatgraphPaths {
  pub fn new() -> Result<Self, ConfigError> {
    let (config_dir, data_dir, base_dir);

    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      let base = PathBuf::from(env_base);
      base_dir = base.clone();
      config_dir = base.join("config");
      data_dir = base.join("data");
    } else {
      let proj_dirs = ProjectDirs::from("com", "featgraph", "featgraph").ok_or(ConfigError::Directories)?;
      base_dir = proj_dirs.config_dir().to_path_buf();
      config_dir = proj_dirs.config_dir().to_path_buf();
      data_dir = proj_dirs.data_dir().to_path_buf();
    }

    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(&data_dir)?;

    Ok(Self { base_dir, config_dir, data_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  /// Paths fijos bajo `base`, sin mirar el entorno. Útil para tests.
  pub fn under(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base_dir = base.into();
    let paths = Self {
      config_dir: base_dir.join("config"),
      data_dir: base_dir.join("data"),
      base_dir,
    };

    std::fs::create_dir_all(&paths.config_dir)?;
    std::fs::create_dir_all(&paths.data_dir)?;

    Ok(paths)
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("featgraph.toml")
  }

  /// Directorio por defecto de los ficheros generados.
  pub fn output_dir(&self) -> PathBuf {
    self.data_dir.join("out")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_featgraph_base_dir_override() {
    let tmp = tempdir().unwrap();
    let _env = EnvVarGuard::new(BASE_DIR_ENV, tmp.path().to_str().unwrap());

    let paths = FeatgraphPaths::new().unwrap();

    assert_eq!(paths.base_dir, tmp.path());
    assert_eq!(paths.config_dir, tmp.path().join("config"));
    assert_eq!(paths.data_dir, tmp.path().join("data"));

    assert!(paths.config_dir.exists());
    assert!(paths.data_dir.exists());
  }

  #[test]
  fn under_ignores_environment() {
    let tmp = tempdir().unwrap();
    let paths = FeatgraphPaths::under(tmp.path()).unwrap();

    assert_eq!(paths.config_file(), tmp.path().join("config").join("featgraph.toml"));
    assert_eq!(paths.output_dir(), tmp.path().join("data").join("out"));
  }
}
