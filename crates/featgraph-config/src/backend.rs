use crate::paths::{ConfigError, FeatgraphPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;

// toml_edit para escribir sin perder comentarios del usuario
use toml_edit::{DocumentMut, Item};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: FeatgraphPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: FeatgraphPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &FeatgraphPaths {
    &self.paths
  }

  /// Como `load_section`, pero un fichero o una sección ausentes dan
  /// `T::default()` en vez de error.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let Some(content) = featgraph_fs::read_to_string_opt(&path)? else {
      return Ok(T::default());
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = std::fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Documento actual, o uno vacío si aún no existe.
    let mut doc: DocumentMut = match featgraph_fs::read_to_string_opt(&path)? {
      Some(content) => {
        content.parse::<DocumentMut>().map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?
      }
      None => DocumentMut::new(),
    };

    // 2) La sección serializada con `toml` (serde) queda como
    //    "foo = 1\nbar = 2\n", una tabla sin cabecera.
    let section_str =
      toml::to_string(value).map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    // 3) Reemplazar solo esa sección; el resto del documento se conserva.
    doc[section] = section_item;

    featgraph_fs::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}
