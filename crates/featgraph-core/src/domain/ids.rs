use serde::{Deserialize, Serialize};
use std::fmt;

/// Identificador de artista tal como aparece en las exportaciones
/// (p. ej. el id de Spotify). Es opaco: no se valida su formato.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtistId(String);

impl ArtistId {
  pub fn new(id: impl Into<String>) -> Self {
    ArtistId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ArtistId {
  fn from(s: &str) -> Self {
    ArtistId(s.to_string())
  }
}

impl From<String> for ArtistId {
  fn from(s: String) -> Self {
    ArtistId(s)
  }
}

impl AsRef<str> for ArtistId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
