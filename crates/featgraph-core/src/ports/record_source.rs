use std::collections::HashSet;

use crate::domain::{ActivityRecord, Artist, ArtistId, LinkEvent};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("io error: {0}")]
  Io(String),

  /// Fila que no encaja con su forma esperada (campos de más o de menos,
  /// numérico no parseable).
  #[error("malformed record at {source_name}:{line}: {reason}")]
  MalformedRecord { source_name: String, line: usize, reason: String },
}

/// Port del cargador de registros.
///
/// El adapter decide formato, delimitadores y si lee en streaming; el
/// núcleo solo recibe registros ya tipados y completos en memoria.
#[async_trait::async_trait]
pub trait RecordSource: Send + Sync {
  async fn load_artists(&self) -> Result<Vec<Artist>, LoadError>;

  /// Eventos en el orden del fichero: la orientación de las aristas
  /// depende de él.
  async fn load_links(&self) -> Result<Vec<LinkEvent>, LoadError>;

  async fn load_activity(&self) -> Result<Vec<ActivityRecord>, LoadError>;

  /// Conjunto de artistas revisados, si el adapter tiene uno configurado.
  async fn load_checked(&self) -> Result<Option<HashSet<ArtistId>>, LoadError>;
}
