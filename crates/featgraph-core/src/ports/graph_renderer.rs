use crate::domain::GraphDocument;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
  #[error("format error: {0}")]
  Format(String),
}

/// Port del serializador: convierte un documento ensamblado en texto del
/// formato de intercambio. No toma decisiones sobre el contenido.
pub trait GraphRenderer {
  fn render(&self, document: &GraphDocument) -> Result<String, RenderError>;

  /// Extensión de fichero sugerida (sin punto).
  fn file_extension(&self) -> &'static str;
}
