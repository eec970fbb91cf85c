// crates/featgraph-core/src/errors.rs
use thiserror::Error;

/// Error genérico del núcleo de featgraph.
///
/// Solo la carga de registros puede fallar: años centinela, referencias
/// colgantes y empates de género se resuelven dentro del pipeline y nunca
/// llegan aquí.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("load error: {0}")]
  Load(String),

  #[error("render error: {0}")]
  Render(String),

  #[error("invalid genre rule: {0}")]
  InvalidRule(String),
}
