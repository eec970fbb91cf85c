use serde::{Deserialize, Serialize};

use crate::domain::artist::ClassifiedArtist;
use crate::domain::link::StaticEdge;
use crate::domain::spell::Spell;

/// Variante del documento de grafo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphMode {
  /// Solo topología, sin atributos temporales.
  Static,
  /// Nodos con rango de actividad y aristas con spells.
  Dynamic,
}

impl GraphMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      GraphMode::Static => "static",
      GraphMode::Dynamic => "dynamic",
    }
  }
}

/// Arista ensamblada. Solo topología; el historial temporal, ya sin años
/// centinela, va en `spells` y únicamente en documentos dinámicos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
  pub edge: StaticEdge,
  pub spells: Option<Vec<Spell>>,
}

/// Documento de grafo listo para el serializador. Se construye una vez
/// y solo se lee después.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
  pub mode: GraphMode,
  pub nodes: Vec<ClassifiedArtist>,
  pub edges: Vec<GraphEdge>,
}

impl GraphDocument {
  pub fn node(&self, id: &str) -> Option<&ClassifiedArtist> {
    self.nodes.iter().find(|n| n.id.as_str() == id)
  }

  pub fn has_edge_between(&self, x: &str, y: &str) -> bool {
    self.edges.iter().any(|e| e.edge.connects(&x.into(), &y.into()))
  }
}
