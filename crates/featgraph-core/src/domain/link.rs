use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::ids::ArtistId;
use crate::domain::year::Year;

/// Colaboración dirigida `from -> to` registrada en un año. Puede repetirse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEvent {
  pub from: ArtistId,
  pub to: ArtistId,
  pub year: Year,
}

impl LinkEvent {
  pub fn new(from: impl Into<ArtistId>, to: impl Into<ArtistId>, year: Year) -> Self {
    Self { from: from.into(), to: to.into(), year }
  }

  pub fn is_self_loop(&self) -> bool {
    self.from == self.to
  }
}

/// Clave no ordenada de un par de artistas.
///
/// Los extremos se guardan en orden lexicográfico, así `(a, b)` y `(b, a)`
/// producen la misma clave. Ese orden solo sirve para indexar: la
/// orientación visible de la arista vive en [`CanonicalEdge`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtistPair {
  low: ArtistId,
  high: ArtistId,
}

impl ArtistPair {
  pub fn new(x: &ArtistId, y: &ArtistId) -> Self {
    if x <= y {
      Self { low: x.clone(), high: y.clone() }
    } else {
      Self { low: y.clone(), high: x.clone() }
    }
  }

  pub fn members(&self) -> (&ArtistId, &ArtistId) {
    (&self.low, &self.high)
  }
}

/// Arista no dirigida que agrupa todas las colaboraciones entre dos artistas.
///
/// `endpoint_a`/`endpoint_b` conservan la orientación del primer evento
/// visto. Es una elección arbitraria: nadie debe depender de qué extremo
/// queda como `endpoint_a`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalEdge {
  pub endpoint_a: ArtistId,
  pub endpoint_b: ArtistId,
  pub years: BTreeSet<Year>,
}

impl CanonicalEdge {
  pub fn pair(&self) -> ArtistPair {
    ArtistPair::new(&self.endpoint_a, &self.endpoint_b)
  }

  /// Versión sin historial, solo topología.
  pub fn to_static(&self) -> StaticEdge {
    StaticEdge { endpoint_a: self.endpoint_a.clone(), endpoint_b: self.endpoint_b.clone() }
  }
}

/// Arista no dirigida sin años: solo existencia.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticEdge {
  pub endpoint_a: ArtistId,
  pub endpoint_b: ArtistId,
}

impl StaticEdge {
  pub fn connects(&self, x: &ArtistId, y: &ArtistId) -> bool {
    (&self.endpoint_a == x && &self.endpoint_b == y) || (&self.endpoint_a == y && &self.endpoint_b == x)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pair_key_ignores_direction() {
    let a = ArtistId::from("a");
    let b = ArtistId::from("b");

    assert_eq!(ArtistPair::new(&a, &b), ArtistPair::new(&b, &a));
    assert_eq!(ArtistPair::new(&b, &a).members(), (&a, &b));
  }

  #[test]
  fn pair_key_does_not_collide_on_separator() {
    // "a:b" + "c" vs "a" + "b:c" colisionaban con claves concatenadas.
    let left = ArtistPair::new(&ArtistId::from("a:b"), &ArtistId::from("c"));
    let right = ArtistPair::new(&ArtistId::from("a"), &ArtistId::from("b:c"));
    assert_ne!(left, right);
  }

  #[test]
  fn edge_connects_either_orientation() {
    let edge = CanonicalEdge {
      endpoint_a: ArtistId::from("x"),
      endpoint_b: ArtistId::from("y"),
      years: BTreeSet::from([2001]),
    }
    .to_static();

    assert!(edge.connects(&ArtistId::from("y"), &ArtistId::from("x")));
    assert!(!edge.connects(&ArtistId::from("x"), &ArtistId::from("z")));
  }
}
