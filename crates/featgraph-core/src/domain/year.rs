/// Año calendario tal como llega en las filas de entrada.
pub type Year = i32;

/// Umbral por debajo del cual un año se considera un artefacto de captura
/// (p. ej. un EP "publicado" en el año 20).
pub const MIN_VALID_YEAR: Year = 1000;

/// Predicado único de validez; se aplica antes de que un año entre en
/// el coalescedor temporal o decida la retención de nodos y aristas.
pub fn is_valid_year(year: Year) -> bool {
  year >= MIN_VALID_YEAR
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_is_inclusive() {
    assert!(is_valid_year(1000));
    assert!(is_valid_year(2021));
    assert!(!is_valid_year(999));
    assert!(!is_valid_year(20));
    assert!(!is_valid_year(0));
  }
}
