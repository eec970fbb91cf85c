use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::ids::ArtistId;
use crate::domain::year::{Year, is_valid_year};

/// Lanzamientos por año de un artista (`year -> count`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
  pub artist_id: ArtistId,
  pub year_counts: BTreeMap<Year, u32>,
}

impl ActivityRecord {
  pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
    self.year_counts.keys().copied()
  }

  /// Suma de lanzamientos en todos los años, centinelas incluidos.
  pub fn total_releases(&self) -> u64 {
    self.year_counts.values().map(|&c| u64::from(c)).sum()
  }
}

/// Envolvente `[first, last]` de la actividad de un artista.
///
/// Se calcula sobre los años crudos; un `first` centinela (< 1000) marca
/// el rango como inválido en vez de recortarlo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRange {
  pub first: Year,
  pub last: Year,
}

impl ActivityRange {
  pub fn is_valid(&self) -> bool {
    is_valid_year(self.first)
  }
}
