use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::year::Year;

/// Intervalo cerrado y contiguo de años activos (`start..=end`).
///
/// Una secuencia de `Spell` de un mismo sujeto está ordenada, sin solapes
/// y sin intervalos adyacentes: el coalescedor ya fusionó todo lo fusionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Spell {
  start: Year,
  end: Year,
}

impl Spell {
  /// Devuelve `None` si `start > end`.
  pub fn new(start: Year, end: Year) -> Option<Self> {
    if start > end {
      return None;
    }
    Some(Self { start, end })
  }

  pub fn single(year: Year) -> Self {
    Self { start: year, end: year }
  }

  pub fn start(&self) -> Year {
    self.start
  }

  pub fn end(&self) -> Year {
    self.end
  }

  pub fn years(&self) -> impl DoubleEndedIterator<Item = Year> {
    self.start..=self.end
  }

  pub(crate) fn extend_to(&mut self, year: Year) {
    debug_assert!(year >= self.end);
    self.end = year;
  }
}

impl fmt::Display for Spell {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}-{}]", self.start, self.end)
  }
}
