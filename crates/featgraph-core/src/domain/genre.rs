use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Categoría gruesa de género a la que se colapsan las etiquetas libres
/// de un artista.
///
/// Es un conjunto cerrado. [`GenreCategory::Other`] y [`GenreCategory::Multi`]
/// son centinelas: "sin género reconocible" y "empate entre géneros".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GenreCategory {
  World,
  Classical,
  JazzLofi,
  RapHipHop,
  UrbanSoul,
  Rock,
  CountryTraditional,
  Alternative,
  HouseElectronic,
  Pop,
  Theater,
  Unknown,
  Other,
  Multi,
}

impl GenreCategory {
  pub const ALL: [GenreCategory; 14] = [
    GenreCategory::World,
    GenreCategory::Classical,
    GenreCategory::JazzLofi,
    GenreCategory::RapHipHop,
    GenreCategory::UrbanSoul,
    GenreCategory::Rock,
    GenreCategory::CountryTraditional,
    GenreCategory::Alternative,
    GenreCategory::HouseElectronic,
    GenreCategory::Pop,
    GenreCategory::Theater,
    GenreCategory::Unknown,
    GenreCategory::Other,
    GenreCategory::Multi,
  ];

  /// Etiqueta canónica, la misma que se escribe en los informes y en GEXF.
  pub fn label(&self) -> &'static str {
    match self {
      GenreCategory::World => "world",
      GenreCategory::Classical => "classical",
      GenreCategory::JazzLofi => "jazz/lofi",
      GenreCategory::RapHipHop => "rap/hip hop",
      GenreCategory::UrbanSoul => "urban/soul",
      GenreCategory::Rock => "rock",
      GenreCategory::CountryTraditional => "country/traditional",
      GenreCategory::Alternative => "alternative",
      GenreCategory::HouseElectronic => "house/electronic",
      GenreCategory::Pop => "pop",
      GenreCategory::Theater => "theater",
      GenreCategory::Unknown => "unknown",
      GenreCategory::Other => "other",
      GenreCategory::Multi => "multi",
    }
  }

  pub fn is_sentinel(&self) -> bool {
    matches!(self, GenreCategory::Other | GenreCategory::Multi)
  }
}

impl fmt::Display for GenreCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Error producido cuando una cadena no puede convertirse en [`GenreCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid genre category: {input}")]
pub struct GenreParseError {
  pub input: String,
}

impl FromStr for GenreCategory {
  type Err = GenreParseError;

  /// Acepta la etiqueta canónica sin distinguir mayúsculas ni espacios
  /// alrededor (`"Rap/Hip Hop"`, `" house/electronic "`).
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized = s.trim().to_lowercase();

    GenreCategory::ALL
      .into_iter()
      .find(|c| c.label() == normalized)
      .ok_or_else(|| GenreParseError { input: s.to_string() })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn labels_parse_back() {
    for category in GenreCategory::ALL {
      assert_eq!(category.label().parse::<GenreCategory>(), Ok(category));
    }
  }

  #[test]
  fn parse_is_lenient_on_case_and_padding() {
    assert_eq!(" Rap/Hip Hop ".parse::<GenreCategory>(), Ok(GenreCategory::RapHipHop));
    assert!("hip hop".parse::<GenreCategory>().is_err());
  }

  #[test]
  fn only_other_and_multi_are_sentinels() {
    let sentinels: Vec<_> = GenreCategory::ALL.into_iter().filter(|c| c.is_sentinel()).collect();
    assert_eq!(sentinels, vec![GenreCategory::Other, GenreCategory::Multi]);
  }
}
