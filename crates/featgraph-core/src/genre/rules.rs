use crate::domain::genre::GenreCategory;
use crate::errors::CoreError;

/// Regla `keyword -> category` de la tabla de agrupación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRule {
  pub keyword: String,
  pub category: GenreCategory,
}

/// Tabla ordenada e inmutable de reglas.
///
/// El orden importa: cada etiqueta se compara contra todas las reglas y
/// la **última** que coincide gana. Así `"k-pop"` acaba en `pop` aunque
/// exista la regla `k-pop -> world` antes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreRules {
  rules: Vec<GenreRule>,
}

use GenreCategory::*;

const BUILTIN: &[(&str, GenreCategory)] = &[
  ("bollywood", World),
  ("filmi", World),
  ("latino", World),
  ("mexicana", World),
  ("norteno", World),
  ("corrido", World),
  ("banda", World),
  ("salsa", World),
  ("sierreno", World),
  ("afrobeats", World),
  ("afropop", World),
  ("reggaeton", World),
  ("reggae", World),
  ("dancetronica", World),
  ("dancehall", World),
  ("ccm", World),
  ("gospel", World),
  ("chior", World),
  ("worship", World),
  ("k-pop", World),
  ("k-rap", World),
  ("v-pop", World),
  ("environmental", World),
  ("bhangra", World),
  ("cubaton", World),
  ("mollywood", World),
  ("viet", World),
  ("classical", Classical),
  ("orchestral", Classical),
  ("orchestra", Classical),
  ("opera", Classical),
  ("quartet", Classical),
  ("baroque", Classical),
  ("jazz", JazzLofi),
  ("chill", JazzLofi),
  ("lofi", JazzLofi),
  ("lo-fi", JazzLofi),
  ("downtempo", JazzLofi),
  ("rap", RapHipHop),
  ("trap", RapHipHop),
  ("hip hop", RapHipHop),
  ("boom bap", RapHipHop),
  ("drill", RapHipHop),
  ("urban", UrbanSoul),
  ("soul", UrbanSoul),
  ("r&b", UrbanSoul),
  ("funk", UrbanSoul),
  ("singer-songwriter", UrbanSoul),
  ("rock", Rock),
  ("metal", Rock),
  ("punk", Rock),
  ("mellow gold", Rock),
  ("country", CountryTraditional),
  ("folk", CountryTraditional),
  ("alternative", Alternative),
  ("experimental", Alternative),
  ("indietronica", Alternative),
  ("indie", Alternative),
  ("alt", Alternative),
  ("house", HouseElectronic),
  ("electronic", HouseElectronic),
  ("dubstep", HouseElectronic),
  ("trance", HouseElectronic),
  ("edm", HouseElectronic),
  ("techno", HouseElectronic),
  ("brostep", HouseElectronic),
  ("sky room", HouseElectronic),
  ("grime", HouseElectronic),
  ("dance", HouseElectronic),
  ("electronica", HouseElectronic),
  ("hardstyle", HouseElectronic),
  ("hardcore", HouseElectronic),
  ("disco", HouseElectronic),
  ("electro", HouseElectronic),
  ("electropop", HouseElectronic),
  ("bass", HouseElectronic),
  ("dnb", HouseElectronic),
  ("unknown", Unknown),
  ("movie", Theater),
  ("broadway", Theater),
  ("soundtrack", Theater),
  ("show", Theater),
  ("hollywood", Theater),
  // Reconocida, pero sin categoría propia.
  ("historically informed performance", Other),
  ("pop", Pop),
  ("metropopolis", Pop),
];

impl GenreRules {
  pub fn new(rules: Vec<GenreRule>) -> Self {
    Self { rules }
  }

  /// Tabla por defecto.
  pub fn builtin() -> Self {
    Self::new(
      BUILTIN
        .iter()
        .map(|&(keyword, category)| GenreRule { keyword: keyword.to_string(), category })
        .collect(),
    )
  }

  /// Construye la tabla desde pares `(keyword, categoría)` en texto,
  /// p. ej. los leídos de la configuración. Falla con la primera
  /// categoría desconocida o palabra clave vacía.
  pub fn from_pairs<I, K, C>(pairs: I) -> Result<Self, CoreError>
  where
    I: IntoIterator<Item = (K, C)>,
    K: Into<String>,
    C: AsRef<str>,
  {
    let mut rules = Vec::new();

    for (keyword, category) in pairs {
      let keyword = keyword.into();
      if keyword.is_empty() {
        return Err(CoreError::InvalidRule("empty keyword".to_string()));
      }

      let category =
        category.as_ref().parse::<GenreCategory>().map_err(|e| CoreError::InvalidRule(format!("{keyword}: {e}")))?;

      rules.push(GenreRule { keyword, category });
    }

    Ok(Self::new(rules))
  }

  pub fn iter(&self) -> impl Iterator<Item = &GenreRule> {
    self.rules.iter()
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }
}

impl Default for GenreRules {
  fn default() -> Self {
    Self::builtin()
  }
}

/// Coincidencia de "palabra completa" permisiva: igualdad exacta, o la
/// palabra precedida/seguida de un espacio o de un guion.
///
/// `"trap"` coincide con `trap`, `"dirty south rap"` con `rap`, pero
/// `"trapeze"` no coincide con `rap`.
pub fn matches_whole_word(tag: &str, keyword: &str) -> bool {
  tag == keyword
    || tag.contains(&format!(" {keyword}"))
    || tag.contains(&format!("{keyword} "))
    || tag.contains(&format!("-{keyword}"))
    || tag.contains(&format!("{keyword}-"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn whole_word_boundaries() {
    assert!(matches_whole_word("trap", "trap"));
    assert!(matches_whole_word("dirty south rap", "rap"));
    assert!(matches_whole_word("rap latina", "rap"));
    assert!(matches_whole_word("k-rap", "rap"));
    assert!(matches_whole_word("rap-metal", "rap"));
    assert!(!matches_whole_word("trapeze", "rap"));
    assert!(!matches_whole_word("rapcore", "rap"));
  }

  #[test]
  fn builtin_table_keeps_declared_order() {
    let rules = GenreRules::builtin();
    let first = rules.iter().next().unwrap();
    let last = rules.iter().last().unwrap();

    assert_eq!(first.keyword, "bollywood");
    assert_eq!(last.keyword, "metropopolis");
    assert_eq!(rules.len(), BUILTIN.len());
  }

  #[test]
  fn from_pairs_parses_categories() {
    let rules = GenreRules::from_pairs([("rap", "rap/hip hop"), ("tango", "World")]).unwrap();
    let categories: Vec<_> = rules.iter().map(|r| r.category).collect();

    assert_eq!(categories, vec![GenreCategory::RapHipHop, GenreCategory::World]);
  }

  #[test]
  fn from_pairs_rejects_unknown_category_and_empty_keyword() {
    assert!(matches!(GenreRules::from_pairs([("rap", "hiphop")]), Err(CoreError::InvalidRule(_))));
    assert!(matches!(GenreRules::from_pairs([("", "pop")]), Err(CoreError::InvalidRule(_))));
  }
}
