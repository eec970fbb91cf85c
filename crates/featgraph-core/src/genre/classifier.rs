use std::collections::HashMap;

use crate::domain::activity::ActivityRange;
use crate::domain::artist::{Artist, ClassifiedArtist};
use crate::domain::genre::GenreCategory;
use crate::genre::rules::{GenreRules, matches_whole_word};

/// Colapsa la lista de etiquetas de un artista en una sola [`GenreCategory`].
#[derive(Debug, Clone, Default)]
pub struct GenreClassifier {
  rules: GenreRules,
}

impl GenreClassifier {
  pub fn new(rules: GenreRules) -> Self {
    Self { rules }
  }

  /// Categoría de una etiqueta suelta: la última regla que coincide,
  /// u `Other` si ninguna lo hace.
  pub fn map_tag(&self, tag: &str) -> GenreCategory {
    self
      .rules
      .iter()
      .filter(|rule| matches_whole_word(tag, &rule.keyword))
      .last()
      .map_or(GenreCategory::Other, |rule| rule.category)
  }

  /// Voto por pluralidad sobre las etiquetas mapeadas.
  ///
  /// - se descartan las que caen en `Other`; si no queda ninguna → `Other`
  /// - una sola categoría distinta → esa categoría
  /// - si la más frecuente supera estrictamente a la segunda → la más frecuente
  /// - empate en el máximo → `Multi`, nunca una elección arbitraria
  pub fn classify<S: AsRef<str>>(&self, tags: &[S]) -> GenreCategory {
    let mut freq: HashMap<GenreCategory, usize> = HashMap::new();

    for tag in tags {
      let category = self.map_tag(tag.as_ref());
      if category != GenreCategory::Other {
        *freq.entry(category).or_default() += 1;
      }
    }

    if freq.is_empty() {
      return GenreCategory::Other;
    }

    if freq.len() == 1 {
      return freq.into_keys().next().unwrap_or(GenreCategory::Other);
    }

    let mut ranked: Vec<(GenreCategory, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    if ranked[0].1 > ranked[1].1 { ranked[0].0 } else { GenreCategory::Multi }
  }

  /// Deriva el registro clasificado; el artista original no se toca.
  pub fn classify_artist(&self, artist: &Artist, activity: Option<ActivityRange>) -> ClassifiedArtist {
    ClassifiedArtist::from_artist(artist, self.classify(&artist.genre_tags), activity)
  }
}
