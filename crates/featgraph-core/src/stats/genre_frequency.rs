use std::collections::HashMap;

use serde::Serialize;

use crate::domain::artist::ClassifiedArtist;
use crate::domain::genre::GenreCategory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
  pub genre: GenreCategory,
  pub count: usize,
}

/// Artistas por categoría, de mayor a menor. Los empates siguen el orden
/// de declaración de [`GenreCategory`].
pub fn genre_frequency(artists: &[ClassifiedArtist]) -> Vec<GenreCount> {
  let mut freq: HashMap<GenreCategory, usize> = HashMap::new();
  for artist in artists {
    *freq.entry(artist.genre).or_default() += 1;
  }

  let mut counts: Vec<GenreCount> = freq.into_iter().map(|(genre, count)| GenreCount { genre, count }).collect();
  counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.genre.cmp(&b.genre)));
  counts
}
