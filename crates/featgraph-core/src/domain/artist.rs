use crate::domain::activity::ActivityRange;
use crate::domain::genre::GenreCategory;
use crate::domain::ids::ArtistId;
use serde::{Deserialize, Serialize};

/// Artista tal como lo entrega el cargador de registros.
///
/// Es inmutable: clasificar un artista produce un [`ClassifiedArtist`]
/// nuevo en lugar de modificar este valor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  /// Identificador del artista.
  pub id: ArtistId,

  /// Nombre visible.
  pub name: String,

  /// Número de seguidores.
  pub followers: u64,

  /// Popularidad en el rango `0..=100`.
  pub popularity: u8,

  /// Etiquetas de género libres, en el orden de la exportación.
  pub genre_tags: Vec<String>,
}

/// Artista con su categoría de género resuelta y, si hay datos de
/// actividad, el rango de años en que publicó.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedArtist {
  pub id: ArtistId,
  pub name: String,
  pub followers: u64,
  pub popularity: u8,
  pub genre: GenreCategory,
  pub activity: Option<ActivityRange>,
}

impl ClassifiedArtist {
  pub fn from_artist(artist: &Artist, genre: GenreCategory, activity: Option<ActivityRange>) -> Self {
    Self {
      id: artist.id.clone(),
      name: artist.name.clone(),
      followers: artist.followers,
      popularity: artist.popularity,
      genre,
      activity,
    }
  }

  /// `true` si el artista puede entrar en un documento dinámico.
  pub fn has_valid_activity(&self) -> bool {
    self.activity.is_some_and(|range| range.is_valid())
  }
}
