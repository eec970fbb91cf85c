//! Informes derivados del mismo conjunto de datos que el grafo.

pub mod genre_frequency;
pub mod link_stats;
pub mod releases;

pub use genre_frequency::{GenreCount, genre_frequency};
pub use link_stats::{YearLinkStats, year_link_stats};
pub use releases::{ReleaseCount, top_releases};

/// Redondeo a dos decimales, como se exportan las medias.
pub(crate) fn round2(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}
