use std::collections::BTreeMap;
use std::str::FromStr;

use featgraph_core::domain::{ActivityRecord, Artist, ArtistId, LinkEvent, Year};
use thiserror::Error;

/// Fila que no encaja con la forma esperada.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
  #[error("expected {expected} fields, found {found}")]
  FieldCount { expected: &'static str, found: usize },

  #[error("invalid {field}: {value:?}")]
  InvalidNumber { field: &'static str, value: String },

  #[error("{field} out of range: {value}")]
  OutOfRange { field: &'static str, value: String },

  #[error("empty {field}")]
  Empty { field: &'static str },
}

fn number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, RecordError> {
  raw.trim().parse::<T>().map_err(|_| RecordError::InvalidNumber { field, value: raw.to_string() })
}

fn id(field: &'static str, raw: &str) -> Result<ArtistId, RecordError> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Err(RecordError::Empty { field });
  }
  Ok(ArtistId::from(raw))
}

/// `id,name,followers,popularity,genre;genre;...`
///
/// El nombre puede contener comas: se toma todo lo que hay entre el id
/// y los tres últimos campos.
pub fn parse_artist_row(line: &str) -> Result<Artist, RecordError> {
  let fields: Vec<&str> = line.split(',').collect();
  let n = fields.len();
  if n < 5 {
    return Err(RecordError::FieldCount { expected: "at least 5", found: n });
  }

  let followers: u64 = number("followers", fields[n - 3])?;
  let popularity: u8 = number("popularity", fields[n - 2])?;
  if popularity > 100 {
    return Err(RecordError::OutOfRange { field: "popularity", value: popularity.to_string() });
  }

  let genre_tags =
    fields[n - 1].split(';').map(str::trim).filter(|tag| !tag.is_empty()).map(str::to_string).collect();

  Ok(Artist { id: id("id", fields[0])?, name: fields[1..n - 3].join(","), followers, popularity, genre_tags })
}

/// `from,to,year`
pub fn parse_link_row(line: &str) -> Result<LinkEvent, RecordError> {
  let fields: Vec<&str> = line.split(',').collect();
  let [from, to, year] = fields.as_slice() else {
    return Err(RecordError::FieldCount { expected: "3", found: fields.len() });
  };

  Ok(LinkEvent { from: id("from", from)?, to: id("to", to)?, year: number("year", year)? })
}

/// `artist_id,year:count;year:count;...`
///
/// Sin campo de años (o vacío) el registro queda sin años. Entradas con
/// año vacío o `0` se ignoran; cualquier otro valor no numérico es error.
pub fn parse_activity_row(line: &str) -> Result<ActivityRecord, RecordError> {
  let mut fields = line.splitn(2, ',');
  let artist_id = id("artist_id", fields.next().unwrap_or_default())?;
  let years = fields.next().unwrap_or_default().trim();

  let mut year_counts = BTreeMap::new();

  for point in years.split(';').filter(|p| !p.trim().is_empty()) {
    let (year, count) = point.split_once(':').unwrap_or((point, ""));

    if year.trim().is_empty() {
      continue;
    }
    let year: Year = number("year", year)?;
    if year == 0 {
      continue;
    }

    let count: u32 = number("release count", count)?;
    year_counts.insert(year, count);
  }

  Ok(ActivityRecord { artist_id, year_counts })
}

/// Ids de artistas revisados: una línea, un id.
pub fn parse_checked_row(line: &str) -> Result<ArtistId, RecordError> {
  id("checked id", line)
}
