use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use futures::StreamExt;
use tracing::{debug, info, warn};

use featgraph_core::domain::{ActivityRecord, Artist, ArtistId, LinkEvent};
use featgraph_core::ports::{LoadError, RecordSource};
use featgraph_fs::{FsError, LineConfig, read_lines};

use crate::config::DataConfig;
use crate::records::{RecordError, parse_activity_row, parse_artist_row, parse_checked_row, parse_link_row};

/// Implementación de `RecordSource` sobre las exportaciones CSV.
///
/// Lee cada fichero en streaming, línea a línea; la primera fila mal
/// formada corta la carga con [`LoadError::MalformedRecord`].
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
  config: DataConfig,
}

impl CsvRecordSource {
  pub fn new(config: DataConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &DataConfig {
    &self.config
  }
}

async fn load_rows<T>(
  path: &Path,
  cfg: LineConfig,
  parse: fn(&str) -> Result<T, RecordError>,
) -> Result<Vec<T>, LoadError> {
  let lines = read_lines(path, cfg);
  tokio::pin!(lines);

  let mut rows = Vec::new();

  while let Some(line) = lines.next().await {
    let line = line.map_err(map_fs_error)?;

    let row = parse(&line.text).map_err(|e| LoadError::MalformedRecord {
      source_name: path.display().to_string(),
      line: line.number,
      reason: e.to_string(),
    })?;

    rows.push(row);
  }

  debug!(path = %path.display(), rows = rows.len(), "rows loaded");
  Ok(rows)
}

fn map_fs_error(err: FsError) -> LoadError {
  LoadError::Io(err.to_string())
}

#[async_trait]
impl RecordSource for CsvRecordSource {
  async fn load_artists(&self) -> Result<Vec<Artist>, LoadError> {
    let rows = load_rows(&self.config.artists, LineConfig::default(), parse_artist_row).await?;

    // Primera aparición gana.
    let mut seen = HashSet::new();
    let before = rows.len();
    let artists: Vec<Artist> = rows.into_iter().filter(|a| seen.insert(a.id.clone())).collect();

    let duplicates = before - artists.len();
    if duplicates > 0 {
      warn!(duplicates, "duplicate artist rows skipped");
    }

    Ok(artists)
  }

  async fn load_links(&self) -> Result<Vec<LinkEvent>, LoadError> {
    load_rows(&self.config.links, LineConfig::default(), parse_link_row).await
  }

  async fn load_activity(&self) -> Result<Vec<ActivityRecord>, LoadError> {
    load_rows(&self.config.activity, LineConfig::default(), parse_activity_row).await
  }

  async fn load_checked(&self) -> Result<Option<HashSet<ArtistId>>, LoadError> {
    let Some(path) = &self.config.checked else {
      return Ok(None);
    };

    let cfg = LineConfig { skip_header: false, skip_blank: true };
    let ids: HashSet<ArtistId> = load_rows(path, cfg, parse_checked_row).await?.into_iter().collect();

    info!(checked = ids.len(), "checked artist list loaded");
    Ok(Some(ids))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use tempfile::{TempDir, tempdir};

  fn fixture(checked: bool) -> (TempDir, CsvRecordSource) {
    let tmp = tempdir().unwrap();
    let dir = tmp.path();

    fs::write(
      dir.join("artists.csv"),
      "id,name,followers,popularity,genres\n\
       a,Alpha,10,50,rap;trap\n\
       b,Beta,20,60,\n\
       a,Alpha again,30,70,pop\n",
    )
    .unwrap();
    fs::write(dir.join("links.csv"), "from,to,year\na,b,2001\nb,a,2002\n\n").unwrap();
    fs::write(dir.join("years_active.csv"), "id,years\na,2001:1;2002:2\nb,\n").unwrap();
    fs::write(dir.join("checked.txt"), "a\n\n").unwrap();

    let mut config = DataConfig::under(dir, dir.join("out"));
    if checked {
      config.checked = Some(dir.join("checked.txt"));
    }

    (tmp, CsvRecordSource::new(config))
  }

  #[tokio::test]
  async fn loads_all_three_exports() {
    let (_tmp, source) = fixture(false);

    let artists = source.load_artists().await.unwrap();
    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].name, "Alpha");

    let links = source.load_links().await.unwrap();
    assert_eq!(links, vec![LinkEvent::new("a", "b", 2001), LinkEvent::new("b", "a", 2002)]);

    let activity = source.load_activity().await.unwrap();
    assert_eq!(activity.len(), 2);
    assert_eq!(activity[0].total_releases(), 3);
    assert!(activity[1].year_counts.is_empty());

    assert_eq!(source.load_checked().await.unwrap(), None);
  }

  #[tokio::test]
  async fn checked_list_has_no_header() {
    let (_tmp, source) = fixture(true);
    let checked = source.load_checked().await.unwrap().unwrap();

    assert_eq!(checked, HashSet::from([ArtistId::from("a")]));
  }

  #[tokio::test]
  async fn malformed_row_reports_file_and_line() {
    let (tmp, source) = fixture(false);
    fs::write(tmp.path().join("links.csv"), "from,to,year\na,b,2001\na,b,soon\n").unwrap();

    let err = source.load_links().await.unwrap_err();
    match err {
      LoadError::MalformedRecord { source_name, line, reason } => {
        assert!(source_name.ends_with("links.csv"));
        assert_eq!(line, 3);
        assert!(reason.contains("year"));
      }
      other => panic!("unexpected error: {other}"),
    }
  }

  #[tokio::test]
  async fn missing_file_is_an_io_error() {
    let (tmp, source) = fixture(false);
    fs::remove_file(tmp.path().join("years_active.csv")).unwrap();

    assert!(matches!(source.load_activity().await, Err(LoadError::Io(_))));
  }
}
