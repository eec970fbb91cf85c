use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use featgraph_core::domain::GraphMode;
use featgraph_core::ports::GraphRenderer;
use featgraph_core::services::Snapshot;
use featgraph_core::stats::{GenreCount, ReleaseCount, YearLinkStats};
use featgraph_fs::atomic_write_str;

fn write_file(path: &Path, contents: &str) -> Result<()> {
  atomic_write_str(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

/// Renders the graph and writes it as `artists-<mode>.<ext>`.
pub fn write_gexf<R: GraphRenderer>(snapshot: &Snapshot, renderer: &R, mode: GraphMode, dir: &Path) -> Result<PathBuf> {
  let text = snapshot.render(renderer, mode)?;
  let path = dir.join(format!("artists-{}.{}", mode.as_str(), renderer.file_extension()));
  write_file(&path, &text)?;
  Ok(path)
}

fn write_genre_rows(out: &mut String, counts: &[GenreCount]) -> fmt::Result {
  writeln!(out, "genre,frequency")?;
  for entry in counts {
    writeln!(out, "{},{}", entry.genre, entry.count)?;
  }
  Ok(())
}

pub fn genre_frequency_csv(counts: &[GenreCount]) -> Result<String> {
  let mut out = String::new();
  write_genre_rows(&mut out, counts).context("Failed to format genre frequency")?;
  Ok(out)
}

pub fn write_genre_frequency(snapshot: &Snapshot, dir: &Path) -> Result<PathBuf> {
  let path = dir.join("genre-frequency.csv");
  write_file(&path, &genre_frequency_csv(&snapshot.genre_frequency())?)?;
  Ok(path)
}

fn write_link_rows(out: &mut String, stats: &[YearLinkStats]) -> fmt::Result {
  writeln!(out, "year,totalArtists,nArtistLinks,avgPerArtist,medianPerArtist")?;
  for s in stats {
    writeln!(out, "{},{},{},{},{}", s.year, s.total_artists, s.linked_artists, s.avg_links, s.median_links)?;
  }
  Ok(())
}

pub fn link_stats_csv(stats: &[YearLinkStats]) -> Result<String> {
  let mut out = String::new();
  write_link_rows(&mut out, stats).context("Failed to format link statistics")?;
  Ok(out)
}

/// Writes `year_link_frequency.csv` and `year_link_frequency.json`.
pub fn write_link_stats(snapshot: &Snapshot, dir: &Path) -> Result<(PathBuf, PathBuf)> {
  let stats = snapshot.year_link_stats();

  let csv_path = dir.join("year_link_frequency.csv");
  write_file(&csv_path, &link_stats_csv(&stats)?)?;

  let json_path = dir.join("year_link_frequency.json");
  let json = serde_json::to_string_pretty(&stats).context("Failed to encode link statistics")?;
  write_file(&json_path, &json)?;

  Ok((csv_path, json_path))
}

fn write_release_rows(out: &mut String, top: &[ReleaseCount]) -> fmt::Result {
  for entry in top {
    writeln!(out, "{}\t{}\t{}", entry.artist_id, entry.releases, entry.name.as_deref().unwrap_or(""))?;
  }
  Ok(())
}

pub fn format_top_releases(top: &[ReleaseCount]) -> Result<String> {
  let mut out = String::new();
  write_release_rows(&mut out, top).context("Failed to format release counts")?;
  Ok(out)
}
