//! featgraph - builds an artist collaboration graph and genre taxonomy
//! from tabular exports and writes GEXF documents and summary reports.

mod config;
mod reports;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use featgraph_core::domain::GraphMode;
use featgraph_core::genre::{GenreClassifier, GenreRules};
use featgraph_core::services::GraphService;
use featgraph_gexf::{GexfConfig, GexfRenderer};
use featgraph_loader::{CsvRecordSource, DataConfig};

use crate::config::GenreConfig;

/// Command-line arguments for featgraph
#[derive(Parser, Debug)]
#[command(name = "featgraph")]
#[command(about = "Artist collaboration graph builder")]
#[command(version)]
struct Args {
  /// Artists export (overrides [data].artists)
  #[arg(long, global = true, env = "FEATGRAPH_ARTISTS")]
  artists: Option<PathBuf>,

  /// Links export (overrides [data].links)
  #[arg(long, global = true, env = "FEATGRAPH_LINKS")]
  links: Option<PathBuf>,

  /// Years-active export (overrides [data].activity)
  #[arg(long, global = true, env = "FEATGRAPH_ACTIVITY")]
  activity: Option<PathBuf>,

  /// Checked artist list; only these artists enter the graph
  #[arg(long, global = true, env = "FEATGRAPH_CHECKED")]
  checked: Option<PathBuf>,

  /// Output directory (overrides [data].output_dir)
  #[arg(short, long, global = true, env = "FEATGRAPH_OUTPUT_DIR")]
  output_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Write the collaboration graph as GEXF
  Gexf {
    #[arg(long, value_enum, default_value_t = Mode::Dynamic)]
    mode: Mode,
  },
  /// Write artist counts per genre category
  Genres,
  /// Write per-year collaboration statistics
  LinkStats,
  /// Print the artists with the most releases
  TopReleases {
    #[arg(long, default_value_t = 50)]
    limit: usize,
  },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
  Static,
  Dynamic,
}

impl From<Mode> for GraphMode {
  fn from(mode: Mode) -> Self {
    match mode {
      Mode::Static => GraphMode::Static,
      Mode::Dynamic => GraphMode::Dynamic,
    }
  }
}

impl Args {
  /// Flags win over the `[data]` section.
  fn data_config(&self, mut cfg: DataConfig) -> DataConfig {
    if let Some(path) = &self.artists {
      cfg.artists = path.clone();
    }
    if let Some(path) = &self.links {
      cfg.links = path.clone();
    }
    if let Some(path) = &self.activity {
      cfg.activity = path.clone();
    }
    if let Some(path) = &self.checked {
      cfg.checked = Some(path.clone());
    }
    if let Some(dir) = &self.output_dir {
      cfg.output_dir = dir.clone();
    }
    cfg
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "featgraph=info".into()))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let args = Args::parse();

  let data = args.data_config(DataConfig::load().context("Failed to load [data] config")?);
  let genre_cfg = GenreConfig::load().context("Failed to load [genre] config")?;
  let rules = GenreRules::try_from(genre_cfg).context("Invalid [genre] rules")?;

  info!(artists = %data.artists.display(), links = %data.links.display(), "Loading exports");

  let output_dir = data.output_dir.clone();
  let service = GraphService::new(CsvRecordSource::new(data), GenreClassifier::new(rules));
  let snapshot = service.snapshot().await.context("Failed to build graph snapshot")?;

  match args.command {
    Command::Gexf { mode } => {
      let renderer = GexfRenderer::new(GexfConfig::load().context("Failed to load [gexf] config")?);
      let path = reports::write_gexf(&snapshot, &renderer, mode.into(), &output_dir)?;
      info!("Graph written to {}", path.display());
    }
    Command::Genres => {
      let path = reports::write_genre_frequency(&snapshot, &output_dir)?;
      info!("Genre frequency written to {}", path.display());
    }
    Command::LinkStats => {
      let (csv, json) = reports::write_link_stats(&snapshot, &output_dir)?;
      info!("Link statistics written to {} and {}", csv.display(), json.display());
    }
    Command::TopReleases { limit } => {
      print!("{}", reports::format_top_releases(&snapshot.top_releases(limit))?);
    }
  }

  Ok(())
}
