use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::domain::{ActivityRange, ActivityRecord, Artist, ArtistId, ClassifiedArtist, GraphDocument, GraphMode, LinkEvent};
use crate::errors::CoreError;
use crate::genre::GenreClassifier;
use crate::graph::{CanonicalEdges, GraphAssembler, activity_range};
use crate::ports::{GraphRenderer, RecordSource};
use crate::stats::{GenreCount, ReleaseCount, YearLinkStats, genre_frequency, top_releases, year_link_stats};

pub struct GraphService<S>
where
  S: RecordSource,
{
  source: S,
  classifier: GenreClassifier,
}

impl<S> GraphService<S>
where
  S: RecordSource,
{
  pub fn new(source: S, classifier: GenreClassifier) -> Self {
    Self { source, classifier }
  }

  /// Carga los registros y ejecuta las etapas puras:
  /// - filtra artistas por el conjunto revisado (si existe)
  /// - pliega los enlaces en aristas canónicas
  /// - calcula rangos de actividad
  /// - clasifica cada artista
  pub async fn snapshot(&self) -> Result<Snapshot, CoreError> {
    let artists = self.source.load_artists().await.map_err(|e| CoreError::Load(e.to_string()))?;
    let links = self.source.load_links().await.map_err(|e| CoreError::Load(e.to_string()))?;
    let activity = self.source.load_activity().await.map_err(|e| CoreError::Load(e.to_string()))?;
    let checked = self.source.load_checked().await.map_err(|e| CoreError::Load(e.to_string()))?;

    info!(artists = artists.len(), links = links.len(), activity = activity.len(), "records loaded");

    Ok(Snapshot::build(&self.classifier, artists, links, activity, checked.as_ref()))
  }
}

/// Resultado inmutable de una ejecución del pipeline sobre una foto fija
/// de la entrada. Todos los documentos e informes se derivan de aquí.
#[derive(Debug, Clone)]
pub struct Snapshot {
  artists: Vec<Artist>,
  links: Vec<LinkEvent>,
  activity: Vec<ActivityRecord>,
  ranges: HashMap<ArtistId, ActivityRange>,
  edges: CanonicalEdges,
  classified: Vec<ClassifiedArtist>,
}

impl Snapshot {
  pub fn build(
    classifier: &GenreClassifier,
    artists: Vec<Artist>,
    links: Vec<LinkEvent>,
    activity: Vec<ActivityRecord>,
    checked: Option<&HashSet<ArtistId>>,
  ) -> Self {
    let (artists, activity) = match checked {
      Some(checked) => {
        let before = artists.len();
        let artists: Vec<Artist> = artists.into_iter().filter(|a| checked.contains(&a.id)).collect();
        let activity = activity.into_iter().filter(|r| checked.contains(&r.artist_id)).collect();
        debug!(kept = artists.len(), dropped = before - artists.len(), "filtered to checked artists");
        (artists, activity)
      }
      None => (artists, activity),
    };

    let edges = CanonicalEdges::fold(&links);
    if edges.self_loops() > 0 {
      info!(self_loops = edges.self_loops(), "dropped self-referencing links");
    }

    let ranges: HashMap<ArtistId, ActivityRange> =
      activity.iter().filter_map(|r| activity_range(r).map(|range| (r.artist_id.clone(), range))).collect();

    let classified: Vec<ClassifiedArtist> =
      artists.iter().map(|a| classifier.classify_artist(a, ranges.get(&a.id).copied())).collect();

    Self { artists, links, activity, ranges, edges, classified }
  }

  pub fn classified(&self) -> &[ClassifiedArtist] {
    &self.classified
  }

  pub fn edges(&self) -> &CanonicalEdges {
    &self.edges
  }

  pub fn document(&self, mode: GraphMode) -> GraphDocument {
    GraphAssembler::new(&self.classified, &self.edges).assemble(mode)
  }

  /// Ensambla y serializa en un paso.
  pub fn render<R: GraphRenderer>(&self, renderer: &R, mode: GraphMode) -> Result<String, CoreError> {
    let document = self.document(mode);
    renderer.render(&document).map_err(|e| CoreError::Render(e.to_string()))
  }

  pub fn genre_frequency(&self) -> Vec<GenreCount> {
    genre_frequency(&self.classified)
  }

  pub fn year_link_stats(&self) -> Vec<YearLinkStats> {
    year_link_stats(&self.ranges, &self.links)
  }

  pub fn top_releases(&self, limit: usize) -> Vec<ReleaseCount> {
    top_releases(&self.activity, &self.artists, limit)
  }
}
