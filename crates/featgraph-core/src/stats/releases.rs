use std::collections::HashMap;

use serde::Serialize;

use crate::domain::activity::ActivityRecord;
use crate::domain::artist::Artist;
use crate::domain::ids::ArtistId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseCount {
  pub artist_id: ArtistId,
  pub name: Option<String>,
  pub releases: u64,
}

/// Los `limit` artistas con más lanzamientos. Empates por id.
pub fn top_releases(activity: &[ActivityRecord], artists: &[Artist], limit: usize) -> Vec<ReleaseCount> {
  let names: HashMap<&ArtistId, &str> = artists.iter().map(|a| (&a.id, a.name.as_str())).collect();

  let mut counts: Vec<ReleaseCount> = activity
    .iter()
    .map(|record| ReleaseCount {
      artist_id: record.artist_id.clone(),
      name: names.get(&record.artist_id).map(|n| n.to_string()),
      releases: record.total_releases(),
    })
    .collect();

  counts.sort_by(|a, b| b.releases.cmp(&a.releases).then_with(|| a.artist_id.cmp(&b.artist_id)));
  counts.truncate(limit);
  counts
}
