use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::domain::activity::ActivityRange;
use crate::domain::ids::ArtistId;
use crate::domain::link::LinkEvent;
use crate::domain::year::Year;
use crate::stats::round2;

/// Actividad colaborativa de un año.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearLinkStats {
  pub year: Year,
  /// Artistas cuyo rango de actividad incluye el año.
  pub total_artists: usize,
  /// De esos, cuántos tienen al menos un enlace saliente.
  pub linked_artists: usize,
  /// Media de enlaces salientes entre los artistas enlazados.
  pub avg_links: f64,
  /// Mediana de enlaces salientes entre los artistas enlazados.
  pub median_links: f64,
}

/// Estadísticas por año para todos los años cubiertos por algún rango
/// de actividad válido.
///
/// Los enlaces se cuentan como pares dirigidos distintos `from -> to`
/// (se ignora el año), atribuidos al artista `from`. Un artista cuenta
/// como activo en todos los años de `first..=last`, huecos incluidos.
pub fn year_link_stats(ranges: &HashMap<ArtistId, ActivityRange>, links: &[LinkEvent]) -> Vec<YearLinkStats> {
  let outgoing = outgoing_link_counts(links);

  let mut active_by_year: BTreeMap<Year, Vec<&ArtistId>> = BTreeMap::new();
  for (id, range) in ranges.iter().filter(|(_, r)| r.is_valid()) {
    for year in range.first..=range.last {
      active_by_year.entry(year).or_default().push(id);
    }
  }

  active_by_year
    .into_iter()
    .map(|(year, active)| {
      let mut counts: Vec<usize> = active.iter().filter_map(|id| outgoing.get(*id).copied()).collect();
      counts.sort_unstable();

      YearLinkStats {
        year,
        total_artists: active.len(),
        linked_artists: counts.len(),
        avg_links: round2(mean(&counts)),
        median_links: round2(median(&counts)),
      }
    })
    .collect()
}

fn outgoing_link_counts(links: &[LinkEvent]) -> HashMap<&ArtistId, usize> {
  let distinct: HashSet<(&ArtistId, &ArtistId)> = links.iter().map(|l| (&l.from, &l.to)).collect();

  let mut counts: HashMap<&ArtistId, usize> = HashMap::new();
  for (from, _) in distinct {
    *counts.entry(from).or_default() += 1;
  }
  counts
}

fn mean(values: &[usize]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  values.iter().sum::<usize>() as f64 / values.len() as f64
}

/// `values` debe venir ordenado.
fn median(values: &[usize]) -> f64 {
  let n = values.len();
  match n {
    0 => 0.0,
    _ if n % 2 == 0 => (values[n / 2 - 1] + values[n / 2]) as f64 / 2.0,
    _ => values[n / 2] as f64,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn ranges(entries: &[(&str, Year, Year)]) -> HashMap<ArtistId, ActivityRange> {
    entries.iter().map(|&(id, first, last)| (ArtistId::from(id), ActivityRange { first, last })).collect()
  }

  #[test]
  fn counts_distinct_outgoing_links_per_active_artist() {
    let ranges = ranges(&[("a", 2000, 2001), ("b", 2001, 2001), ("c", 2001, 2002)]);
    let links = [
      LinkEvent::new("a", "b", 2000),
      LinkEvent::new("a", "b", 2001),
      LinkEvent::new("a", "c", 2001),
      LinkEvent::new("b", "a", 2001),
      LinkEvent::new("b", "c", 2001),
      LinkEvent::new("b", "d", 2001),
    ];

    let stats = year_link_stats(&ranges, &links);
    let years: Vec<_> = stats.iter().map(|s| s.year).collect();
    assert_eq!(years, vec![2000, 2001, 2002]);

    // 2001: a(2), b(3), c(sin enlaces)
    let y2001 = &stats[1];
    assert_eq!(y2001.total_artists, 3);
    assert_eq!(y2001.linked_artists, 2);
    assert_eq!(y2001.avg_links, 2.5);
    assert_eq!(y2001.median_links, 2.5);

    let y2002 = &stats[2];
    assert_eq!(y2002.total_artists, 1);
    assert_eq!(y2002.linked_artists, 0);
    assert_eq!(y2002.avg_links, 0.0);
  }

  #[test]
  fn invalid_ranges_are_ignored() {
    let ranges = ranges(&[("afroman", 20, 2001), ("a", 2001, 2001)]);
    let stats = year_link_stats(&ranges, &[]);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total_artists, 1);
  }

  #[test]
  fn median_is_numeric_not_lexicographic() {
    assert_eq!(median(&[2, 9, 10]), 9.0);
    assert_eq!(median(&[1, 2, 3, 10]), 2.5);
    assert_eq!(round2(mean(&[1, 1, 2])), 1.33);
  }
}
