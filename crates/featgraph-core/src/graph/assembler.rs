use std::collections::HashSet;

use tracing::debug;

use crate::domain::artist::ClassifiedArtist;
use crate::domain::document::{GraphDocument, GraphEdge, GraphMode};
use crate::domain::ids::ArtistId;
use crate::domain::link::CanonicalEdge;
use crate::domain::year::is_valid_year;
use crate::graph::edges::CanonicalEdges;
use crate::graph::spells::coalesce;

/// Une nodos clasificados y aristas canónicas en un [`GraphDocument`].
///
/// Solo lee de sus entradas; cada llamada a [`assemble`](Self::assemble)
/// produce un documento nuevo.
pub struct GraphAssembler<'a> {
  nodes: &'a [ClassifiedArtist],
  edges: &'a CanonicalEdges,
}

impl<'a> GraphAssembler<'a> {
  pub fn new(nodes: &'a [ClassifiedArtist], edges: &'a CanonicalEdges) -> Self {
    Self { nodes, edges }
  }

  pub fn assemble(&self, mode: GraphMode) -> GraphDocument {
    match mode {
      GraphMode::Static => self.assemble_static(),
      GraphMode::Dynamic => self.assemble_dynamic(),
    }
  }

  /// Todos los nodos; aristas cuyos dos extremos existen. Los años no
  /// influyen: una arista con solo años centinela sigue presente.
  fn assemble_static(&self) -> GraphDocument {
    let nodes = self.nodes.to_vec();
    let present = id_set(&nodes);

    let edges: Vec<GraphEdge> = self
      .edges
      .iter()
      .filter(|edge| both_present(&present, edge))
      .map(|edge| GraphEdge { edge: edge.to_static(), spells: None })
      .collect();

    debug!(
      nodes = nodes.len(),
      edges = edges.len(),
      dangling = self.edges.len() - edges.len(),
      "assembled static document"
    );

    GraphDocument { mode: GraphMode::Static, nodes, edges }
  }

  /// Nodos con rango de actividad válido; aristas entre esos nodos con al
  /// menos un año válido, acompañadas de sus spells.
  fn assemble_dynamic(&self) -> GraphDocument {
    let nodes: Vec<ClassifiedArtist> = self.nodes.iter().filter(|n| n.has_valid_activity()).cloned().collect();
    let present = id_set(&nodes);

    let mut edges = Vec::new();
    let mut dangling = 0usize;
    let mut sentinel_only = 0usize;

    for edge in self.edges.iter() {
      if !both_present(&present, edge) {
        dangling += 1;
        continue;
      }

      let spells = coalesce(edge.years.iter().copied().filter(|&y| is_valid_year(y)));
      if spells.is_empty() {
        sentinel_only += 1;
        continue;
      }

      edges.push(GraphEdge { edge: edge.to_static(), spells: Some(spells) });
    }

    debug!(
      nodes = nodes.len(),
      dropped_nodes = self.nodes.len() - nodes.len(),
      edges = edges.len(),
      dangling,
      sentinel_only,
      "assembled dynamic document"
    );

    GraphDocument { mode: GraphMode::Dynamic, nodes, edges }
  }
}

fn id_set(nodes: &[ClassifiedArtist]) -> HashSet<&ArtistId> {
  nodes.iter().map(|n| &n.id).collect()
}

fn both_present(present: &HashSet<&ArtistId>, edge: &CanonicalEdge) -> bool {
  present.contains(&edge.endpoint_a) && present.contains(&edge.endpoint_b)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::activity::ActivityRange;
  use crate::domain::genre::GenreCategory;
  use crate::domain::link::LinkEvent;
  use crate::domain::link::StaticEdge;
  use crate::domain::spell::Spell;
  use crate::graph::spells::flatten;

  fn node(id: &str, activity: Option<(i32, i32)>) -> ClassifiedArtist {
    ClassifiedArtist {
      id: ArtistId::from(id),
      name: id.to_uppercase(),
      followers: 10,
      popularity: 50,
      genre: GenreCategory::Pop,
      activity: activity.map(|(first, last)| ActivityRange { first, last }),
    }
  }

  #[test]
  fn sentinel_only_edge_is_static_but_not_dynamic() {
    let nodes = [node("a", Some((2000, 2010))), node("b", Some((1995, 2020)))];
    let edges = CanonicalEdges::fold(&[LinkEvent::new("a", "b", 20)]);
    let assembler = GraphAssembler::new(&nodes, &edges);

    let static_doc = assembler.assemble(GraphMode::Static);
    let dynamic_doc = assembler.assemble(GraphMode::Dynamic);

    assert!(static_doc.has_edge_between("a", "b"));
    assert!(!dynamic_doc.has_edge_between("a", "b"));
    assert_eq!(dynamic_doc.nodes.len(), 2);
  }

  #[test]
  fn dynamic_edges_carry_spells_of_valid_years_only() {
    let nodes = [node("a", Some((2000, 2010))), node("b", Some((2000, 2010)))];
    let events = [
      LinkEvent::new("a", "b", 2001),
      LinkEvent::new("b", "a", 2002),
      LinkEvent::new("a", "b", 20),
      LinkEvent::new("a", "b", 2005),
    ];
    let edges = CanonicalEdges::fold(&events);

    let doc = GraphAssembler::new(&nodes, &edges).assemble(GraphMode::Dynamic);

    assert_eq!(doc.edges.len(), 1);
    assert_eq!(doc.edges[0].spells, Some(vec![Spell::new(2001, 2002).unwrap(), Spell::single(2005)]));
    let years: Vec<_> = flatten(doc.edges[0].spells.as_deref().unwrap_or_default()).collect();
    assert_eq!(years, vec![2001, 2002, 2005]);
  }

  #[test]
  fn dangling_edges_are_dropped_in_both_modes() {
    let nodes = [node("a", Some((2000, 2010)))];
    let edges = CanonicalEdges::fold(&[LinkEvent::new("a", "ghost", 2001)]);
    let assembler = GraphAssembler::new(&nodes, &edges);

    assert!(assembler.assemble(GraphMode::Static).edges.is_empty());
    assert!(assembler.assemble(GraphMode::Dynamic).edges.is_empty());
  }

  #[test]
  fn nodes_without_valid_activity_only_appear_statically() {
    let nodes = [node("a", Some((2000, 2010))), node("afroman", Some((20, 2001))), node("silent", None)];
    let edges = CanonicalEdges::fold(&[LinkEvent::new("a", "afroman", 2001)]);
    let assembler = GraphAssembler::new(&nodes, &edges);

    let static_doc = assembler.assemble(GraphMode::Static);
    let dynamic_doc = assembler.assemble(GraphMode::Dynamic);

    assert_eq!(static_doc.nodes.len(), 3);
    assert!(static_doc.has_edge_between("a", "afroman"));
    assert_eq!(dynamic_doc.nodes.len(), 1);
    assert!(dynamic_doc.node("afroman").is_none());
    assert!(dynamic_doc.edges.is_empty());
  }

  #[test]
  fn static_edges_carry_topology_only() {
    let nodes = [node("a", None), node("b", None)];
    let edges = CanonicalEdges::fold(&[LinkEvent::new("a", "b", 20), LinkEvent::new("b", "a", 2001)]);

    let doc = GraphAssembler::new(&nodes, &edges).assemble(GraphMode::Static);

    assert_eq!(
      doc.edges,
      vec![GraphEdge { edge: StaticEdge { endpoint_a: ArtistId::from("a"), endpoint_b: ArtistId::from("b") }, spells: None }]
    );
  }
}
