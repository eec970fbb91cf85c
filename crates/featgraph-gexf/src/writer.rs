use std::fmt::Write;

use chrono::NaiveDate;
use tracing::debug;

use featgraph_core::domain::{ClassifiedArtist, GraphDocument, GraphEdge, GraphMode, Spell, Year};
use featgraph_core::ports::{GraphRenderer, RenderError};

use crate::config::GexfConfig;
use crate::escape::xml_escape;

/// Serializa un [`GraphDocument`] como GEXF 1.3, grafo no dirigido.
///
/// En modo dinámico los nodos llevan `start`/`end` y las aristas sus
/// `<spells>`; los años se expanden a `YYYY-01-01` / `YYYY-12-31`.
#[derive(Debug, Clone)]
pub struct GexfRenderer {
  config: GexfConfig,
  date: NaiveDate,
}

impl GexfRenderer {
  /// Usa la fecha local de hoy como `lastmodifieddate`.
  pub fn new(config: GexfConfig) -> Self {
    Self::with_date(config, chrono::Local::now().date_naive())
  }

  pub fn with_date(config: GexfConfig, date: NaiveDate) -> Self {
    Self { config, date }
  }

  fn write_document(&self, doc: &GraphDocument, out: &mut String) -> std::fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
      out,
      r#"<gexf xmlns="http://gexf.net/1.3" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://gexf.net/1.3 http://gexf.net/1.3/gexf.xsd" version="1.3">"#
    )?;
    writeln!(out, r#"  <meta lastmodifieddate="{}">"#, self.date.format("%Y-%m-%d"))?;
    writeln!(out, "    <creator>{}</creator>", xml_escape(&self.config.creator))?;
    writeln!(out, "    <description>{}</description>", xml_escape(&self.config.description))?;
    writeln!(out, "  </meta>")?;

    match doc.mode {
      GraphMode::Static => writeln!(out, r#"  <graph mode="static" defaultedgetype="undirected">"#)?,
      GraphMode::Dynamic => {
        writeln!(out, r#"  <graph mode="dynamic" defaultedgetype="undirected" timeformat="date">"#)?
      }
    }

    writeln!(out, r#"    <attributes class="node">"#)?;
    writeln!(out, r#"      <attribute id="followers" title="Followers" type="integer" />"#)?;
    writeln!(out, r#"      <attribute id="popularity" title="Popularity" type="integer" />"#)?;
    writeln!(out, r#"      <attribute id="genre" title="Genre" type="string" />"#)?;
    writeln!(out, "    </attributes>")?;

    writeln!(out, "    <nodes>")?;
    for node in &doc.nodes {
      write_node(out, node, doc.mode)?;
    }
    writeln!(out, "    </nodes>")?;

    writeln!(out, "    <edges>")?;
    for (index, edge) in doc.edges.iter().enumerate() {
      write_edge(out, index, edge)?;
    }
    writeln!(out, "    </edges>")?;

    writeln!(out, "  </graph>")?;
    writeln!(out, "</gexf>")
  }
}

fn year_start(year: Year) -> String {
  format!("{year:04}-01-01")
}

fn year_end(year: Year) -> String {
  format!("{year:04}-12-31")
}

fn write_node(out: &mut String, node: &ClassifiedArtist, mode: GraphMode) -> std::fmt::Result {
  let id = xml_escape(node.id.as_str());
  let label = xml_escape(&node.name);

  match (mode, node.activity) {
    (GraphMode::Dynamic, Some(range)) => writeln!(
      out,
      r#"      <node id="{id}" label="{label}" start="{}" end="{}">"#,
      year_start(range.first),
      year_end(range.last)
    )?,
    _ => writeln!(out, r#"      <node id="{id}" label="{label}">"#)?,
  }

  writeln!(out, "        <attvalues>")?;
  writeln!(out, r#"          <attvalue for="followers" value="{}" />"#, node.followers)?;
  writeln!(out, r#"          <attvalue for="popularity" value="{}" />"#, node.popularity)?;
  writeln!(out, r#"          <attvalue for="genre" value="{}" />"#, xml_escape(node.genre.label()))?;
  writeln!(out, "        </attvalues>")?;
  writeln!(out, "      </node>")
}

fn write_edge(out: &mut String, index: usize, edge: &GraphEdge) -> std::fmt::Result {
  let source = xml_escape(edge.edge.endpoint_a.as_str());
  let target = xml_escape(edge.edge.endpoint_b.as_str());

  match edge.spells.as_deref() {
    Some(spells) if !spells.is_empty() => {
      writeln!(out, r#"      <edge id="{index}" source="{source}" target="{target}">"#)?;
      write_spells(out, spells)?;
      writeln!(out, "      </edge>")
    }
    _ => writeln!(out, r#"      <edge id="{index}" source="{source}" target="{target}" />"#),
  }
}

fn write_spells(out: &mut String, spells: &[Spell]) -> std::fmt::Result {
  writeln!(out, "        <spells>")?;
  for spell in spells {
    writeln!(
      out,
      r#"          <spell start="{}" end="{}" />"#,
      year_start(spell.start()),
      year_end(spell.end())
    )?;
  }
  writeln!(out, "        </spells>")
}

impl GraphRenderer for GexfRenderer {
  fn render(&self, document: &GraphDocument) -> Result<String, RenderError> {
    let mut out = String::new();
    self.write_document(document, &mut out).map_err(|e| RenderError::Format(e.to_string()))?;

    debug!(mode = document.mode.as_str(), bytes = out.len(), "rendered gexf");
    Ok(out)
  }

  fn file_extension(&self) -> &'static str {
    "gexf"
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use featgraph_core::domain::{ActivityRange, ArtistId, GenreCategory, StaticEdge};

  fn renderer() -> GexfRenderer {
    let config = GexfConfig { creator: "Tester".to_string(), description: "Rock & Roll <links>".to_string() };
    GexfRenderer::with_date(config, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap())
  }

  fn node(id: &str, name: &str, activity: Option<ActivityRange>) -> ClassifiedArtist {
    ClassifiedArtist {
      id: ArtistId::from(id),
      name: name.to_string(),
      followers: 1234,
      popularity: 77,
      genre: GenreCategory::RapHipHop,
      activity,
    }
  }

  fn edge(a: &str, b: &str, spells: Option<Vec<Spell>>) -> GraphEdge {
    GraphEdge {
      edge: StaticEdge { endpoint_a: ArtistId::from(a), endpoint_b: ArtistId::from(b) },
      spells,
    }
  }

  #[test]
  fn static_document_has_no_time_attributes() {
    let doc = GraphDocument {
      mode: GraphMode::Static,
      nodes: vec![node("a", "Simon & Garfunkel", Some(ActivityRange { first: 1964, last: 1970 })), node("b", "B", None)],
      edges: vec![edge("a", "b", None)],
    };

    let xml = renderer().render(&doc).unwrap();

    assert!(xml.contains(r#"<meta lastmodifieddate="2024-03-09">"#));
    assert!(xml.contains("<description>Rock &amp; Roll &lt;links&gt;</description>"));
    assert!(xml.contains(r#"<graph mode="static" defaultedgetype="undirected">"#));
    assert!(xml.contains(r#"<node id="a" label="Simon &amp; Garfunkel">"#));
    assert!(xml.contains(r#"<attvalue for="genre" value="rap/hip hop" />"#));
    assert!(xml.contains(r#"<edge id="0" source="a" target="b" />"#));
    assert!(!xml.contains("start="));
    assert!(!xml.contains("<spells>"));
  }

  #[test]
  fn dynamic_document_expands_years_to_dates() {
    let doc = GraphDocument {
      mode: GraphMode::Dynamic,
      nodes: vec![node("a", "A", Some(ActivityRange { first: 2001, last: 2009 }))],
      edges: vec![edge("a", "b", Some(vec![Spell::new(2001, 2003).unwrap(), Spell::single(2009)]))],
    };

    let xml = renderer().render(&doc).unwrap();

    assert!(xml.contains(r#"timeformat="date""#));
    assert!(xml.contains(r#"<node id="a" label="A" start="2001-01-01" end="2009-12-31">"#));
    assert!(xml.contains(r#"<spell start="2001-01-01" end="2003-12-31" />"#));
    assert!(xml.contains(r#"<spell start="2009-01-01" end="2009-12-31" />"#));
    assert!(xml.trim_end().ends_with("</gexf>"));
  }

  #[test]
  fn edge_ids_are_sequential() {
    let doc = GraphDocument {
      mode: GraphMode::Static,
      nodes: vec![],
      edges: vec![edge("a", "b", None), edge("b", "c", None)],
    };

    let xml = renderer().render(&doc).unwrap();
    assert!(xml.contains(r#"<edge id="1" source="b" target="c" />"#));
  }
}
