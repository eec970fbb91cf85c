use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::domain::ids::ArtistId;
use crate::domain::link::{ArtistPair, CanonicalEdge, LinkEvent};

/// Aristas no dirigidas resultantes de plegar eventos de colaboración.
///
/// Mantiene el orden de primera aparición de cada par y un índice
/// `ArtistPair -> posición`, de modo que como mucho existe una arista
/// por par sin importar la dirección o las repeticiones.
#[derive(Debug, Clone, Default)]
pub struct CanonicalEdges {
  edges: Vec<CanonicalEdge>,
  index: HashMap<ArtistPair, usize>,
  self_loops: usize,
}

impl CanonicalEdges {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pliega los eventos en el orden recibido. La orientación de cada
  /// arista depende de ese orden, así que debe ser el del cargador.
  pub fn fold<'a, I>(events: I) -> Self
  where
    I: IntoIterator<Item = &'a LinkEvent>,
  {
    let mut edges = Self::new();
    let mut folded = 0usize;

    for event in events {
      edges.insert(event);
      folded += 1;
    }

    debug!(events = folded, edges = edges.len(), self_loops = edges.self_loops, "folded link events");
    edges
  }

  /// Añade un evento. Si el par ya existe en cualquier orientación se
  /// suma el año a esa arista; si no, se crea con la orientación
  /// `(from, to)` del evento.
  ///
  /// Los auto-enlaces (`from == to`) se descartan y se cuentan.
  pub fn insert(&mut self, event: &LinkEvent) {
    if event.is_self_loop() {
      self.self_loops += 1;
      return;
    }

    let key = ArtistPair::new(&event.from, &event.to);

    match self.index.get(&key) {
      Some(&pos) => {
        self.edges[pos].years.insert(event.year);
      }
      None => {
        self.index.insert(key, self.edges.len());
        self.edges.push(CanonicalEdge {
          endpoint_a: event.from.clone(),
          endpoint_b: event.to.clone(),
          years: BTreeSet::from([event.year]),
        });
      }
    }
  }

  pub fn get(&self, x: &ArtistId, y: &ArtistId) -> Option<&CanonicalEdge> {
    self.index.get(&ArtistPair::new(x, y)).map(|&pos| &self.edges[pos])
  }

  pub fn iter(&self) -> impl Iterator<Item = &CanonicalEdge> {
    self.edges.iter()
  }

  pub fn len(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.edges.is_empty()
  }

  /// Auto-enlaces descartados durante el plegado.
  pub fn self_loops(&self) -> usize {
    self.self_loops
  }

  pub fn into_vec(self) -> Vec<CanonicalEdge> {
    self.edges
  }
}
