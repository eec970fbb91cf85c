pub mod graph_renderer;
pub mod record_source;

pub use graph_renderer::{GraphRenderer, RenderError};
pub use record_source::{LoadError, RecordSource};
