pub mod config;
pub mod escape;
pub mod writer;

pub use config::GexfConfig;
pub use escape::xml_escape;
pub use writer::GexfRenderer;
