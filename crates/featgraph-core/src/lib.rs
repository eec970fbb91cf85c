pub mod domain;
pub mod errors;
pub mod genre;
pub mod graph;
pub mod ports;
pub mod services;
pub mod stats;

pub use errors::CoreError;
