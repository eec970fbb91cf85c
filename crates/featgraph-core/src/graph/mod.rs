pub mod assembler;
pub mod edges;
pub mod spells;

pub use assembler::GraphAssembler;
pub use edges::CanonicalEdges;
pub use spells::{activity_range, coalesce, flatten};
