pub mod io;
pub mod lines;

pub use io::{atomic_write_str, read_to_string_opt};
pub use lines::{FsError, LineConfig, NumberedLine, collect_lines, read_lines};
