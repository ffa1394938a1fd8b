//! I/O operations for writing generated artifacts

mod map;

pub use map::{write_map, MapOptions};
