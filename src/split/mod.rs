pub mod options;
pub use options::*;

pub mod splitter;
pub use splitter::*;
