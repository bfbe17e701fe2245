pub mod player;
pub use player::*;

pub mod stakes;
pub use stakes::*;

pub mod table;
pub use table::*;
