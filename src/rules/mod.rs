pub mod arrangement;
pub use arrangement::*;

pub mod category;
pub use category::*;

pub mod evaluator;
pub use evaluator::*;

pub mod grouping;
pub use grouping::*;

pub mod kicks;
pub use kicks::*;

pub mod pattern;
pub use pattern::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;
