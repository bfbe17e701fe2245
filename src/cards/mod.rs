pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod subsets;
pub use subsets::*;

pub mod suit;
pub use suit::*;
