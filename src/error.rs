/// Structural violations of the rules engine's preconditions.
///
/// These are caller bugs rather than game states. Nothing in the engine
/// coerces malformed input into a default classification or a foul.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Duplicate cards, the wrong total count, or an unparseable card.
    #[error("invalid card set: {0}")]
    InvalidCardSet(String),
    /// A grouping must hold exactly 3 or 5 cards.
    #[error("invalid grouping size: {0} cards (expected 3 or 5)")]
    InvalidGroupingSize(usize),
    /// An arrangement must be 3/5/5 distinct cards.
    #[error("invalid arrangement shape: {head}/{middle}/{tail} cards (expected 3/5/5, all distinct)")]
    InvalidArrangementShape {
        head: usize,
        middle: usize,
        tail: usize,
    },
    /// Scoring needs an opponent.
    #[error("scoring needs at least 2 players, got {0}")]
    TooFewPlayers(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
