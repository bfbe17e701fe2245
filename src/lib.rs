//! Thirteen Waters (十三水) rules engine.
//!
//! A player receives 13 cards and splits them into a 3-card head, a 5-card
//! middle and a 5-card tail. The groupings must not decrease in strength from
//! head to tail, otherwise the hand is a foul (倒水).
//!
//! ## Modules
//!
//! - [`cards`]: [`Rank`], [`Suit`], [`Card`], the bitset [`Hand`], [`Deck`]
//!   and the [`Subsets`] combination iterator
//! - [`rules`]: classification ([`Evaluator`], [`Strength`]), the grouping
//!   comparator, foul detection on [`Arrangement`], special [`Pattern`]s
//! - [`split`]: the pruned "smart split" search over all partitions
//! - [`scoring`]: pairwise table settlement with foul penalties and bonuses
//!
//! Everything is a pure function over immutable card values.
pub mod cards;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod split;

pub use cards::*;
pub use error::*;
pub use rules::*;
pub use scoring::*;
pub use split::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Table points won or lost in a round.
pub type Points = i32;
/// Heuristic desirability of a candidate arrangement during search.
pub type Utility = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE SHAPE
// ============================================================================
/// Cards dealt to each player.
pub const HAND_SIZE: usize = 13;
/// Cards in the head grouping.
pub const HEAD_SIZE: usize = 3;
/// Cards in the middle and tail groupings.
pub const BODY_SIZE: usize = 5;

// ============================================================================
// SMART SPLIT PRUNING
// Top-K pre-scoring trades exhaustiveness for speed. These are quality
// knobs, not correctness requirements: any K >= 1 still yields a non-foul.
// ============================================================================
/// Tails kept after ranking all C(13,5) = 1287 by standalone strength.
pub const TAIL_TOP_K: usize = 14;
/// Middles kept per tail after ranking all C(8,5) = 56 of the remainder.
pub const MIDDLE_TOP_K: usize = 12;
/// Ranked arrangements returned to callers that cycle through alternatives.
pub const SEARCH_RESULTS: usize = 5;

// ============================================================================
// SMART SPLIT UTILITY
// tail weight > middle weight > head weight. The bonuses reward strong
// front groupings, which win often precisely because they are rare.
// ============================================================================
/// Weight of the tail grouping strength.
pub const WEIGHT_TAIL: Utility = 2.0;
/// Weight of the middle grouping strength.
pub const WEIGHT_MIDDLE: Utility = 1.5;
/// Weight of the head grouping strength.
pub const WEIGHT_HEAD: Utility = 1.0;
/// Bonus for three of a kind in the head.
pub const BONUS_HEAD_TRIPS: Utility = 40.0;
/// Bonus for a pair in the head.
pub const BONUS_HEAD_PAIR: Utility = 12.0;
/// Bonus for a straight, flush or full house in the middle.
pub const BONUS_MIDDLE_MADE: Utility = 10.0;

// ============================================================================
// SCORING
// Per-grouping unit is 1; everything below is in units of `Stakes::base`.
// ============================================================================
/// Paid by a fouling player to each non-fouling opponent.
pub const FOUL_PENALTY: Points = 3;
/// Multiplier applied to a pair result when one side wins all three groupings.
pub const SWEEP_MULTIPLIER: Points = 2;
/// Royalty for winning the head with three of a kind.
pub const ROYALTY_HEAD_TRIPS: Points = 3;
/// Royalty for winning the middle with a full house.
pub const ROYALTY_MIDDLE_FULL_HOUSE: Points = 2;
/// Royalty for winning the middle with four of a kind.
pub const ROYALTY_MIDDLE_QUADS: Points = 8;
/// Royalty for winning the middle with a straight flush.
pub const ROYALTY_MIDDLE_STRAIGHT_FLUSH: Points = 10;
/// Royalty for winning the tail with four of a kind.
pub const ROYALTY_TAIL_QUADS: Points = 4;
/// Royalty for winning the tail with a straight flush.
pub const ROYALTY_TAIL_STRAIGHT_FLUSH: Points = 5;
/// Flat bonus for a dragon (all thirteen ranks).
pub const BONUS_DRAGON: Points = 13;
/// Flat bonus for six pairs.
pub const BONUS_SIX_PAIRS: Points = 3;
/// Flat bonus for three straights.
pub const BONUS_THREE_STRAIGHTS: Points = 4;
/// Flat bonus for three flushes.
pub const BONUS_THREE_FLUSHES: Points = 4;
