use super::category::Category;
use crate::cards::rank::Rank;

/// A grouping's made hand, without its kickers.
///
/// Each variant carries the rank(s) that define it: the top card for high
/// card, flush and straights, the set ranks for pairs, trips and quads.
/// Ordering is by category, then by those ranks; [`Kickers`] settle the
/// rest.
///
/// [`Kickers`]: super::kicks::Kickers
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Ranking {
    HighCard(Rank),        // 2 or 4 kickers
    OnePair(Rank),         // 1 or 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOAK(Rank),        // 0 or 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    FourOAK(Rank),         // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::ThreeOAK(_) => Category::ThreeOAK,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::FourOAK(_) => Category::FourOAK,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }

    /// The defining ranks, most significant first.
    pub fn ranks(&self) -> (Rank, Option<Rank>) {
        match *self {
            Ranking::TwoPair(hi, lo) | Ranking::FullHouse(hi, lo) => (hi, Some(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Straight(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi)
            | Ranking::StraightFlush(hi) => (hi, None),
        }
    }

    /// Rank mask of the ranks left over as kickers.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOAK(hi)
            | Ranking::Flush(hi)
            | Ranking::FourOAK(hi) => !(u16::from(hi)),
            Ranking::Straight(_) | Ranking::StraightFlush(_) | Ranking::FullHouse(..) => 0,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.ranks() {
            (hi, Some(lo)) => write!(f, "{:<14}{}{}", self.category(), hi, lo),
            (hi, None) => write!(f, "{:<14}{} ", self.category(), hi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_dominates_ranks() {
        assert!(Ranking::OnePair(Rank::Three) > Ranking::HighCard(Rank::Two));
        assert!(Ranking::Flush(Rank::Seven) > Ranking::Straight(Rank::Ace));
        assert!(Ranking::FullHouse(Rank::Three, Rank::Four) > Ranking::Flush(Rank::Two));
    }

    #[test]
    fn ranks_break_ties() {
        assert!(Ranking::TwoPair(Rank::King, Rank::Four) > Ranking::TwoPair(Rank::Queen, Rank::Jack));
        assert!(Ranking::TwoPair(Rank::King, Rank::Five) > Ranking::TwoPair(Rank::King, Rank::Four));
        assert!(Ranking::OnePair(Rank::Two) > Ranking::OnePair(Rank::Ace));
    }
}
