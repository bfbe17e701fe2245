use super::category::Category;
use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::Utility;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use std::cmp::Ordering;

/// A fully-evaluated grouping strength.
///
/// Combines a [`Ranking`] with its [`Kickers`]. The derived ordering is
/// lexicographic (ranking, then kickers) and is exact between groupings of
/// the same size. Use [`Strength::versus`] when a 3-card head meets a 5-card
/// middle.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
    pub fn category(&self) -> Category {
        self.ranking.category()
    }

    /// Descending tiebreak ranks within the category.
    ///
    /// Two pair gives (high pair, low pair, kicker), full house gives
    /// (triple, pair), flush and high card list every rank.
    pub fn key(&self) -> Vec<Rank> {
        let mut key = match self.ranking {
            Ranking::Straight(hi) | Ranking::StraightFlush(hi) => (0..5)
                .map(|i| Rank::from(u8::from(hi) - i))
                .collect::<Vec<Rank>>(),
            ranking => match ranking.ranks() {
                (hi, Some(lo)) => vec![hi, lo],
                (hi, None) => vec![hi],
            },
        };
        key.extend(Vec::<Rank>::from(self.kickers));
        key
    }

    /// Compare across grouping sizes.
    ///
    /// Category first, then the defining ranks, then kickers over the common
    /// prefix only: a head pair of eights with a king kicker ties a middle
    /// pair of eights with king-five-three. For equal sizes this is exactly
    /// `Ord::cmp`.
    pub fn versus(&self, other: &Self) -> Ordering {
        self.ranking.cmp(&other.ranking).then_with(|| {
            let n = self.kickers.size().min(other.kickers.size());
            self.kickers.top(n).cmp(&other.kickers.top(n))
        })
    }

    /// Standalone heuristic value used to pre-rank search candidates.
    ///
    /// Monotone with the ordering within a category: category dominates,
    /// then the defining ranks, then kickers.
    pub fn utility(&self) -> Utility {
        let (hi, lo) = self.ranking.ranks();
        let category = self.category().strength() as Utility * 16.0;
        let primary = hi.value() as Utility;
        let secondary = lo.map_or(0.0, |r| r.value() as Utility + 1.0) / 16.0;
        let kickers = u16::from(self.kickers) as Utility / 8192.0 / 16.0;
        category + primary + secondary + kickers
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let ranking = e.find_ranking();
        let kickers = e.find_kickers(ranking);
        Self::from((ranking, kickers))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.ranking, self.kickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn two_pair_key() {
        let key = strength("Ks Kh Qd Qc 5s").key();
        assert!(key == vec![Rank::King, Rank::Queen, Rank::Five]);
    }

    #[test]
    fn full_house_key() {
        let key = strength("9s 9h 9d 4c 4s").key();
        assert!(key == vec![Rank::Nine, Rank::Four]);
    }

    #[test]
    fn straight_key_descends() {
        let key = strength("7s 8h 9d Tc Js").key();
        assert!(key == vec![Rank::Jack, Rank::Ten, Rank::Nine, Rank::Eight, Rank::Seven]);
    }

    #[test]
    fn high_card_key_descends() {
        let key = strength("2s 9h 5d Kc 7s").key();
        assert!(key == vec![Rank::Two, Rank::King, Rank::Nine, Rank::Seven, Rank::Five]);
    }

    #[test]
    fn suits_never_matter() {
        let a = strength("Ks Kh Qd Qc 5s");
        let b = strength("Kd Kc Qs Qh 5h");
        assert!(a == b);
        assert!(a.cmp(&b) == Ordering::Equal);
    }

    #[test]
    fn head_versus_middle_common_prefix() {
        let head = strength("8s 8h Kd");
        let middle = strength("8d 8c Ks 5h 3c");
        assert!(head.versus(&middle) == Ordering::Equal);
        let middle = strength("8d 8c Qs 5h 3c");
        assert!(head.versus(&middle) == Ordering::Greater);
        let head = strength("3s 3h 3d");
        let middle = strength("3c 4s 4h 4d 5c");
        assert!(head.versus(&middle) == Ordering::Less);
    }

    #[test]
    fn utility_follows_order() {
        let hands = [
            "3s 4h 5d 6c 8s",
            "2s Kh 5d 6c 8s",
            "3s 3h 5d 6c 8s",
            "4s 4h 3d 6c 8s",
            "4s 4h 3d 3c 8s",
            "4s 4h 3d 3c 9s",
            "5s 5h 3d 3c 8s",
            "4s 4h 4d 6c 8s",
            "3s 4h 5d 6c 7s",
            "3s 4s 5s 6s 8s",
            "4s 4h 4d 6c 6s",
            "4s 4h 4d 4c 6s",
            "3s 4s 5s 6s 7s",
        ]
        .map(strength);
        assert!(hands.windows(2).all(|w| w[0] < w[1]));
        assert!(hands.windows(2).all(|w| w[0].utility() < w[1].utility()));
    }
}
