use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// A lazy evaluator for a grouping's strength.
///
/// Works on the compact bitset representation and searches for the best
/// made hand with bitwise operations, strongest category first. The grouping
/// size matters: three cards only make high card, pair or trips, while five
/// cards can make anything. Straights run Three..Ace only; Two never
/// participates and nothing wraps around.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        let ranking = match self.0.size() {
            3 => None
                .or_else(|| self.find_3_oak())
                .or_else(|| self.find_2_oak())
                .or_else(|| self.find_1_oak()),
            _ => None
                .or_else(|| self.find_straight_flush())
                .or_else(|| self.find_4_oak())
                .or_else(|| self.find_3_oak_2_oak())
                .or_else(|| self.find_flush())
                .or_else(|| self.find_straight())
                .or_else(|| self.find_3_oak())
                .or_else(|| self.find_2_oak_2_oak())
                .or_else(|| self.find_2_oak())
                .or_else(|| self.find_1_oak()),
        };
        ranking.expect("at least one card in Hand")
    }
    pub fn find_kickers(&self, value: Ranking) -> Kickers {
        Kickers::from(u16::from(self.0) & value.mask())
    }

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).and_then(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|paired| Ranking::FullHouse(triple, paired))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|_| Ranking::Flush(Rank::from(u16::from(self.0))))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .and_then(|_| self.find_rank_of_straight(self.0))
            .map(Ranking::StraightFlush)
    }

    fn find_rank_of_straight(&self, hand: Hand) -> Option<Rank> {
        let ranks = u16::from(hand);
        let mut bits = ranks & Rank::straights();
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        match bits {
            0 => None,
            _ => Some(Rank::from(bits)),
        }
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|s| self.0.of(s).size() == self.0.size())
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::MAX) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                let skip = u64::from(skip);
                let skip = high & skip;
                let skip = skip != 0;
                if skip {
                    continue;
                }
            }
            let mine = u64::from(self.0);
            let mine = high & mine;
            let mine = mine.count_ones() >= n as u32;
            if mine {
                return Some(Rank::from_nibble(high));
            }
        }
        None
    }
}
