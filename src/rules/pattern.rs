use super::arrangement::Arrangement;
use super::category::Category;
use super::strength::Strength;
use crate::Points;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::subsets::Subsets;
use crate::error::Result;
use crate::{BODY_SIZE, HEAD_SIZE};
use crate::{BONUS_DRAGON, BONUS_SIX_PAIRS, BONUS_THREE_FLUSHES, BONUS_THREE_STRAIGHTS};

/// Whole-hand special patterns, declared in priority order.
///
/// A pattern is a property of the 13 cards, not of how they are split.
/// When one is found it decides the arrangement directly and its holder
/// collects a flat bonus at settlement.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Pattern {
    /// All thirteen ranks, once each.
    Dragon,
    /// Six disjoint pairs. A triple counts as a pair plus a single, quads as
    /// two pairs.
    SixPairs,
    /// A 3-card run in the head, straights in the middle and tail.
    ThreeStraights,
    /// A suited head, flushes in the middle and tail.
    ThreeFlushes,
}

impl Pattern {
    /// Highest priority first.
    pub const fn all() -> [Pattern; 4] {
        [
            Pattern::Dragon,
            Pattern::SixPairs,
            Pattern::ThreeStraights,
            Pattern::ThreeFlushes,
        ]
    }
    /// Flat bonus in units of the table base.
    pub const fn bonus(&self) -> Points {
        match self {
            Pattern::Dragon => BONUS_DRAGON,
            Pattern::SixPairs => BONUS_SIX_PAIRS,
            Pattern::ThreeStraights => BONUS_THREE_STRAIGHTS,
            Pattern::ThreeFlushes => BONUS_THREE_FLUSHES,
        }
    }
    pub fn hanzi(&self) -> &'static str {
        match self {
            Pattern::Dragon => "一条龙",
            Pattern::SixPairs => "六对半",
            Pattern::ThreeStraights => "三顺子",
            Pattern::ThreeFlushes => "三同花",
        }
    }

    /// The non-foul arrangement this pattern lays out, if the hand holds it.
    pub fn detect(&self, hand: Hand) -> Option<Arrangement> {
        let arrangement = match self {
            Pattern::Dragon => Self::dragon(hand),
            Pattern::SixPairs => Self::six_pairs(hand),
            Pattern::ThreeStraights => Self::layout(hand, Self::straight, Self::run),
            Pattern::ThreeFlushes => Self::layout(hand, Self::flush, Self::suited),
        };
        arrangement
            .filter(|a| !a.is_foul())
            .map(|a| a.with_pattern(*self))
    }
}

impl Pattern {
    /// Head {3, 4, 2}, middle 5..9, tail T..A. A suited 5..9 would outrank
    /// an offsuit T..A, in which case the two straights trade places.
    fn dragon(hand: Hand) -> Option<Arrangement> {
        if u16::from(hand).count_ones() != 13 || hand.size() != 13 {
            return None;
        }
        let collect = |ranks: &[Rank]| {
            ranks
                .iter()
                .map(|r| hand.rank(*r))
                .fold(Hand::empty(), Hand::add)
        };
        let head = collect(&[Rank::Three, Rank::Four, Rank::Two]);
        let lower = collect(&[Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine]);
        let upper = collect(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        [(lower, upper), (upper, lower)]
            .into_iter()
            .filter_map(|(middle, tail)| Arrangement::from_hands(head, middle, tail).ok())
            .find(|a| !a.is_foul())
    }

    /// Two highest pairs in the tail, next two in the middle, the fifth in
    /// the head. The lowest pair and the odd card are spread as kickers in
    /// whichever order keeps the hand legal and scores best.
    fn six_pairs(hand: Hand) -> Option<Arrangement> {
        let mut pairs = Vec::new();
        let mut spare = Vec::new();
        for rank in Rank::all().into_iter().rev() {
            let cards = hand.rank(rank).descending();
            let chunks = cards.chunks_exact(2);
            spare.extend_from_slice(chunks.remainder());
            pairs.extend(chunks.map(Hand::from));
        }
        if pairs.len() != 6 {
            return None;
        }
        let lowest = pairs.pop().expect("six pairs");
        spare.extend(lowest);
        debug_assert!(spare.len() == 3);
        let tail = Hand::add(pairs[0], pairs[1]);
        let middle = Hand::add(pairs[2], pairs[3]);
        let head = pairs[4];
        const ORDERS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        ORDERS
            .iter()
            .map(|[t, m, h]| {
                (
                    Hand::add(head, Hand::from(spare[*h])),
                    Hand::add(middle, Hand::from(spare[*m])),
                    Hand::add(tail, Hand::from(spare[*t])),
                )
            })
            .filter_map(|(h, m, t)| Arrangement::from_hands(h, m, t).ok())
            .filter(|a| !a.is_foul())
            .max_by(|a, b| a.utility().total_cmp(&b.utility()))
    }

    /// Best non-foul layout whose tail and middle satisfy `body` and whose
    /// head satisfies `head`.
    fn layout(hand: Hand, body: fn(Hand) -> bool, head: fn(Hand) -> bool) -> Option<Arrangement> {
        Subsets::from((BODY_SIZE, hand))
            .filter(|tail| body(*tail))
            .flat_map(move |tail| {
                Subsets::from((BODY_SIZE, hand.minus(&tail)))
                    .filter(move |middle| body(*middle))
                    .map(move |middle| (hand.minus(&tail).minus(&middle), middle, tail))
            })
            .filter(|(h, _, _)| h.size() == HEAD_SIZE && head(*h))
            .filter_map(|(h, m, t)| Arrangement::from_hands(h, m, t).ok())
            .filter(|a| !a.is_foul())
            .max_by(|a, b| a.utility().total_cmp(&b.utility()))
    }

    fn straight(hand: Hand) -> bool {
        matches!(
            Strength::from(hand).category(),
            Category::Straight | Category::StraightFlush
        )
    }
    fn flush(hand: Hand) -> bool {
        matches!(
            Strength::from(hand).category(),
            Category::Flush | Category::StraightFlush
        )
    }
    /// Three consecutive distinct ranks within Three..Ace.
    fn run(hand: Hand) -> bool {
        let ranks = u16::from(hand);
        ranks.count_ones() == 3
            && ranks & !Rank::straights() == 0
            && ranks >> ranks.trailing_zeros() == 0b111
    }
    fn suited(hand: Hand) -> bool {
        hand.suits().count_ones() == 1
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Pattern::Dragon => write!(f, "Dragon"),
            Pattern::SixPairs => write!(f, "SixPairs"),
            Pattern::ThreeStraights => write!(f, "ThreeStraights"),
            Pattern::ThreeFlushes => write!(f, "ThreeFlushes"),
        }
    }
}

/// Look for a special pattern in 13 distinct cards, highest priority first.
///
/// `Ok(None)` means the hand should go through the regular search.
pub fn detect_special_pattern(cards: &[Card]) -> Result<Option<Arrangement>> {
    let hand = Hand::dealt(cards)?;
    let found = Pattern::all().into_iter().find_map(|p| p.detect(hand));
    if let Some(ref arrangement) = found {
        log::trace!("special pattern {}", arrangement);
    }
    Ok(found)
}
