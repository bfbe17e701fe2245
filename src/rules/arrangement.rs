use super::category::Category;
use super::grouping::Grouping;
use super::grouping::Position;
use super::grouping::compare_groupings;
use super::pattern::Pattern;
use super::strength::Strength;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::subsets::Subsets;
use crate::error::Error;
use crate::error::Result;
use crate::{BODY_SIZE, HAND_SIZE, HEAD_SIZE};
use crate::{BONUS_HEAD_PAIR, BONUS_HEAD_TRIPS, BONUS_MIDDLE_MADE};
use crate::{Utility, WEIGHT_HEAD, WEIGHT_MIDDLE, WEIGHT_TAIL};
use std::cmp::Ordering;

/// A head/middle/tail partition of 13 distinct cards.
///
/// Construction only checks shape (3/5/5, no overlaps); a constructed
/// arrangement may still be a foul, which is what [`Arrangement::is_foul`]
/// reports. Arrangements produced by special-pattern detection remember
/// their [`Pattern`] so the scorer can pay the bonus.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    head: Grouping,
    middle: Grouping,
    tail: Grouping,
    pattern: Option<Pattern>,
}

impl Arrangement {
    pub fn new(head: Grouping, middle: Grouping, tail: Grouping) -> Result<Self> {
        let shape = Error::InvalidArrangementShape {
            head: head.size(),
            middle: middle.size(),
            tail: tail.size(),
        };
        match (head.size(), middle.size(), tail.size()) {
            (HEAD_SIZE, BODY_SIZE, BODY_SIZE)
                if !head.hand().overlaps(&middle.hand())
                    && !head.hand().overlaps(&tail.hand())
                    && !middle.hand().overlaps(&tail.hand()) =>
            {
                Ok(Self {
                    head,
                    middle,
                    tail,
                    pattern: None,
                })
            }
            _ => Err(shape),
        }
    }
    /// Build from three disjoint hands already known to be 3/5/5.
    pub(crate) fn from_hands(head: Hand, middle: Hand, tail: Hand) -> Result<Self> {
        Self::new(
            Grouping::try_from(head)?,
            Grouping::try_from(middle)?,
            Grouping::try_from(tail)?,
        )
    }
    pub fn with_pattern(self, pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    pub fn head(&self) -> &Grouping {
        &self.head
    }
    pub fn middle(&self) -> &Grouping {
        &self.middle
    }
    pub fn tail(&self) -> &Grouping {
        &self.tail
    }
    pub fn grouping(&self, position: Position) -> &Grouping {
        match position {
            Position::Head => &self.head,
            Position::Middle => &self.middle,
            Position::Tail => &self.tail,
        }
    }
    pub fn pattern(&self) -> Option<Pattern> {
        self.pattern
    }
    /// All 13 cards.
    pub fn hand(&self) -> Hand {
        Hand::add(
            Hand::add(self.head.hand(), self.middle.hand()),
            self.tail.hand(),
        )
    }

    /// Head stronger than middle, or middle stronger than tail.
    /// Equal adjacent groupings are fine.
    pub fn is_foul(&self) -> bool {
        self.head.strength().versus(&self.middle.strength()) == Ordering::Greater
            || self.middle.strength() > self.tail.strength()
    }

    /// Weighted desirability: tail > middle > head, plus bonuses for a
    /// strong head and a made middle.
    pub fn utility(&self) -> Utility {
        let head = self.head.strength().utility() * WEIGHT_HEAD;
        let middle = self.middle.strength().utility() * WEIGHT_MIDDLE;
        let tail = self.tail.strength().utility() * WEIGHT_TAIL;
        let bonus = match self.head.category() {
            Category::ThreeOAK => BONUS_HEAD_TRIPS,
            Category::OnePair => BONUS_HEAD_PAIR,
            _ => 0.0,
        } + match self.middle.category() {
            Category::Straight | Category::Flush | Category::FullHouse => BONUS_MIDDLE_MADE,
            _ => 0.0,
        };
        head + middle + tail + bonus
    }
}

impl Arrangement {
    /// Strongest 5 cards by rank as tail, next 5 as middle, weakest 3 as
    /// head. Simple, but rank order alone can foul: a high-card tail over
    /// a paired middle.
    pub fn ranked(hand: Hand) -> Result<Self> {
        let cards = hand.descending();
        match cards.len() {
            HAND_SIZE => Self::from_hands(
                Hand::from(&cards[10..13]),
                Hand::from(&cards[5..10]),
                Hand::from(&cards[0..5]),
            ),
            n => Err(Error::InvalidCardSet(format!("{} cards (expected 13)", n))),
        }
    }

    /// Strongest 5-card grouping as tail, strongest of the remaining 8 as
    /// middle, the last 3 as head. Never a foul: the middle is one of the
    /// tail's candidates, and the head plus any two leftovers is one of the
    /// middle's candidates.
    pub fn greedy(hand: Hand) -> Result<Self> {
        match hand.size() {
            HAND_SIZE => {
                let tail = Self::strongest(hand);
                let rest = hand.minus(&tail);
                let middle = Self::strongest(rest);
                let head = rest.minus(&middle);
                Self::from_hands(head, middle, tail)
            }
            n => Err(Error::InvalidCardSet(format!("{} cards (expected 13)", n))),
        }
    }

    /// The rank-sorted split when it holds, otherwise the greedy split.
    pub fn fallback(hand: Hand) -> Result<Self> {
        let ranked = Self::ranked(hand)?;
        match ranked.is_foul() {
            false => Ok(ranked),
            true => Self::greedy(hand),
        }
    }

    fn strongest(hand: Hand) -> Hand {
        Subsets::from((BODY_SIZE, hand))
            .map(|h| (Strength::from(h), h))
            .max()
            .map(|(_, h)| h)
            .expect("at least five cards to choose from")
    }
}

impl TryFrom<(&[Card], &[Card], &[Card])> for Arrangement {
    type Error = Error;
    fn try_from((head, middle, tail): (&[Card], &[Card], &[Card])) -> Result<Self> {
        let shape = Error::InvalidArrangementShape {
            head: head.len(),
            middle: middle.len(),
            tail: tail.len(),
        };
        let all = [head, middle, tail].concat();
        match (head.len(), middle.len(), tail.len()) {
            (HEAD_SIZE, BODY_SIZE, BODY_SIZE) if Hand::from(all.as_slice()).size() == HAND_SIZE => {
                Self::from_hands(Hand::from(head), Hand::from(middle), Hand::from(tail))
            }
            _ => Err(shape),
        }
    }
}
impl TryFrom<(&str, &str, &str)> for Arrangement {
    type Error = Error;
    fn try_from((head, middle, tail): (&str, &str, &str)) -> Result<Self> {
        let head = Card::parse(head).map_err(Error::InvalidCardSet)?;
        let middle = Card::parse(middle).map_err(Error::InvalidCardSet)?;
        let tail = Card::parse(tail).map_err(Error::InvalidCardSet)?;
        Self::try_from((head.as_slice(), middle.as_slice(), tail.as_slice()))
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.head, self.middle, self.tail)?;
        if let Some(pattern) = self.pattern {
            write!(f, " ({})", pattern)?;
        }
        Ok(())
    }
}

/// Whether head/middle/tail break the non-decreasing strength rule.
///
/// Fails with [`Error::InvalidArrangementShape`] unless the input is
/// exactly 3/5/5 distinct cards.
pub fn is_foul(head: &[Card], middle: &[Card], tail: &[Card]) -> Result<bool> {
    let arrangement = Arrangement::try_from((head, middle, tail))?;
    let lower = compare_groupings(arrangement.head(), arrangement.middle(), Position::Head)?;
    let upper = compare_groupings(arrangement.middle(), arrangement.tail(), Position::Middle)?;
    Ok(lower == Ordering::Greater || upper == Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn ordered_is_not_foul() {
        let foul = is_foul(
            &cards("3s 4h 6d"),
            &cards("8s 8h 9d Tc Js"),
            &cards("Ks Kh Kd 5c 5s"),
        );
        assert!(foul == Ok(false));
    }

    #[test]
    fn strong_head_fouls() {
        let foul = is_foul(
            &cards("As Ah Ad"),
            &cards("8s 8h 9d Tc Js"),
            &cards("Ks Kh Kd 5c 5s"),
        );
        assert!(foul == Ok(true));
    }

    #[test]
    fn strong_middle_fouls() {
        let foul = is_foul(
            &cards("3s 4h 6d"),
            &cards("Ks Kh Kd 5c 5s"),
            &cards("8s 8h 9d Tc Js"),
        );
        assert!(foul == Ok(true));
    }

    #[test]
    fn equal_adjacent_groupings_do_not_foul() {
        let foul = is_foul(
            &cards("3s 4h 6d"),
            &cards("Ks Kh Qd Qc 5s"),
            &cards("Kd Kc Qs Qh 5h"),
        );
        assert!(foul == Ok(false));
        let foul = is_foul(
            &cards("8s 8h Kd"),
            &cards("8d 8c Ks 5h 3c"),
            &cards("As Ah Ad 2c 2s"),
        );
        assert!(foul == Ok(false));
    }

    #[test]
    fn fourteen_cards_is_a_shape_error() {
        let foul = is_foul(
            &cards("3s 4h 6d 7c"),
            &cards("8s 8h 9d Tc Js"),
            &cards("Ks Kh Kd 5c 5s"),
        );
        assert!(
            foul == Err(Error::InvalidArrangementShape {
                head: 4,
                middle: 5,
                tail: 5
            })
        );
    }

    #[test]
    fn shared_card_is_a_shape_error() {
        let foul = is_foul(
            &cards("3s 4h 6d"),
            &cards("8s 8h 9d Tc Js"),
            &cards("Ks Kh Kd 5c 3s"),
        );
        assert!(matches!(foul, Err(Error::InvalidArrangementShape { .. })));
    }

    #[test]
    fn ranked_split_can_foul() {
        let hand = Hand::try_from("As Kh Qd Jc 9s 8h 8d 7c 6s 5h 4d 4c 3s").unwrap();
        let ranked = Arrangement::ranked(hand).unwrap();
        assert!(ranked.tail().category() == Category::HighCard);
        assert!(ranked.middle().category() == Category::OnePair);
        assert!(ranked.is_foul());
        let fallback = Arrangement::fallback(hand).unwrap();
        assert!(!fallback.is_foul());
        assert!(fallback.hand() == hand);
    }

    #[test]
    fn greedy_never_fouls() {
        for _ in 0..64 {
            let hand = Hand::random();
            let greedy = Arrangement::greedy(hand).unwrap();
            assert!(!greedy.is_foul(), "{}", greedy);
            assert!(greedy.hand() == hand);
        }
    }

    #[test]
    fn fallback_never_fouls() {
        for _ in 0..64 {
            let hand = Hand::random();
            let fallback = Arrangement::fallback(hand).unwrap();
            assert!(!fallback.is_foul(), "{}", fallback);
        }
    }

    #[test]
    fn utility_prefers_made_middle() {
        let plain = Arrangement::try_from(("3s 4h 6d", "8s 8h 9d Tc Qs", "Ks Kh Kd 5c 5s")).unwrap();
        let made = Arrangement::try_from(("3s 4h 6d", "8s 7h 9d Tc Js", "Ks Kh Kd 5c 5s")).unwrap();
        assert!(made.utility() > plain.utility());
    }
}
