use super::category::Category;
use super::strength::Strength;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::error::Error;
use crate::error::Result;
use crate::{BODY_SIZE, HEAD_SIZE};
use std::cmp::Ordering;

/// Where a grouping sits in an arrangement.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Position {
    Head,
    Middle,
    Tail,
}

impl Position {
    pub const fn all() -> [Position; 3] {
        [Position::Head, Position::Middle, Position::Tail]
    }
    pub const fn size(&self) -> usize {
        match self {
            Position::Head => HEAD_SIZE,
            Position::Middle | Position::Tail => BODY_SIZE,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Position::Head => write!(f, "head"),
            Position::Middle => write!(f, "middle"),
            Position::Tail => write!(f, "tail"),
        }
    }
}

/// A 3- or 5-card set of cards with its evaluated strength.
///
/// Immutable: "moving a card" means building new groupings from new hands.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Grouping {
    hand: Hand,
    strength: Strength,
}

impl Grouping {
    pub fn hand(&self) -> Hand {
        self.hand
    }
    pub fn cards(&self) -> Vec<Card> {
        self.hand.descending()
    }
    pub fn size(&self) -> usize {
        self.hand.size()
    }
    pub fn strength(&self) -> Strength {
        self.strength
    }
    pub fn category(&self) -> Category {
        self.strength.category()
    }
}

impl TryFrom<Hand> for Grouping {
    type Error = Error;
    fn try_from(hand: Hand) -> Result<Self> {
        match hand.size() {
            HEAD_SIZE | BODY_SIZE => Ok(Self {
                hand,
                strength: Strength::from(hand),
            }),
            n => Err(Error::InvalidGroupingSize(n)),
        }
    }
}
impl TryFrom<&[Card]> for Grouping {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self> {
        match cards.len() {
            HEAD_SIZE | BODY_SIZE => Self::try_from(Hand::distinct(cards)?),
            n => Err(Error::InvalidGroupingSize(n)),
        }
    }
}
impl TryFrom<&str> for Grouping {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self> {
        Self::try_from(Card::parse(s).map_err(Error::InvalidCardSet)?.as_slice())
    }
}

impl std::fmt::Display for Grouping {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}] {}", self.hand, self.strength.category())
    }
}

/// Classify 3 or 5 distinct cards.
pub fn classify(cards: &[Card]) -> Result<Strength> {
    Grouping::try_from(cards).map(|g| g.strength())
}

/// Compare two groupings for the given position.
///
/// `Head` compares a 3-card head against another head or against the
/// 5-card middle above it. `Middle` and `Tail` compare 5-card groupings.
/// Category decides first, then the descending tiebreak key.
pub fn compare_groupings(a: &Grouping, b: &Grouping, position: Position) -> Result<Ordering> {
    match (position, a.size(), b.size()) {
        (Position::Head, HEAD_SIZE, HEAD_SIZE | BODY_SIZE) => Ok(a.strength.versus(&b.strength)),
        (Position::Middle | Position::Tail, BODY_SIZE, BODY_SIZE) => Ok(a.strength.cmp(&b.strength)),
        (position, n, _) if n != position.size() => Err(Error::InvalidGroupingSize(n)),
        (_, _, n) => Err(Error::InvalidGroupingSize(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::rules::ranking::Ranking;

    fn grouping(s: &str) -> Grouping {
        Grouping::try_from(s).unwrap()
    }

    #[test]
    fn classify_reports_category_and_key() {
        let strength = classify(&Card::parse("3s 3h 3d").unwrap()).unwrap();
        assert!(strength.category() == Category::ThreeOAK);
        assert!(strength.ranking() == Ranking::ThreeOAK(Rank::Three));
    }

    #[test]
    fn classify_rejects_bad_sizes() {
        assert!(classify(&Card::parse("3s 3h").unwrap()) == Err(Error::InvalidGroupingSize(2)));
        assert!(classify(&Card::parse("3s 3h 4d 5c").unwrap()) == Err(Error::InvalidGroupingSize(4)));
        assert!(classify(&[]) == Err(Error::InvalidGroupingSize(0)));
    }

    #[test]
    fn classify_rejects_duplicates() {
        assert!(matches!(
            classify(&Card::parse("3s 3s 4d").unwrap()),
            Err(Error::InvalidCardSet(_))
        ));
    }

    #[test]
    fn classify_is_order_independent() {
        let a = classify(&Card::parse("Ks Kh Qd Qc 5s").unwrap()).unwrap();
        let b = classify(&Card::parse("5s Qc Kh Qd Ks").unwrap()).unwrap();
        assert!(a == b);
    }

    #[test]
    fn identical_two_pairs_tie() {
        let a = grouping("Ks Kh Qd Qc 5s");
        let b = grouping("Kd Kc Qs Qh 5h");
        assert!(compare_groupings(&a, &b, Position::Middle) == Ok(Ordering::Equal));
        assert!(compare_groupings(&b, &a, Position::Tail) == Ok(Ordering::Equal));
    }

    #[test]
    fn category_before_key() {
        let pair = grouping("2s 2h Ad Kc Qs");
        let two_pair = grouping("3s 3h 4d 4c 5s");
        assert!(compare_groupings(&pair, &two_pair, Position::Middle) == Ok(Ordering::Less));
        assert!(compare_groupings(&two_pair, &pair, Position::Middle) == Ok(Ordering::Greater));
    }

    #[test]
    fn head_against_middle() {
        let head = grouping("As Ah Kd");
        let middle = grouping("3s 3h 4d 4c 5s");
        assert!(compare_groupings(&head, &middle, Position::Head) == Ok(Ordering::Less));
        let middle = grouping("Kc Qs Jh 9d 7c");
        assert!(compare_groupings(&head, &middle, Position::Head) == Ok(Ordering::Greater));
    }

    #[test]
    fn position_shape_checked() {
        let head = grouping("As Ah Kd");
        let body = grouping("3s 3h 4d 4c 5s");
        assert!(compare_groupings(&body, &head, Position::Head) == Err(Error::InvalidGroupingSize(5)));
        assert!(compare_groupings(&head, &body, Position::Middle) == Err(Error::InvalidGroupingSize(3)));
        assert!(compare_groupings(&body, &head, Position::Tail) == Err(Error::InvalidGroupingSize(3)));
    }
}
