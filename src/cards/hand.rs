use super::card::Card;
use super::deck::Deck;
use super::rank::Rank;
use super::suit::Suit;
use crate::Arbitrary;
use crate::error::Error;

/// An unordered set of Cards.
///
/// Stored as a single u64 where only the 52 LSBs are used and each bit is
/// one card. Set operations are bitwise, there is no heap allocation, and two
/// hands holding the same cards are equal regardless of how they were built.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand(u64);

impl Hand {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// Disjoint union.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    /// Set difference by value.
    pub fn minus(&self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn overlaps(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    /// The cards of one suit.
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    /// How many cards of a rank are held.
    pub fn count(&self, rank: Rank) -> usize {
        (self.0 & u64::from(rank)).count_ones() as usize
    }
    /// The cards of one rank.
    pub fn rank(&self, rank: Rank) -> Hand {
        Self(self.0 & u64::from(rank))
    }
    /// Suits present, as a bitmask over `Suit as u8`.
    pub fn suits(&self) -> u8 {
        Suit::all()
            .iter()
            .filter(|s| self.of(s).size() > 0)
            .map(|s| 1 << u8::from(*s))
            .fold(0, |a, b| a | b)
    }
    /// Cards from strongest to weakest.
    pub fn descending(&self) -> Vec<Card> {
        let mut cards = Vec::<Card>::from(*self);
        cards.reverse();
        cards
    }

    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

impl Arbitrary for Hand {
    /// A uniformly random 13-card deal.
    fn random() -> Self {
        Deck::new().deal(crate::HAND_SIZE)
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.size() == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out sorted)
/// we SUM/OR the cards to get the bitstring
/// [3d, 5s, Jc, Js]
/// xxxxxxxxxxxx 0000000000000000000000001010000000000000000010000001
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.into_iter().collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from(cards.as_slice())
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.iter().map(|c| u64::from(*c)).fold(0u64, |a, b| a | b))
    }
}
impl Hand {
    /// Collect cards that must all be distinct.
    pub fn distinct(cards: &[Card]) -> Result<Self, Error> {
        let hand = Self::from(cards);
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(Error::InvalidCardSet(format!(
                "{} duplicate card(s) among {}",
                cards.len() - hand.size(),
                cards.len()
            ))),
        }
    }
    /// Collect a full 13-card deal.
    pub fn dealt(cards: &[Card]) -> Result<Self, Error> {
        match cards.len() {
            crate::HAND_SIZE => Self::distinct(cards),
            n => Err(Error::InvalidCardSet(format!(
                "{} cards (expected {})",
                n,
                crate::HAND_SIZE
            ))),
        }
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s).map_err(Error::InvalidCardSet)?;
        Self::distinct(&cards)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.descending();
        for (i, card) in cards.iter().enumerate() {
            match i {
                0 => write!(f, "{}", card)?,
                _ => write!(f, " {}", card)?,
            }
        }
        Ok(())
    }
}
