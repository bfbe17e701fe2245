use super::rank::Rank;
use super::suit::Suit;
use std::cmp::Ordering;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` with `rank * 4 + suit`.
/// Because ranks are declared in game order, the derived ordering sorts by
/// rank (2 highest) and then by the fixed suit tiebreak.
///
/// # Representations
///
/// - `u8`: compact index `0..52`
/// - `u64`: single-bit representation for set membership in [`Hand`]
///
/// # Parsing
///
/// `"As"`, `"Th"`, `"10h"` and `"T♠"` all parse. Use [`Card::parse`] for a
/// whitespace-separated list.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
}

/// Deterministic display/sort order: rank first, then suit.
pub fn compare_cards_for_sort(a: &Card, b: &Card) -> Ordering {
    a.rank().cmp(&b.rank()).then(a.suit().cmp(&b.suit()))
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0..52
/// 3d
/// 0
/// 2s
/// 51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
/// the last character is the suit, everything before it the rank
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((i, _)) if i > 0 => {
                let rank = Rank::try_from(&s[..i])?;
                let suit = Suit::try_from(&s[i..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}
impl Card {
    /// Parses whitespace-separated card notations into a vector of cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}
