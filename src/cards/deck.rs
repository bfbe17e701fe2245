use super::card::Card;
use super::hand::Hand;
use crate::HAND_SIZE;
use crate::error::Error;
use crate::error::Result;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] of the remaining cards. Used to deal random 13-card
/// hands for property tests, benchmarks and simulated tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck. There are no jokers.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n);
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Deals `n` random cards as one hand.
    pub fn deal(&mut self, n: usize) -> Hand {
        (0..n)
            .map(|_| self.draw())
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals a full table of 13-card hands from what is left.
    pub fn table(&mut self, players: usize) -> Result<Vec<Hand>> {
        match players * HAND_SIZE <= self.size() {
            true => Ok((0..players).map(|_| self.deal(HAND_SIZE)).collect()),
            false => Err(Error::InvalidCardSet(format!(
                "{} cards left, {} seats need {}",
                self.size(),
                players,
                players * HAND_SIZE
            ))),
        }
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0.size() {
            0 => None,
            _ => Some(self.draw()),
        }
    }
}
