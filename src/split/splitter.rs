use super::options::Options;
use crate::BODY_SIZE;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::subsets::Subsets;
use crate::error::Result;
use crate::rules::arrangement::Arrangement;
use crate::rules::pattern::detect_special_pattern;
use crate::rules::strength::Strength;
use std::time::Instant;

/// Pruned search over the head/middle/tail partitions of one hand.
///
/// All C(13,5) tails are pre-ranked by standalone strength and only the
/// best few are expanded. For each, the C(8,5) middles are ranked the same
/// way, anything stronger than the tail is dropped, and the head is what
/// remains. Survivors are ordered by [`Arrangement::utility`].
pub struct Splitter {
    hand: Hand,
    options: Options,
}

impl From<(Hand, Options)> for Splitter {
    fn from((hand, options): (Hand, Options)) -> Self {
        Self { hand, options }
    }
}

impl Splitter {
    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// Up to `options.results` legal arrangements, best first. Never empty
    /// for a 13-card hand: if pruning or the budget leaves nothing, the
    /// fallback split is returned alone.
    pub fn solve(&self) -> Result<Vec<Arrangement>> {
        let deadline = self.options.budget().map(|b| Instant::now() + b);
        let tails = self.tails();
        let mut found = self.expand(&tails, deadline);
        if deadline.is_some_and(|d| Instant::now() >= d) {
            log::warn!("search budget spent for {}", self.hand);
        }
        log::debug!(
            "{:<32}{:<16}{:<16}",
            "smart split",
            tails.len(),
            found.len()
        );
        if found.is_empty() {
            log::warn!("no legal candidate survived pruning, falling back for {}", self.hand);
            return Ok(vec![Arrangement::fallback(self.hand)?]);
        }
        found.sort_by(|a, b| b.utility().total_cmp(&a.utility()));
        found.truncate(self.options.results());
        Ok(found)
    }

    /// The strongest tails by standalone strength.
    fn tails(&self) -> Vec<(Strength, Hand)> {
        let mut tails = Subsets::from((BODY_SIZE, self.hand))
            .map(|tail| (Strength::from(tail), tail))
            .collect::<Vec<(Strength, Hand)>>();
        tails.sort_by(|a, b| b.0.cmp(&a.0));
        tails.truncate(self.options.tails());
        tails
    }

    #[cfg(feature = "native")]
    fn expand(&self, tails: &[(Strength, Hand)], deadline: Option<Instant>) -> Vec<Arrangement> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        tails
            .par_iter()
            .map(|tail| self.middles(tail, deadline))
            .collect::<Vec<Vec<Arrangement>>>()
            .into_iter()
            .flatten()
            .collect()
    }

    #[cfg(not(feature = "native"))]
    fn expand(&self, tails: &[(Strength, Hand)], deadline: Option<Instant>) -> Vec<Arrangement> {
        tails
            .iter()
            .flat_map(|tail| self.middles(tail, deadline))
            .collect()
    }

    /// Legal arrangements under one tail.
    fn middles(&self, &(strength, tail): &(Strength, Hand), deadline: Option<Instant>) -> Vec<Arrangement> {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            log::trace!("skipping tail {}", tail);
            return Vec::new();
        }
        let rest = self.hand.minus(&tail);
        let mut middles = Subsets::from((BODY_SIZE, rest))
            .map(|middle| (Strength::from(middle), middle))
            .filter(|(s, _)| *s <= strength)
            .collect::<Vec<(Strength, Hand)>>();
        middles.sort_by(|a, b| b.0.cmp(&a.0));
        middles
            .into_iter()
            .take(self.options.middles())
            .filter_map(|(_, middle)| Arrangement::from_hands(rest.minus(&middle), middle, tail).ok())
            .filter(|a| !a.is_foul())
            .collect()
    }
}

/// Find strong legal arrangements for 13 distinct cards.
///
/// A special pattern short-circuits to its own arrangement. Otherwise the
/// pruned search runs, with the fallback split as a floor, so every
/// well-formed hand gets at least one non-foul answer.
pub fn search(cards: &[Card], options: &Options) -> Result<Vec<Arrangement>> {
    match detect_special_pattern(cards)? {
        Some(special) => Ok(vec![special]),
        None => Splitter::from((Hand::dealt(cards)?, *options)).solve(),
    }
}
