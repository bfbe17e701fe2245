use crate::cards::rank::Rank;

/// A grouping's kicker ranks as a u16 rank mask.
///
/// Kickers are always distinct ranks, so comparing two masks of the same
/// popcount numerically is the same as comparing their ranks
/// lexicographically from the top down.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Kickers(u16);

impl Kickers {
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// Keep only the `n` highest kickers.
    pub fn top(&self, n: usize) -> Self {
        let mut rank = self.0;
        while n < rank.count_ones() as usize {
            rank &= rank - 1;
        }
        Self(rank)
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism, highest rank first
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self) {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
