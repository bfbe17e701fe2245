use crate::Points;
use crate::rules::category::Category;
use crate::rules::grouping::Position;
use crate::{FOUL_PENALTY, SWEEP_MULTIPLIER};
use crate::{ROYALTY_HEAD_TRIPS, ROYALTY_MIDDLE_FULL_HOUSE, ROYALTY_MIDDLE_QUADS};
use crate::{ROYALTY_MIDDLE_STRAIGHT_FLUSH, ROYALTY_TAIL_QUADS, ROYALTY_TAIL_STRAIGHT_FLUSH};

/// Table rules for settlement.
///
/// The default is the plain game: one unit per grouping, a fixed foul
/// penalty and flat special bonuses. [`Stakes::classic`] adds royalties for
/// strong winning groupings and doubles a clean sweep (打枪).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Stakes {
    base: Points,
    foul_penalty: Points,
    royalties: bool,
    sweep: bool,
    specials: bool,
}

impl Default for Stakes {
    fn default() -> Self {
        Self {
            base: 1,
            foul_penalty: FOUL_PENALTY,
            royalties: false,
            sweep: false,
            specials: true,
        }
    }
}

impl Stakes {
    pub fn classic() -> Self {
        Self {
            royalties: true,
            sweep: true,
            ..Self::default()
        }
    }

    pub fn base(&self) -> Points {
        self.base
    }
    pub fn foul_penalty(&self) -> Points {
        self.foul_penalty
    }
    pub fn royalties(&self) -> bool {
        self.royalties
    }
    pub fn sweep(&self) -> bool {
        self.sweep
    }
    pub fn specials(&self) -> bool {
        self.specials
    }

    pub fn with_base(self, base: Points) -> Self {
        Self { base, ..self }
    }
    pub fn with_foul_penalty(self, foul_penalty: Points) -> Self {
        Self {
            foul_penalty,
            ..self
        }
    }
    pub fn with_royalties(self, royalties: bool) -> Self {
        Self { royalties, ..self }
    }
    pub fn with_sweep(self, sweep: bool) -> Self {
        Self { sweep, ..self }
    }
    pub fn with_specials(self, specials: bool) -> Self {
        Self { specials, ..self }
    }

    /// Units paid for winning `position` with a grouping of `category`.
    pub fn royalty(&self, position: Position, category: Category) -> Points {
        if !self.royalties {
            return 1;
        }
        match (position, category) {
            (Position::Head, Category::ThreeOAK) => ROYALTY_HEAD_TRIPS,
            (Position::Middle, Category::FullHouse) => ROYALTY_MIDDLE_FULL_HOUSE,
            (Position::Middle, Category::FourOAK) => ROYALTY_MIDDLE_QUADS,
            (Position::Middle, Category::StraightFlush) => ROYALTY_MIDDLE_STRAIGHT_FLUSH,
            (Position::Tail, Category::FourOAK) => ROYALTY_TAIL_QUADS,
            (Position::Tail, Category::StraightFlush) => ROYALTY_TAIL_STRAIGHT_FLUSH,
            _ => 1,
        }
    }
    /// Multiplier for a pair result where one side took every grouping.
    pub fn sweeping(&self) -> Points {
        match self.sweep {
            true => SWEEP_MULTIPLIER,
            false => 1,
        }
    }
}
