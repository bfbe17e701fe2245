use crate::rules::arrangement::Arrangement;
use crate::rules::pattern::Pattern;

/// One seat's final arrangement at settlement.
///
/// The foul flag is derived from the arrangement, never supplied, so a
/// player cannot be scored as legal while holding a fouled hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    arrangement: Arrangement,
    foul: bool,
}

impl From<Arrangement> for Player {
    fn from(arrangement: Arrangement) -> Self {
        Self {
            foul: arrangement.is_foul(),
            arrangement,
        }
    }
}

impl Player {
    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }
    pub fn is_foul(&self) -> bool {
        self.foul
    }
    /// The special pattern this player gets paid for. A fouled hand
    /// collects nothing.
    pub fn pattern(&self) -> Option<Pattern> {
        match self.foul {
            true => None,
            false => self.arrangement.pattern(),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.foul {
            true => write!(f, "{} FOUL", self.arrangement),
            false => write!(f, "{}", self.arrangement),
        }
    }
}
