use super::player::Player;
use super::stakes::Stakes;
use crate::Points;
use crate::error::Error;
use crate::error::Result;
use crate::rules::grouping::Position;
use std::cmp::Ordering;

/// A round ready for settlement: every seat has submitted an arrangement.
///
/// Each unordered pair of seats settles independently and the results are
/// netted per seat. Pairwise results are zero-sum. A legal special pattern
/// skips grouping comparison against every legal opponent and is paid only
/// its flat bonus, once per qualifying seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    players: Vec<Player>,
    stakes: Stakes,
}

impl TryFrom<(&[Player], Stakes)> for Table {
    type Error = Error;
    fn try_from((players, stakes): (&[Player], Stakes)) -> Result<Self> {
        match players.len() {
            0 | 1 => Err(Error::TooFewPlayers(players.len())),
            _ => Ok(Self {
                players: players.to_vec(),
                stakes,
            }),
        }
    }
}

impl Table {
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn stakes(&self) -> &Stakes {
        &self.stakes
    }

    /// Net points per seat, in seat order.
    pub fn settle(&self) -> Vec<Points> {
        let n = self.players.len();
        let mut points = vec![0 as Points; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let delta = self.duel(&self.players[i], &self.players[j]);
                points[i] += delta;
                points[j] -= delta;
            }
        }
        for (seat, player) in self.players.iter().enumerate() {
            points[seat] += self.bonus(player);
        }
        log::debug!("{:<32}{:?}", "settled table", points);
        points
    }

    /// What `a` wins from `b`; negative when `a` pays. Fouls pay the
    /// penalty whatever the other seat holds.
    pub fn duel(&self, a: &Player, b: &Player) -> Points {
        let penalty = self.stakes.foul_penalty() * self.stakes.base();
        match (a.is_foul(), b.is_foul()) {
            (true, true) => 0,
            (true, false) => -penalty,
            (false, true) => penalty,
            (false, false) => match (a.pattern(), b.pattern()) {
                (None, None) => self.compare(a, b) * self.stakes.base(),
                _ => 0,
            },
        }
    }

    /// Grouping-by-grouping result between two legal hands, in units.
    fn compare(&self, a: &Player, b: &Player) -> Points {
        let outcomes = Position::all().map(|position| {
            let mine = a.arrangement().grouping(position);
            let them = b.arrangement().grouping(position);
            let order = mine.strength().cmp(&them.strength());
            let units = match order {
                Ordering::Greater => self.stakes.royalty(position, mine.category()),
                Ordering::Less => -self.stakes.royalty(position, them.category()),
                Ordering::Equal => 0,
            };
            (order, units)
        });
        let total = outcomes.iter().map(|(_, units)| units).sum::<Points>();
        let swept = outcomes.iter().all(|(o, _)| *o == Ordering::Greater)
            || outcomes.iter().all(|(o, _)| *o == Ordering::Less);
        match swept {
            true => total * self.stakes.sweeping(),
            false => total,
        }
    }

    /// Flat side payment for a legal special pattern.
    fn bonus(&self, player: &Player) -> Points {
        match (self.stakes.specials(), player.pattern()) {
            (true, Some(pattern)) => pattern.bonus() * self.stakes.base(),
            _ => 0,
        }
    }
}

/// Net points per player for one round.
///
/// Fails with [`Error::TooFewPlayers`] below two players.
pub fn score(players: &[Player], stakes: &Stakes) -> Result<Vec<Points>> {
    Table::try_from((players, *stakes)).map(|table| table.settle())
}
