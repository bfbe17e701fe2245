/// Card rank in Thirteen Waters strength order.
///
/// Unlike standard poker the 2 is the highest rank, so the discriminants run
/// from Three = 0 up to Two = 12 and the derived `Ord` is the game order.
/// Only Three through Ace form straights; see [`Rank::straights`].
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    #[default]
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl Rank {
    pub const MIN: Self = Rank::Three;
    pub const MAX: Self = Rank::Two;

    /// All thirteen ranks, weakest first.
    pub const fn all() -> [Rank; 13] {
        [
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
            Rank::Ace,
            Rank::Two,
        ]
    }
    /// Strict total order over ranks, 2 highest. Total on every rank.
    pub const fn value(&self) -> u8 {
        *self as u8
    }
    /// Rank mask of the ranks that may appear in a straight (Three..=Ace).
    pub const fn straights() -> u16 {
        Self::mask() & !(1 << Rank::Two as u16)
    }
    const fn mask() -> u16 {
        0b1111111111111
    }
    /// Recover a rank from a single rank's card nibble `0xF << 4 * rank`.
    pub fn from_nibble(nibble: u64) -> Self {
        Rank::from((nibble.trailing_zeros() / 4) as u8)
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Three,
            1 => Rank::Four,
            2 => Rank::Five,
            3 => Rank::Six,
            4 => Rank::Seven,
            5 => Rank::Eight,
            6 => Rank::Nine,
            7 => Rank::Ten,
            8 => Rank::Jack,
            9 => Rank::Queen,
            10 => Rank::King,
            11 => Rank::Ace,
            12 => Rank::Two,
            _ => unreachable!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// u16 isomorphism
///
/// With 13 ranks we only need 13 bits. A mask with several ranks
/// collapses to its highest one.
impl From<u16> for Rank {
    fn from(n: u16) -> Rank {
        let msb = (16 - 1 - (n & Self::mask()).leading_zeros()) as u8;
        Rank::from(msb)
    }
}
impl From<Rank> for u16 {
    fn from(r: Rank) -> u16 {
        1 << u8::from(r)
    }
}

/// u64 injection
/// the four card bits of this rank inside a Hand
impl From<Rank> for u64 {
    fn from(r: Rank) -> u64 {
        0xF << (u8::from(r) * 4)
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "T",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Two => "2",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn bijective_u16() {
        let rank = Rank::Jack;
        assert!(rank == Rank::from(u16::from(rank)));
    }

    #[test]
    fn injective_u64() {
        assert!(u64::from(Rank::Five) == 0b111100000000);
        assert!(Rank::from_nibble(u64::from(Rank::King)) == Rank::King);
    }

    #[test]
    fn two_is_highest() {
        assert!(Rank::Two > Rank::Ace);
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Three < Rank::Four);
        assert!(Rank::all().windows(2).all(|w| w[0].value() < w[1].value()));
    }

    #[test]
    fn two_never_straightens() {
        assert!(Rank::straights() & u16::from(Rank::Two) == 0);
        assert!(Rank::straights().count_ones() == 12);
    }

    #[test]
    fn parse_ten_either_way() {
        assert!(Rank::try_from("10") == Ok(Rank::Ten));
        assert!(Rank::try_from("t") == Ok(Rank::Ten));
        assert!(Rank::try_from("1").is_err());
    }
}
