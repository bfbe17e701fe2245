/// Card suit: diamonds, clubs, hearts, spades.
///
/// Suits never decide a grouping's strength. The fixed order
/// (♦ < ♣ < ♥ < ♠) only breaks ties when sorting cards for display.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    #[default]
    D = 0,
    C = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in tiebreak order.
    pub const fn all() -> [Suit; 4] {
        [Suit::D, Suit::C, Suit::H, Suit::S]
    }
    /// Unicode suit symbol for display.
    pub fn symbol(&self) -> char {
        match self {
            Suit::D => '♦',
            Suit::C => '♣',
            Suit::H => '♥',
            Suit::S => '♠',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::D,
            1 => Suit::C,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 representation
/// every card bit of this suit inside a Hand
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        match s {
            Suit::D => 0x0001111111111111,
            Suit::C => 0x0002222222222222,
            Suit::H => 0x0004444444444444,
            Suit::S => 0x0008888888888888,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "d" | "♦" => Ok(Suit::D),
            "c" | "♣" => Ok(Suit::C),
            "h" | "♥" => Ok(Suit::H),
            "s" | "♠" => Ok(Suit::S),
            _ => Err(format!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suit::D => write!(f, "d"),
            Suit::C => write!(f, "c"),
            Suit::H => write!(f, "h"),
            Suit::S => write!(f, "s"),
        }
    }
}
