/// The poker hand type of a grouping, weakest first.
///
/// Heads (3 cards) only ever reach [`Category::HighCard`],
/// [`Category::OnePair`] and [`Category::ThreeOAK`]; those three keep the
/// same relative order on both scales, so head and middle categories are
/// directly comparable.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Category {
    /// Every category, weakest first.
    pub const fn all() -> [Category; 9] {
        [
            Category::HighCard,
            Category::OnePair,
            Category::TwoPair,
            Category::ThreeOAK,
            Category::Straight,
            Category::Flush,
            Category::FullHouse,
            Category::FourOAK,
            Category::StraightFlush,
        ]
    }
    /// The categories reachable by a grouping of `size` cards.
    pub fn reachable(size: usize) -> &'static [Category] {
        static HEAD: [Category; 3] = [Category::HighCard, Category::OnePair, Category::ThreeOAK];
        static BODY: [Category; 9] = Category::all();
        match size {
            3 => &HEAD,
            5 => &BODY,
            _ => &[],
        }
    }
    /// Position on the shared strength scale.
    pub const fn strength(&self) -> u8 {
        *self as u8
    }
    /// Table name as players call it.
    pub fn hanzi(&self) -> &'static str {
        match self {
            Category::HighCard => "乌龙",
            Category::OnePair => "对子",
            Category::TwoPair => "两对",
            Category::ThreeOAK => "三条",
            Category::Straight => "顺子",
            Category::Flush => "同花",
            Category::FullHouse => "葫芦",
            Category::FourOAK => "铁支",
            Category::StraightFlush => "同花顺",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "HighCard"),
            Category::OnePair => write!(f, "OnePair"),
            Category::TwoPair => write!(f, "TwoPair"),
            Category::ThreeOAK => write!(f, "ThreeOfAKind"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::FullHouse => write!(f, "FullHouse"),
            Category::FourOAK => write!(f, "FourOfAKind"),
            Category::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}
