use super::hand::Hand;

/// Iterates over every k-card subset of a Hand.
///
/// The walk happens over an n-bit index space (n = cards in the hand) using
/// Gosper's hack, and each index mask is deposited back onto the hand's card
/// bits. So C(13,5) costs 1287 steps, not a filtered sweep of C(52,5).
/// Order is deterministic: lexicographic in index-mask order.
pub struct Subsets {
    bits: Vec<u64>,
    next: u64,
    size: usize,
    done: bool,
}

impl Subsets {
    /// Number of subsets this iterator yields in total.
    pub fn combinations(&self) -> usize {
        let n = self.bits.len();
        let k = self.size;
        match k > n {
            true => 0,
            false => (0..k).fold(1, |x, i| x * (n - i) / (i + 1)),
        }
    }

    fn exhausted(&self) -> bool {
        self.done || self.next >> self.bits.len() != 0
    }

    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }

    fn current(&self) -> Hand {
        let mut index = self.next;
        let mut cards = 0u64;
        while index > 0 {
            cards |= self.bits[index.trailing_zeros() as usize];
            index &= index - 1;
        }
        Hand::from(cards)
    }

    fn advance(&mut self) {
        match self.next {
            0 => self.done = true,
            _ => self.next = self.permute(),
        }
    }
}

impl Iterator for Subsets {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let hand = self.current();
            self.advance();
            Some(hand)
        }
    }
}

/// size and source are immutable and must be decided at construction
impl From<(usize, Hand)> for Subsets {
    fn from((k, hand): (usize, Hand)) -> Self {
        let bits = hand.map(u64::from).collect::<Vec<u64>>();
        Self {
            done: k > bits.len(),
            next: (1u64 << k) - 1,
            size: k,
            bits,
        }
    }
}
