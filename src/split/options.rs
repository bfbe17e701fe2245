use crate::{MIDDLE_TOP_K, SEARCH_RESULTS, TAIL_TOP_K};
use std::time::Duration;

/// Knobs for the arrangement search.
///
/// The top-K limits trade exhaustiveness for speed; any value of at least
/// one still produces a legal arrangement. Limits read back as at least one
/// however they were built, deserialized values included. `max_candidates`
/// caps how many (tail, middle) pairs are scored and `budget` is a soft
/// wall-clock limit checked between tails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    tail_top_k: usize,
    middle_top_k: usize,
    results: usize,
    max_candidates: Option<usize>,
    budget: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tail_top_k: TAIL_TOP_K,
            middle_top_k: MIDDLE_TOP_K,
            results: SEARCH_RESULTS,
            max_candidates: None,
            budget: None,
        }
    }
}

impl Options {
    pub fn tail_top_k(&self) -> usize {
        self.tail_top_k.max(1)
    }
    pub fn middle_top_k(&self) -> usize {
        self.middle_top_k.max(1)
    }
    pub fn results(&self) -> usize {
        self.results.max(1)
    }
    pub fn max_candidates(&self) -> Option<usize> {
        self.max_candidates
    }
    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    pub fn with_tail_top_k(self, k: usize) -> Self {
        Self {
            tail_top_k: k.max(1),
            ..self
        }
    }
    pub fn with_middle_top_k(self, k: usize) -> Self {
        Self {
            middle_top_k: k.max(1),
            ..self
        }
    }
    pub fn with_results(self, n: usize) -> Self {
        Self {
            results: n.max(1),
            ..self
        }
    }
    pub fn with_max_candidates(self, n: usize) -> Self {
        Self {
            max_candidates: Some(n),
            ..self
        }
    }
    pub fn with_budget(self, budget: Duration) -> Self {
        Self {
            budget: Some(budget),
            ..self
        }
    }

    /// How many middles to score under each tail, after the candidate cap.
    pub fn middles(&self) -> usize {
        match self.max_candidates {
            None => self.middle_top_k(),
            Some(n) => self.middle_top_k().min(n).max(1),
        }
    }
    /// How many tails to expand, after the candidate cap. Together with
    /// [`Options::middles`] this never exceeds `max_candidates` pairs,
    /// except that one pair is always allowed.
    pub fn tails(&self) -> usize {
        match self.max_candidates {
            None => self.tail_top_k(),
            Some(n) => self.tail_top_k().min(n / self.middles()).max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_constants() {
        let options = Options::default();
        assert!(options.tail_top_k() == TAIL_TOP_K);
        assert!(options.middle_top_k() == MIDDLE_TOP_K);
        assert!(options.results() == SEARCH_RESULTS);
        assert!(options.tails() == TAIL_TOP_K);
    }

    #[test]
    fn limits_never_reach_zero() {
        let options = Options::default()
            .with_tail_top_k(0)
            .with_middle_top_k(0)
            .with_results(0)
            .with_max_candidates(0);
        assert!(options.tail_top_k() == 1);
        assert!(options.middle_top_k() == 1);
        assert!(options.results() == 1);
        assert!(options.tails() == 1);
        assert!(options.middles() == 1);
    }

    #[test]
    fn candidate_cap_limits_tails() {
        let options = Options::default().with_max_candidates(MIDDLE_TOP_K * 3);
        assert!(options.tails() == 3);
        assert!(options.middles() == MIDDLE_TOP_K);
        let options = Options::default().with_max_candidates(usize::MAX);
        assert!(options.tails() == TAIL_TOP_K);
        assert!(options.middles() == MIDDLE_TOP_K);
    }

    #[test]
    fn candidate_cap_below_one_tail_limits_middles() {
        let options = Options::default().with_max_candidates(5);
        assert!(options.tails() == 1);
        assert!(options.middles() == 5);
        for n in 1..=(TAIL_TOP_K * MIDDLE_TOP_K) {
            let options = Options::default().with_max_candidates(n);
            assert!(options.tails() * options.middles() <= n);
        }
    }

    #[cfg(feature = "client")]
    #[test]
    fn json_round_trip() {
        let options = Options::default().with_budget(Duration::from_millis(50));
        let json = serde_json::to_string(&options).unwrap();
        assert!(serde_json::from_str::<Options>(&json).unwrap() == options);
    }

    #[cfg(feature = "client")]
    #[test]
    fn zero_limits_from_json() {
        let json = r#"{"tail_top_k":0,"middle_top_k":0,"results":0,"max_candidates":10,"budget":null}"#;
        let options = serde_json::from_str::<Options>(json).unwrap();
        assert!(options.tail_top_k() == 1);
        assert!(options.middle_top_k() == 1);
        assert!(options.results() == 1);
        assert!(options.middles() == 1);
        assert!(options.tails() == 1);
        let hand = crate::cards::card::Card::parse("As Kh Qd Jc 9s 8h 8d 7c 6s 5h 4d 4c 3s").unwrap();
        let found = crate::split::splitter::search(&hand, &options).unwrap();
        assert!(found.len() == 1);
        assert!(!found[0].is_foul());
    }
}
